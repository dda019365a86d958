//! Credential helper operations.
//!
//! Implements git's three verbs on top of a [`SecretStore`]: each call maps
//! the credential to a [`StorePath`] and performs exactly one logical store
//! operation.

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::core::constants::PATH_SEPARATOR;
use crate::core::domain::{Credential, StorePath, StoredSecret};
use crate::core::store::SecretStore;
use crate::error::{ProtocolError, Result};

/// Verb handlers bound to a store and a path prefix.
pub struct Helper<'a> {
    store: &'a dyn SecretStore,
    prefix: &'a str,
}

impl<'a> Helper<'a> {
    /// Create handlers over `store`. An empty `prefix` selects the default.
    pub fn new(store: &'a dyn SecretStore, prefix: &'a str) -> Self {
        Self { store, prefix }
    }

    /// Store path for a credential under this helper's prefix.
    pub fn path(&self, credential: &Credential) -> Result<StorePath> {
        StorePath::derive(credential, self.prefix)
    }

    /// Answer a `get` request.
    ///
    /// Returns the credential with `password` filled in, plus `username` when
    /// the request lacked one and the store knows it. A miss returns the
    /// request unchanged so git can prompt.
    ///
    /// Without a username the host's default entry is used; if that does not
    /// exist but exactly one user entry is stored below the host, that one is.
    /// A username-qualified miss does not fall back.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::MissingHost` if no host is given, or
    /// `StoreError` if the backend fails.
    pub async fn get(&self, credential: Credential, token: &CancellationToken) -> Result<Credential> {
        let path = self.path(&credential)?;
        let (_, username) = credential.target()?;
        debug!(verb = "get", path = %path, backend = self.store.name(), "looking up credential");

        let found = match self.store.get(&path, token).await? {
            Some(secret) => Some((secret, None)),
            None if username.is_none() => self.sole_entry_below(&path, token).await?,
            None => None,
        };

        let Some((secret, entry_user)) = found else {
            debug!(path = %path, "no credential stored");
            return Ok(credential);
        };

        let mut answer = credential;
        answer.password = Some(secret.password().to_string());
        if answer.username.is_none() {
            answer.username = secret.username().map(str::to_string).or(entry_user);
        }
        Ok(answer)
    }

    /// Save the credential from a `store` request, overwriting any entry.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::MissingPassword` or `MissingHost` if required
    /// fields are absent, or `StoreError` if the backend fails.
    pub async fn store(&self, credential: &Credential, token: &CancellationToken) -> Result<()> {
        let password = credential
            .password
            .as_deref()
            .ok_or(ProtocolError::MissingPassword)?;
        let path = self.path(credential)?;
        let (_, username) = credential.target()?;
        debug!(verb = "store", path = %path, backend = self.store.name(), "saving credential");

        let secret = StoredSecret::new(password, username);
        self.store.set(&path, &secret, token).await
    }

    /// Remove the credential named by an `erase` request. Erasing an entry
    /// that does not exist succeeds.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::MissingHost` if no host is given, or
    /// `StoreError` if the backend fails.
    pub async fn erase(&self, credential: &Credential, token: &CancellationToken) -> Result<()> {
        let path = self.path(credential)?;
        debug!(verb = "erase", path = %path, backend = self.store.name(), "erasing credential");
        self.store.delete(&path, token).await
    }

    /// The only entry one level below `path`, with its last segment.
    async fn sole_entry_below(
        &self,
        path: &StorePath,
        token: &CancellationToken,
    ) -> Result<Option<(StoredSecret, Option<String>)>> {
        let prefix = format!("{}{}", path, PATH_SEPARATOR);
        let children: Vec<String> = self
            .store
            .list(path, token)
            .await?
            .into_iter()
            .filter(|name| {
                name.strip_prefix(&prefix)
                    .is_some_and(|rest| !rest.is_empty() && !rest.contains(PATH_SEPARATOR))
            })
            .collect();

        let [child] = children.as_slice() else {
            if children.len() > 1 {
                debug!(path = %path, entries = children.len(), "several users stored, not guessing");
            }
            return Ok(None);
        };

        let user = child[prefix.len()..].to_string();
        let child_path = path.join(&user);
        debug!(path = %child_path, "using sole entry for host");
        Ok(self
            .store
            .get(&child_path, token)
            .await?
            .map(|secret| (secret, Some(user))))
    }
}
