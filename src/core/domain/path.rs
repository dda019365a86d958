//! Store path derivation.
//!
//! Maps a credential onto the hierarchical key it lives under in the secret
//! store: `<prefix>/<host>[/<username>]`.

use crate::core::constants::{DEFAULT_PREFIX, PATH_SEPARATOR};
use crate::core::domain::Credential;
use crate::error::Result;

/// Hierarchical key addressing one credential in the secret store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorePath(String);

impl StorePath {
    /// Derive the store path for a credential.
    ///
    /// An empty `prefix` selects [`DEFAULT_PREFIX`]. Without a username the
    /// path addresses the host's default credential.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::MissingHost` if the credential names no host,
    /// either directly or through its `url`.
    pub fn derive(credential: &Credential, prefix: &str) -> Result<Self> {
        let (host, username) = credential.target()?;

        let prefix = prefix.trim_matches(PATH_SEPARATOR);
        let prefix = if prefix.is_empty() {
            DEFAULT_PREFIX
        } else {
            prefix
        };

        let mut path = String::from(prefix);
        path.push(PATH_SEPARATOR);
        path.push_str(&segment(&host));
        if let Some(username) = username {
            path.push(PATH_SEPARATOR);
            path.push_str(&segment(&username));
        }

        Ok(Self(path))
    }

    /// Path one level below this one.
    pub fn join(&self, name: &str) -> Self {
        Self(format!("{}{}{}", self.0, PATH_SEPARATOR, segment(name)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StorePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StorePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Make a value safe to use as a single path segment.
///
/// `:` (host ports) is not accepted by gopass in entry names; `/` would open a
/// new level.
fn segment(value: &str) -> String {
    value.replace([':', PATH_SEPARATOR], "_")
}
