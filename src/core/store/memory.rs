//! In-process secret store.
//!
//! Keeps secrets in a map for the lifetime of the value. Nothing is persisted;
//! used as the mock backend when exercising the helper without gopass.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::SecretStore;
use crate::core::domain::{StorePath, StoredSecret};
use crate::error::{Result, StoreError};

/// Map-backed secret store.
#[derive(Debug, Default)]
pub struct Memory {
    entries: Mutex<BTreeMap<String, StoredSecret>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, StoredSecret>>> {
        self.entries
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store poisoned".to_string()).into())
    }

    fn check(token: &CancellationToken) -> Result<()> {
        if token.is_cancelled() {
            return Err(StoreError::Cancelled.into());
        }
        Ok(())
    }
}

#[async_trait]
impl SecretStore for Memory {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn get(
        &self,
        path: &StorePath,
        token: &CancellationToken,
    ) -> Result<Option<StoredSecret>> {
        Self::check(token)?;
        Ok(self.lock()?.get(path.as_str()).cloned())
    }

    async fn set(
        &self,
        path: &StorePath,
        secret: &StoredSecret,
        token: &CancellationToken,
    ) -> Result<()> {
        Self::check(token)?;
        self.lock()?
            .insert(path.as_str().to_string(), secret.clone());
        Ok(())
    }

    async fn delete(&self, path: &StorePath, token: &CancellationToken) -> Result<()> {
        Self::check(token)?;
        self.lock()?.remove(path.as_str());
        Ok(())
    }

    async fn list(&self, path: &StorePath, token: &CancellationToken) -> Result<Vec<String>> {
        Self::check(token)?;
        let prefix = format!("{}/", path);
        Ok(self
            .lock()?
            .keys()
            .filter(|name| name.starts_with(&prefix))
            .cloned()
            .collect())
    }
}
