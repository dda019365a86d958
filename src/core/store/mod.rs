//! Secret store backends.
//!
//! The credential helper owns no persistence of its own: every secret lives in
//! an external store addressed by hierarchical paths.
//!
//! ## Adding a New Storage Backend
//!
//! 1. Implement the `SecretStore` trait
//! 2. Add the implementation in a new file (e.g., `pass.rs`)
//! 3. Re-export from this module and select it in `backend.rs`
//!
//! Every call takes the invocation's [`CancellationToken`]; a backend must
//! return `StoreError::Cancelled` promptly once it fires instead of finishing
//! the operation.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::core::domain::{StorePath, StoredSecret};
use crate::error::Result;

mod backend;
mod gopass;
mod memory;

pub use backend::default_backend;
pub use gopass::Gopass;
pub use memory::Memory;

/// Path-addressed secret storage.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Fetch the secret at `path`.
    ///
    /// # Returns
    ///
    /// `None` when nothing is stored there. A missing entry is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend fails or the token is cancelled.
    async fn get(&self, path: &StorePath, token: &CancellationToken)
        -> Result<Option<StoredSecret>>;

    /// Write `secret` at `path`, replacing any existing entry.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend fails or the token is cancelled.
    async fn set(
        &self,
        path: &StorePath,
        secret: &StoredSecret,
        token: &CancellationToken,
    ) -> Result<()>;

    /// Remove the entry at `path`. Removing a missing entry succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend fails or the token is cancelled.
    async fn delete(&self, path: &StorePath, token: &CancellationToken) -> Result<()>;

    /// Full names of all entries below `path`, at any depth.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend fails or the token is cancelled.
    async fn list(&self, path: &StorePath, token: &CancellationToken) -> Result<Vec<String>>;
}
