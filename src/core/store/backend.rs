//! Backend selection logic for secret storage
//!
//! Resolves the gopass executable from the settings and builds the backend
//! the verb handlers talk to.

use tracing::info;

use super::{Gopass, SecretStore};
use crate::core::config::Settings;
use crate::error::Result;

/// Default backend selection
///
/// gopass, located via `Settings::gopass_bin` (a bare name is searched on
/// `PATH`).
///
/// # Errors
///
/// Returns `StoreError::Unavailable` if the gopass executable cannot be found.
pub fn default_backend(settings: &Settings) -> Result<Box<dyn SecretStore>> {
    let gopass = Gopass::new(Gopass::locate(&settings.gopass_bin)?, settings.timeout);
    info!(bin = %gopass.bin().display(), "Using gopass backend");
    Ok(Box::new(gopass))
}
