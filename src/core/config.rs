//! Settings resolution.
//!
//! Values come from, in order of precedence: command-line flags (which clap
//! also fills from `GIT_CREDENTIAL_GOPASS_*` environment variables), the
//! optional `config.toml`, then built-in defaults.
//!
//! ```toml
//! # ~/.config/git-credential-gopass/config.toml
//! store = "work"
//! gopass_bin = "/usr/local/bin/gopass"
//! timeout = 60
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Contents of `config.toml`. Every field is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// First store path segment
    pub store: Option<String>,
    /// gopass executable name or path
    pub gopass_bin: Option<PathBuf>,
    /// Per-operation timeout in seconds
    pub timeout: Option<u64>,
}

impl FileConfig {
    /// Load a config file.
    ///
    /// A missing file yields an empty config.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` if the file exists but cannot be read, or
    /// `ConfigError::Parse` if it is not valid.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;

        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Location of the config file.
    ///
    /// `$GIT_CREDENTIAL_GOPASS_CONFIG` if set, otherwise
    /// `<config dir>/git-credential-gopass/config.toml`.
    pub fn path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(constants::CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join(constants::CONFIG_DIR).join(constants::CONFIG_FILE))
    }
}

/// Values given on the command line (or their environment fallbacks).
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub store: Option<String>,
    pub gopass_bin: Option<PathBuf>,
    pub timeout: Option<u64>,
}

/// Effective settings for one invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Store path prefix; empty selects the default prefix
    pub store: String,
    pub gopass_bin: PathBuf,
    pub timeout: Duration,
}

impl Settings {
    /// Resolve settings from overrides, the default config file and defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file is unreadable or invalid, or a
    /// value is out of range.
    pub fn resolve(overrides: Overrides) -> Result<Self> {
        let file = match FileConfig::path() {
            Some(path) => FileConfig::load(&path)?,
            None => FileConfig::default(),
        };
        Self::merge(overrides, file)
    }

    /// Layer `overrides` over `file` over built-in defaults.
    pub fn merge(overrides: Overrides, file: FileConfig) -> Result<Self> {
        let timeout = overrides
            .timeout
            .or(file.timeout)
            .unwrap_or(constants::DEFAULT_TIMEOUT_SECS);
        if timeout == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout".to_string(),
                reason: "must be at least 1 second".to_string(),
            }
            .into());
        }

        Ok(Self {
            store: overrides.store.or(file.store).unwrap_or_default(),
            gopass_bin: overrides
                .gopass_bin
                .or(file.gopass_bin)
                .unwrap_or_else(|| PathBuf::from(constants::GOPASS_BIN)),
            timeout: Duration::from_secs(timeout),
        })
    }
}
