//! Constants used throughout git-credential-gopass.
//!
//! Centralizes magic strings and configuration values.

/// First store path segment when no `--store` prefix is given.
pub const DEFAULT_PREFIX: &str = "git";

/// Separator between store path segments (gopass's hierarchy delimiter).
pub const PATH_SEPARATOR: char = '/';

/// Name git expands to `git-credential-gopass` when set as `credential.helper`.
pub const HELPER_NAME: &str = "gopass";

/// Git configuration key written by `configure`.
pub const HELPER_CONFIG_KEY: &str = "credential.helper";

/// Default gopass executable name, resolved on `PATH`.
pub const GOPASS_BIN: &str = "gopass";

/// Default per-operation timeout for the secret store, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Directory under the user config dir holding `config.toml`.
pub const CONFIG_DIR: &str = "git-credential-gopass";

/// Settings file name.
pub const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the settings file location.
pub const CONFIG_ENV: &str = "GIT_CREDENTIAL_GOPASS_CONFIG";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "GIT_CREDENTIAL_GOPASS_LOG";

/// Secret body keys accepted as the stored username, compared case-insensitively.
///
/// The first entry is the one written.
pub const LOGIN_KEYS: &[&str] = &["login", "username", "user"];

/// Executable name, as git looks it up for the `gopass` helper.
pub const BIN_NAME: &str = "git-credential-gopass";
