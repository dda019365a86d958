//! Git configuration for the helper.
//!
//! `configure` points `credential.helper` at this program by running
//! `git config`; git itself decides where the entry is written.

use std::process::{Command, Stdio};
use tracing::{debug, info};

use crate::core::constants::{HELPER_CONFIG_KEY, HELPER_NAME};
use crate::error::{ConfigError, Result};

/// Which git configuration file receives the helper entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// The current user's `~/.gitconfig`
    Global,
    /// The current repository's `.git/config`
    Local,
    /// The system-wide config, usually needing superuser rights
    System,
    /// Whatever `git config` writes to without a scope flag
    Default,
}

impl Scope {
    fn flag(self) -> Option<&'static str> {
        match self {
            Scope::Global => Some("--global"),
            Scope::Local => Some("--local"),
            Scope::System => Some("--system"),
            Scope::Default => None,
        }
    }
}

/// Value written to `credential.helper`.
///
/// Git expands a bare helper name to `git-credential-<name>`, and splits the
/// value on whitespace, so a prefix containing whitespace or quotes is
/// rejected rather than quoted.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for a prefix git would split.
pub fn helper_value(store: Option<&str>) -> Result<String> {
    match store.filter(|s| !s.is_empty()) {
        None => Ok(HELPER_NAME.to_string()),
        Some(store) => {
            if store
                .chars()
                .any(|c| c.is_whitespace() || c == '"' || c == '\'' || c == '\\')
            {
                return Err(ConfigError::InvalidValue {
                    field: "store".to_string(),
                    reason: "must not contain whitespace, quotes or backslashes".to_string(),
                }
                .into());
            }
            Ok(format!("{} --store={}", HELPER_NAME, store))
        }
    }
}

/// Arguments for the `git` invocation that installs the helper.
pub fn config_args(scope: Scope, store: Option<&str>) -> Result<Vec<String>> {
    let mut args = vec!["config".to_string()];
    if let Some(flag) = scope.flag() {
        args.push(flag.to_string());
    }
    args.push("--replace-all".to_string());
    args.push(HELPER_CONFIG_KEY.to_string());
    args.push(helper_value(store)?);
    Ok(args)
}

/// Run `git` with `args`.
///
/// # Errors
///
/// Returns `ConfigError::GitConfig` if git cannot be started or exits
/// unsuccessfully.
pub fn run_git(args: &[String]) -> Result<()> {
    debug!(args = ?args, "running git");

    let output = Command::new("git")
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| ConfigError::GitConfig(format!("failed to run git: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let reason = match stderr.trim() {
            "" => output.status.to_string(),
            msg => msg.to_string(),
        };
        return Err(ConfigError::GitConfig(reason).into());
    }

    info!("credential.helper configured");
    Ok(())
}
