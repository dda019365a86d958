//! Configure command.
//!
//! Installs this program as git's `credential.helper`.

use crate::cli::output;
use crate::core::git::{self, Scope};
use crate::error::Result;

/// Scope selected by the mutually exclusive flags.
pub fn scope(global: bool, local: bool, system: bool) -> Scope {
    if global {
        Scope::Global
    } else if local {
        Scope::Local
    } else if system {
        Scope::System
    } else {
        Scope::Default
    }
}

/// Write (or with `dry_run`, print) the git configuration.
pub fn execute(scope: Scope, store: Option<&str>, dry_run: bool) -> Result<()> {
    let args = git::config_args(scope, store)?;

    if dry_run {
        println!("git {}", shell_words(&args));
        return Ok(());
    }

    git::run_git(&args)?;
    output::success(&format!(
        "credential.helper set to {}",
        output::cmd(&git::helper_value(store)?)
    ));
    Ok(())
}

/// Join arguments for display, quoting any containing spaces.
fn shell_words(args: &[String]) -> String {
    args.iter()
        .map(|arg| {
            if arg.contains(' ') {
                format!("\"{}\"", arg)
            } else {
                arg.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
