//! Command-line interface.

pub mod completions;
pub mod configure;
pub mod output;
pub mod verb;

use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand};

use crate::core::config::{Overrides, Settings};
use crate::error::Result;

/// Use gopass as git's credential helper.
#[derive(Parser)]
#[command(
    name = "git-credential-gopass",
    about = "Use gopass as git's credential helper",
    long_about = "Caches git credentials in gopass.\n\n\
                  Activate with `git-credential-gopass configure --global`, or \
                  `git config --global credential.helper gopass`.",
    version
)]
pub struct Cli {
    /// First part of the path used to find the secret
    #[arg(long, global = true, value_name = "PREFIX", env = "GIT_CREDENTIAL_GOPASS_STORE")]
    pub store: Option<String>,

    /// gopass executable to run
    #[arg(long, global = true, value_name = "PATH", env = "GIT_CREDENTIAL_GOPASS_BIN")]
    pub gopass_bin: Option<PathBuf>,

    /// Seconds to wait for gopass before giving up
    #[arg(long, global = true, value_name = "SECS", env = "GIT_CREDENTIAL_GOPASS_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Return a matching credential (called by git)
    #[command(hide = true)]
    Get,

    /// Save a credential (called by git)
    #[command(hide = true)]
    Store,

    /// Remove a matching credential (called by git)
    #[command(hide = true)]
    Erase,

    /// Configure git-credential-gopass as git's credential.helper
    #[command(group(ArgGroup::new("scope").args(["global", "local", "system"])))]
    Configure {
        /// Install for current user
        #[arg(long)]
        global: bool,
        /// Install for current repository only
        #[arg(long)]
        local: bool,
        /// Install for all users, requires superuser rights
        #[arg(long)]
        system: bool,
        /// Print the git command instead of running it
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

impl Cli {
    /// Flag values that take part in settings resolution.
    fn overrides(&self) -> Overrides {
        Overrides {
            store: self.store.clone(),
            gopass_bin: self.gopass_bin.clone(),
            timeout: self.timeout,
        }
    }
}

/// Execute a command.
pub fn execute(cli: Cli) -> Result<()> {
    use Command::*;

    let overrides = cli.overrides();
    match cli.command {
        Completions { shell } => completions::execute(shell),
        Configure {
            global,
            local,
            system,
            dry_run,
        } => {
            let scope = configure::scope(global, local, system);
            configure::execute(scope, cli.store.as_deref(), dry_run)
        }
        Get => verb::execute(verb::Verb::Get, &Settings::resolve(overrides)?),
        Store => verb::execute(verb::Verb::Store, &Settings::resolve(overrides)?),
        Erase => verb::execute(verb::Verb::Erase, &Settings::resolve(overrides)?),
    }
}
