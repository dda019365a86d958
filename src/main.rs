//! git-credential-gopass - Use gopass as git's credential helper.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use git_credential_gopass::cli::output;
use git_credential_gopass::cli::{execute, Cli};
use git_credential_gopass::core::constants::LOG_ENV;
use git_credential_gopass::error::{Error, StoreError};

fn main() {
    let cli = Cli::parse();

    // Stdout carries the credential protocol, so logs go to stderr.
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("git_credential_gopass=debug")
        } else {
            EnvFilter::new("git_credential_gopass=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Store(StoreError::Unavailable(_)) => {
                Some("install gopass or point --gopass-bin at it")
            }
            Error::Store(StoreError::Timeout(_)) => Some("raise --timeout if gopass is slow to unlock"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
