//! Protocol verbs.
//!
//! `get`, `store` and `erase` as git invokes them: a credential on stdin,
//! one store operation, and for `get` a credential on stdout.

use std::io;

use tracing::debug;

use crate::cli::output;
use crate::core::config::Settings;
use crate::core::domain::Credential;
use crate::core::helper::Helper;
use crate::core::{protocol, signal, store};
use crate::error::Result;

/// Credential-helper operation requested by git.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Store,
    Erase,
}

/// Run one verb against the configured secret store.
pub fn execute(verb: Verb, settings: &Settings) -> Result<()> {
    if atty::is(atty::Stream::Stdin) {
        output::hint("reading credential from terminal: enter key=value lines, then an empty line");
    }

    let credential = protocol::decode(io::stdin().lock())?;
    debug!(?verb, "read credential request");

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    rt.block_on(run(verb, credential, settings))
}

async fn run(verb: Verb, credential: Credential, settings: &Settings) -> Result<()> {
    let token = signal::install_interrupt_handler();
    let backend = store::default_backend(settings)?;
    let helper = Helper::new(backend.as_ref(), &settings.store);

    let result = match verb {
        Verb::Get => match helper.get(credential, &token).await {
            Ok(answer) => protocol::encode(&answer, io::stdout().lock()),
            Err(e) => Err(e),
        },
        Verb::Store => helper.store(&credential, &token).await,
        Verb::Erase => helper.erase(&credential, &token).await,
    };

    // Release the signal handler task.
    token.cancel();
    result
}
