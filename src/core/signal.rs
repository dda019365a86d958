//! Interrupt handling.
//!
//! Installs handlers for SIGINT (Ctrl+C) and SIGTERM that cancel the
//! [`CancellationToken`] handed to every secret store call, so an in-flight
//! gopass process is killed instead of left hanging.

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Install signal handlers on the current runtime.
///
/// Returns a token that is cancelled when either signal arrives. Must be
/// called from within a tokio runtime.
pub fn install_interrupt_handler() -> CancellationToken {
    let token = CancellationToken::new();
    let token_clone = token.clone();

    tokio::spawn(async move {
        let ctrl_c = tokio::signal::ctrl_c();

        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};

            match signal(SignalKind::terminate()) {
                Ok(mut sigterm) => {
                    tokio::select! {
                        _ = ctrl_c => info!("received SIGINT, cancelling"),
                        _ = sigterm.recv() => info!("received SIGTERM, cancelling"),
                        _ = token_clone.cancelled() => return,
                    }
                }
                Err(e) => {
                    warn!(error = %e, "failed to install SIGTERM handler");
                    tokio::select! {
                        _ = ctrl_c => info!("received SIGINT, cancelling"),
                        _ = token_clone.cancelled() => return,
                    }
                }
            }
        }

        #[cfg(not(unix))]
        {
            tokio::select! {
                _ = ctrl_c => info!("received Ctrl+C, cancelling"),
                _ = token_clone.cancelled() => return,
            }
        }

        token_clone.cancel();
        debug!("interrupt handler completed");
    });

    token
}
