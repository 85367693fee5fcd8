//! Shutdown signal handling for the watch command.
//!
//! Interrupts never reach into a running tick. The listener only cancels the
//! monitor's stop token, and the loop notices at its next tick boundary.

use crate::libs::messages::Message;
use crate::{msg_error, msg_info};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Spawns a task that cancels `token` on SIGINT/SIGTERM (Ctrl+C on Windows).
pub fn spawn_shutdown_listener(token: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};

            let (mut sigterm, mut sigint) = match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
                (Ok(sigterm), Ok(sigint)) => (sigterm, sigint),
                (Err(_), _) => {
                    msg_error!(Message::FailedToCreateSigtermHandler);
                    return;
                }
                (_, Err(_)) => {
                    msg_error!(Message::FailedToCreateSigintHandler);
                    return;
                }
            };

            tokio::select! {
                _ = sigterm.recv() => {
                    msg_info!(Message::WatcherReceivedSigterm);
                }
                _ = sigint.recv() => {
                    msg_info!(Message::WatcherReceivedSigint);
                }
                _ = token.cancelled() => return,
            }

            msg_info!(Message::MonitorStopping);
            token.cancel();
        }

        #[cfg(windows)]
        {
            tokio::select! {
                result = tokio::signal::ctrl_c() => match result {
                    Ok(()) => msg_info!(Message::WatcherReceivedCtrlC),
                    Err(e) => {
                        msg_error!(Message::WatcherCtrlCListenFailed(e.to_string()));
                        return;
                    }
                },
                _ = token.cancelled() => return,
            }

            msg_info!(Message::MonitorStopping);
            token.cancel();
        }

        #[cfg(not(any(unix, windows)))]
        {
            let _ = token;
            crate::msg_warning!(Message::WatcherSignalHandlingNotSupported);
        }
    })
}
