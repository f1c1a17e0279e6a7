//! Command orchestration from UI events to the backend command queue.

use client_core::ClientError;
use tokio::sync::mpsc::{error::TrySendError, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{events::SessionEvent, reducer::reduce, state::SessionState};

/// Applies a UI event and queues whatever command it produces.
pub fn handle_event(state: &mut SessionState, cmd_tx: &Sender<BackendCommand>, event: SessionEvent) {
    tracing::debug!(event = event.name(), "applying session event");
    if let Some(cmd) = reduce(state, event) {
        dispatch_backend_command(cmd_tx, cmd, state);
    }
}

/// Queues `cmd` for the backend worker. A command that cannot be queued is
/// resolved immediately as a failure so the session never stays loading.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    state: &mut SessionState,
) {
    let cmd_name = cmd.name();
    let token = cmd.token();

    let (cmd, message) = match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, token = token.0, "queued ui->backend command");
            return;
        }
        Err(TrySendError::Full(cmd)) => {
            tracing::warn!(command = cmd_name, "backend command queue is full");
            (cmd, "Too many pending requests; please retry.")
        }
        Err(TrySendError::Closed(cmd)) => {
            tracing::error!(command = cmd_name, "backend worker is no longer running");
            (
                cmd,
                "The background worker stopped unexpectedly; restart the app and retry.",
            )
        }
    };

    let failure = cmd.into_failure(ClientError::Network(message.to_string()));
    if let Some(follow_up) = reduce(state, failure) {
        tracing::warn!(
            command = follow_up.name(),
            "queue failure resolution produced an unexpected command"
        );
    }
}

#[cfg(test)]
#[path = "tests/orchestration_tests.rs"]
mod tests;
