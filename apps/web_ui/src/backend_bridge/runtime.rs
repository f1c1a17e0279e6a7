//! Backend worker: runs queued commands against the analysis service and
//! feeds each resolution back into the session.

use std::sync::Arc;

use client_core::TriageApi;
use tokio::{
    sync::{mpsc::Receiver, Mutex},
    task::JoinHandle,
};
use tracing::{info, warn};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{events::SessionEvent, reducer::reduce, state::SessionState};

pub type SharedSession = Arc<Mutex<SessionState>>;

pub fn launch(
    api: Arc<dyn TriageApi>,
    session: SharedSession,
    cmd_rx: Receiver<BackendCommand>,
) -> JoinHandle<()> {
    tokio::spawn(run(api, session, cmd_rx))
}

async fn run(api: Arc<dyn TriageApi>, session: SharedSession, mut cmd_rx: Receiver<BackendCommand>) {
    info!("backend worker started");
    while let Some(cmd) = cmd_rx.recv().await {
        // Each command runs on its own task so a slow request never holds up
        // the one that superseded it.
        let api = Arc::clone(&api);
        let session = Arc::clone(&session);
        tokio::spawn(async move {
            let event = execute(api.as_ref(), cmd).await;
            let mut state = session.lock().await;
            if let Some(follow_up) = reduce(&mut state, event) {
                warn!(command = follow_up.name(), "resolution produced an unexpected command");
            }
        });
    }
    info!("backend worker stopped");
}

pub async fn execute(api: &dyn TriageApi, cmd: BackendCommand) -> SessionEvent {
    match cmd {
        BackendCommand::CheckSymptoms { token, symptoms } => {
            let outcome = api.check_symptoms(&symptoms).await;
            info!(token = token.0, ok = outcome.is_ok(), "analysis request resolved");
            SessionEvent::AnalysisResolved { token, outcome }
        }
        BackendCommand::FetchHistory { token } => {
            let outcome = api.fetch_history().await;
            info!(token = token.0, ok = outcome.is_ok(), "history request resolved");
            SessionEvent::HistoryResolved { token, outcome }
        }
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
