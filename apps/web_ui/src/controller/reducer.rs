//! The only place session state changes. Returns the backend command an
//! event calls for, if any.

use client_core::validate_submission;
use tracing::{debug, info, warn};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::SessionEvent,
    state::{RequestKind, SessionState, View},
};

pub fn reduce(state: &mut SessionState, event: SessionEvent) -> Option<BackendCommand> {
    match event {
        SessionEvent::SymptomsEdited(text) => {
            state.symptoms_text = text;
            None
        }
        SessionEvent::ConsentSet(consent_given) => {
            state.consent_given = consent_given;
            None
        }
        SessionEvent::ConsentToggled => {
            state.consent_given = !state.consent_given;
            None
        }
        SessionEvent::Navigate(View::Checker) => {
            state.switch_view(View::Checker);
            None
        }
        SessionEvent::Navigate(View::History) => {
            state.switch_view(View::History);
            let token = state.begin_request(RequestKind::History);
            Some(BackendCommand::FetchHistory { token })
        }
        SessionEvent::Submit => submit(state),
        SessionEvent::AnalysisResolved { token, outcome } => {
            if !state.settle(token, RequestKind::Analysis) {
                debug!(token = token.0, "discarding stale analysis response");
                return None;
            }
            match outcome {
                Ok(result) => state.analysis_result = Some(result),
                Err(err) => {
                    warn!(token = token.0, kind = err.kind().label(), "analysis failed");
                    state.error_message = Some(err.message().to_string());
                }
            }
            None
        }
        SessionEvent::HistoryResolved { token, outcome } => {
            if !state.settle(token, RequestKind::History) {
                debug!(token = token.0, "discarding stale history response");
                return None;
            }
            match outcome {
                Ok(records) => state.mark_history_loaded(records),
                Err(err) => {
                    warn!(token = token.0, kind = err.kind().label(), "history fetch failed");
                    state.mark_history_failed(err.message().to_string());
                }
            }
            None
        }
    }
}

fn submit(state: &mut SessionState) -> Option<BackendCommand> {
    if state.active_view != View::Checker {
        debug!("submission ignored outside the checker view");
        return None;
    }
    if state.is_loading() {
        info!("submission ignored; a request is already in flight");
        return None;
    }
    if let Err(err) = validate_submission(&state.symptoms_text, state.consent_given) {
        state.error_message = Some(err.message().to_string());
        return None;
    }

    state.analysis_result = None;
    let token = state.begin_request(RequestKind::Analysis);
    Some(BackendCommand::CheckSymptoms {
        token,
        symptoms: state.symptoms_text.clone(),
    })
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
