//! Backend commands queued from the UI to the backend worker.

use client_core::ClientError;

use crate::controller::{events::SessionEvent, state::RequestToken};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    CheckSymptoms {
        token: RequestToken,
        symptoms: String,
    },
    FetchHistory {
        token: RequestToken,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CheckSymptoms { .. } => "check_symptoms",
            Self::FetchHistory { .. } => "fetch_history",
        }
    }

    pub fn token(&self) -> RequestToken {
        match self {
            Self::CheckSymptoms { token, .. } | Self::FetchHistory { token } => *token,
        }
    }

    /// The resolution event for a command that never reached the worker.
    pub fn into_failure(self, error: ClientError) -> SessionEvent {
        match self {
            Self::CheckSymptoms { token, .. } => SessionEvent::AnalysisResolved {
                token,
                outcome: Err(error),
            },
            Self::FetchHistory { token } => SessionEvent::HistoryResolved {
                token,
                outcome: Err(error),
            },
        }
    }
}
