//! Events applied to the session by user actions and backend resolutions.

use client_core::ClientError;
use shared::domain::{AnalysisResult, HistoryRecord};

use crate::controller::state::{RequestToken, View};

#[derive(Debug, Clone)]
pub enum SessionEvent {
    SymptomsEdited(String),
    ConsentSet(bool),
    ConsentToggled,
    Navigate(View),
    Submit,
    AnalysisResolved {
        token: RequestToken,
        outcome: Result<AnalysisResult, ClientError>,
    },
    HistoryResolved {
        token: RequestToken,
        outcome: Result<Vec<HistoryRecord>, ClientError>,
    },
}

impl SessionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SymptomsEdited(_) => "symptoms_edited",
            Self::ConsentSet(_) => "consent_set",
            Self::ConsentToggled => "consent_toggled",
            Self::Navigate(_) => "navigate",
            Self::Submit => "submit",
            Self::AnalysisResolved { .. } => "analysis_resolved",
            Self::HistoryResolved { .. } => "history_resolved",
        }
    }
}
