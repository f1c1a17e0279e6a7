//! Session state owned by the UI and the phase derived from it.

use shared::domain::{AnalysisResult, HistoryRecord};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Checker,
    History,
}

impl View {
    pub fn slug(self) -> &'static str {
        match self {
            Self::Checker => "checker",
            Self::History => "history",
        }
    }
}

/// Identifies one dispatched request. Tokens only ever increase, so a
/// response can be matched against the request currently pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Analysis,
    History,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRequest {
    pub token: RequestToken,
    pub kind: RequestKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    CheckerIdle,
    CheckerLoading,
    CheckerResult,
    CheckerError,
    HistoryIdle,
    HistoryLoading,
    HistoryLoaded,
    HistoryError,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Self::CheckerIdle => "checker-idle",
            Self::CheckerLoading => "checker-loading",
            Self::CheckerResult => "checker-result",
            Self::CheckerError => "checker-error",
            Self::HistoryIdle => "history-idle",
            Self::HistoryLoading => "history-loading",
            Self::HistoryLoaded => "history-loaded",
            Self::HistoryError => "history-error",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub symptoms_text: String,
    pub consent_given: bool,
    pub active_view: View,
    pub error_message: Option<String>,
    pub analysis_result: Option<AnalysisResult>,
    pub history_records: Vec<HistoryRecord>,
    history_loaded: bool,
    pending: Option<PendingRequest>,
    next_token: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<PendingRequest> {
        self.pending
    }

    pub fn history_loaded(&self) -> bool {
        self.history_loaded
    }

    /// Whether the form may be edited and submitted right now.
    pub fn input_enabled(&self) -> bool {
        self.consent_given && !self.is_loading()
    }

    pub fn phase(&self) -> Phase {
        match self.active_view {
            View::Checker => {
                if self.is_loading() {
                    Phase::CheckerLoading
                } else if self.error_message.is_some() {
                    Phase::CheckerError
                } else if self.analysis_result.is_some() {
                    Phase::CheckerResult
                } else {
                    Phase::CheckerIdle
                }
            }
            View::History => {
                if self.is_loading() {
                    Phase::HistoryLoading
                } else if self.error_message.is_some() {
                    Phase::HistoryError
                } else if self.history_loaded {
                    Phase::HistoryLoaded
                } else {
                    Phase::HistoryIdle
                }
            }
        }
    }

    /// Starts a request, superseding any that is still pending.
    pub(crate) fn begin_request(&mut self, kind: RequestKind) -> RequestToken {
        self.next_token += 1;
        let token = RequestToken(self.next_token);
        self.pending = Some(PendingRequest { token, kind });
        self.error_message = None;
        token
    }

    /// Clears the pending slot if `token` is the request it holds.
    pub(crate) fn settle(&mut self, token: RequestToken, kind: RequestKind) -> bool {
        match self.pending {
            Some(pending) if pending.token == token && pending.kind == kind => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn mark_history_loaded(&mut self, records: Vec<HistoryRecord>) {
        self.history_records = records;
        self.history_loaded = true;
    }

    pub(crate) fn mark_history_failed(&mut self, message: String) {
        self.history_records.clear();
        self.history_loaded = false;
        self.error_message = Some(message);
    }

    pub(crate) fn switch_view(&mut self, view: View) {
        self.active_view = view;
        self.symptoms_text.clear();
        self.error_message = None;
        self.analysis_result = None;
        self.pending = None;
    }
}
