use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Error body returned by the analysis service on failure, `{"detail": ...}`.
///
/// Request validation failures carry a list of problems instead of a string,
/// so `detail` is kept as raw JSON and only a non-empty string is surfaced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorDetail {
    pub fn message(&self) -> Option<&str> {
        self.detail
            .as_ref()
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|message| !message.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("history record {id} has a malformed analysis payload: {reason}")]
    Response { id: i64, reason: String },
    #[error("history record {id} has an unrecognised timestamp '{raw}'")]
    Timestamp { id: i64, raw: String },
}

impl DecodeError {
    pub fn record_id(&self) -> i64 {
        match self {
            Self::Response { id, .. } | Self::Timestamp { id, .. } => *id,
        }
    }
}
