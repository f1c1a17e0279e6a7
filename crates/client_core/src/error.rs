use shared::error::DecodeError;
use thiserror::Error;

pub(crate) const UNEXPECTED_RESPONSE_MESSAGE: &str =
    "The analysis service returned a response in an unexpected format.";

/// Failure of a submission or history request. Every variant carries the
/// message shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Rejected before any network I/O.
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Network(String),
    /// The service answered with a non-success status.
    #[error("{0}")]
    Remote(String),
    /// The service answered, but not with the expected shape.
    #[error("{0}")]
    Decode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientErrorKind {
    Validation,
    Network,
    Remote,
    Decode,
}

impl ClientErrorKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Network => "network",
            Self::Remote => "remote",
            Self::Decode => "decode",
        }
    }
}

impl ClientError {
    pub fn kind(&self) -> ClientErrorKind {
        match self {
            Self::Validation(_) => ClientErrorKind::Validation,
            Self::Network(_) => ClientErrorKind::Network,
            Self::Remote(_) => ClientErrorKind::Remote,
            Self::Decode(_) => ClientErrorKind::Decode,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Validation(message)
            | Self::Network(message)
            | Self::Remote(message)
            | Self::Decode(message) => message,
        }
    }
}

/// Keeps parser detail out of the user-facing message; callers log the
/// full error before converting.
impl From<DecodeError> for ClientError {
    fn from(value: DecodeError) -> Self {
        Self::Decode(format!(
            "{UNEXPECTED_RESPONSE_MESSAGE} (history record {})",
            value.record_id()
        ))
    }
}
