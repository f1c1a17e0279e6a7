use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{AnalysisResult, HistoryRecord, RecordId},
    error::DecodeError,
};

/// Timestamp layouts accepted in addition to RFC 3339. The service stores
/// rows with SQLite's `CURRENT_TIMESTAMP`, which is UTC without an offset.
const NAIVE_TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckSymptomsRequest {
    pub symptoms: String,
}

/// History row as sent by the service; `response` is a JSON-encoded
/// [`AnalysisResult`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecordWire {
    pub id: RecordId,
    pub symptoms: String,
    pub response: String,
    pub created_at: String,
}

impl HistoryRecordWire {
    pub fn decode(self) -> Result<HistoryRecord, DecodeError> {
        let response = serde_json::from_str::<AnalysisResult>(&self.response).map_err(|err| {
            DecodeError::Response {
                id: self.id.0,
                reason: err.to_string(),
            }
        })?;
        let created_at = parse_created_at(&self.created_at).ok_or_else(|| {
            DecodeError::Timestamp {
                id: self.id.0,
                raw: self.created_at.clone(),
            }
        })?;

        Ok(HistoryRecord {
            id: self.id,
            symptoms: self.symptoms,
            created_at,
            response,
        })
    }
}

/// Decodes every record, stopping at the first malformed one so callers never
/// see a partially decoded history.
pub fn decode_history(records: Vec<HistoryRecordWire>) -> Result<Vec<HistoryRecord>, DecodeError> {
    records.into_iter().map(HistoryRecordWire::decode).collect()
}

pub fn parse_created_at(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
