use async_trait::async_trait;
use reqwest::{Client, Response};
use shared::{
    domain::{AnalysisResult, HistoryRecord},
    error::ErrorDetail,
    protocol::{decode_history, CheckSymptomsRequest, HistoryRecordWire},
};
use tracing::{debug, info, warn};
use url::Url;

pub mod error;
pub use error::{ClientError, ClientErrorKind};
use error::UNEXPECTED_RESPONSE_MESSAGE;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

pub const EMPTY_SYMPTOMS_MESSAGE: &str = "Please enter your symptoms.";
pub const CONSENT_REQUIRED_MESSAGE: &str =
    "Please confirm you understand the disclaimer before checking symptoms.";
const ANALYSIS_FAILED_MESSAGE: &str = "An error occurred while fetching the results.";
const HISTORY_FAILED_MESSAGE: &str = "Failed to fetch history.";
const UNREACHABLE_MESSAGE: &str =
    "Could not reach the analysis service. Check your connection and try again.";

const CHECK_SYMPTOMS_PATH: &str = "check_symptoms";
const HISTORY_PATH: &str = "history";

/// Client-side guard run before any request is issued. Empty text is
/// reported ahead of missing consent.
pub fn validate_submission(symptoms: &str, consent_given: bool) -> Result<(), ClientError> {
    if symptoms.trim().is_empty() {
        return Err(ClientError::Validation(EMPTY_SYMPTOMS_MESSAGE.to_string()));
    }
    if !consent_given {
        return Err(ClientError::Validation(CONSENT_REQUIRED_MESSAGE.to_string()));
    }
    Ok(())
}

/// The two calls the analysis service offers.
#[async_trait]
pub trait TriageApi: Send + Sync {
    async fn check_symptoms(&self, symptoms: &str) -> Result<AnalysisResult, ClientError>;
    async fn fetch_history(&self) -> Result<Vec<HistoryRecord>, ClientError>;
}

/// Validates, then issues exactly one analysis request.
pub async fn submit<A>(
    api: &A,
    symptoms: &str,
    consent_given: bool,
) -> Result<AnalysisResult, ClientError>
where
    A: TriageApi + ?Sized,
{
    validate_submission(symptoms, consent_given)?;
    api.check_symptoms(symptoms).await
}

pub struct TriageClient {
    http: Client,
    base_url: Url,
}

impl TriageClient {
    pub fn new(mut base_url: Url) -> Self {
        // Url::join replaces the last path segment unless it ends with '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::Network(format!("invalid service endpoint '{path}': {err}")))
    }

    async fn read_body(response: Response) -> Result<Vec<u8>, ClientError> {
        response.bytes().await.map(|body| body.to_vec()).map_err(|err| {
            warn!(error = %err, "failed to read analysis service response body");
            ClientError::Network(UNREACHABLE_MESSAGE.to_string())
        })
    }
}

#[async_trait]
impl TriageApi for TriageClient {
    async fn check_symptoms(&self, symptoms: &str) -> Result<AnalysisResult, ClientError> {
        let url = self.endpoint(CHECK_SYMPTOMS_PATH)?;
        debug!(%url, "submitting symptoms for analysis");
        let response = self
            .http
            .post(url)
            .json(&CheckSymptomsRequest {
                symptoms: symptoms.to_string(),
            })
            .send()
            .await
            .map_err(|err| {
                warn!(error = %err, "analysis request failed to complete");
                ClientError::Network(UNREACHABLE_MESSAGE.to_string())
            })?;

        let status = response.status();
        let body = Self::read_body(response).await?;
        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorDetail>(&body)
                .ok()
                .and_then(|detail| detail.message().map(str::to_string))
                .unwrap_or_else(|| ANALYSIS_FAILED_MESSAGE.to_string());
            warn!(%status, %message, "analysis service rejected submission");
            return Err(ClientError::Remote(message));
        }

        let result = serde_json::from_slice::<AnalysisResult>(&body).map_err(|err| {
            warn!(error = %err, "analysis response did not match the expected shape");
            ClientError::Decode(UNEXPECTED_RESPONSE_MESSAGE.to_string())
        })?;
        info!(
            conditions = result.potential_conditions.len(),
            urgency = %result.urgency_level(),
            "analysis received"
        );
        Ok(result)
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryRecord>, ClientError> {
        let url = self.endpoint(HISTORY_PATH)?;
        debug!(%url, "fetching history");
        let response = self.http.get(url).send().await.map_err(|err| {
            warn!(error = %err, "history request failed to complete");
            ClientError::Network(UNREACHABLE_MESSAGE.to_string())
        })?;

        let status = response.status();
        let body = Self::read_body(response).await?;
        if !status.is_success() {
            warn!(%status, "analysis service rejected history request");
            return Err(ClientError::Remote(HISTORY_FAILED_MESSAGE.to_string()));
        }

        let records = serde_json::from_slice::<Vec<HistoryRecordWire>>(&body).map_err(|err| {
            warn!(error = %err, "history response did not match the expected shape");
            ClientError::Decode(UNEXPECTED_RESPONSE_MESSAGE.to_string())
        })?;
        let history = decode_history(records).map_err(|err| {
            warn!(error = %err, "history record could not be decoded");
            ClientError::from(err)
        })?;
        info!(records = history.len(), "history received");
        Ok(history)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
