use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(RecordId);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotentialCondition {
    pub name: String,
    pub likelihood: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedNextSteps {
    #[serde(alias = "urgencyLevel")]
    pub urgency_level: String,
    pub steps: Vec<String>,
}

/// Structured triage output produced by the analysis service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(alias = "potentialConditions")]
    pub potential_conditions: Vec<PotentialCondition>,
    #[serde(alias = "recommendedNextSteps")]
    pub recommended_next_steps: RecommendedNextSteps,
    #[serde(alias = "safetyDisclaimer")]
    pub safety_disclaimer: String,
}

impl AnalysisResult {
    pub fn condition_names(&self) -> Vec<&str> {
        self.potential_conditions
            .iter()
            .map(|condition| condition.name.as_str())
            .collect()
    }

    pub fn urgency_level(&self) -> &str {
        &self.recommended_next_steps.urgency_level
    }
}

/// A past query, with its embedded analysis already decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRecord {
    pub id: RecordId,
    pub symptoms: String,
    pub created_at: DateTime<Utc>,
    pub response: AnalysisResult,
}
