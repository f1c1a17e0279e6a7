use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use client_core::{ClientError, TriageApi};
use shared::domain::{
    AnalysisResult, HistoryRecord, PotentialCondition, RecommendedNextSteps, RecordId,
};

pub fn analysis(urgency_level: &str) -> AnalysisResult {
    AnalysisResult {
        potential_conditions: vec![PotentialCondition {
            name: "Flu".into(),
            likelihood: "High".into(),
            description: "Viral infection of the airways.".into(),
        }],
        recommended_next_steps: RecommendedNextSteps {
            urgency_level: urgency_level.into(),
            steps: vec!["Rest".into(), "Hydrate".into()],
        },
        safety_disclaimer: "This is not a medical diagnosis.".into(),
    }
}

pub fn history_record(id: i64, symptoms: &str) -> HistoryRecord {
    HistoryRecord {
        id: RecordId(id),
        symptoms: symptoms.into(),
        created_at: Utc
            .with_ymd_and_hms(2024, 5, 1, 10, 20, 30)
            .single()
            .expect("valid timestamp"),
        response: analysis("Consult a Doctor"),
    }
}

pub struct FakeApi {
    analysis: Result<AnalysisResult, ClientError>,
    history: Result<Vec<HistoryRecord>, ClientError>,
    check_calls: AtomicUsize,
    history_calls: AtomicUsize,
}

impl FakeApi {
    pub fn new(
        analysis: Result<AnalysisResult, ClientError>,
        history: Result<Vec<HistoryRecord>, ClientError>,
    ) -> Self {
        Self {
            analysis,
            history,
            check_calls: AtomicUsize::new(0),
            history_calls: AtomicUsize::new(0),
        }
    }

    pub fn check_calls(&self) -> usize {
        self.check_calls.load(Ordering::SeqCst)
    }

    pub fn history_calls(&self) -> usize {
        self.history_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TriageApi for FakeApi {
    async fn check_symptoms(&self, _symptoms: &str) -> Result<AnalysisResult, ClientError> {
        self.check_calls.fetch_add(1, Ordering::SeqCst);
        self.analysis.clone()
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryRecord>, ClientError> {
        self.history_calls.fetch_add(1, Ordering::SeqCst);
        self.history.clone()
    }
}
