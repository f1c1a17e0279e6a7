use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};
use minijinja::Environment;
use serde::Serialize;
use shared::domain::{HistoryRecord, PotentialCondition};

use crate::controller::state::{SessionState, View};

const PAGE_TEMPLATE_NAME: &str = "page.html";
const PAGE_TEMPLATE: &str = include_str!("templates/page.html");
const CHECKED_ON_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// CSS-safe class suffix for an urgency level: surrounding whitespace is
/// dropped, the rest is lowercased and each whitespace run becomes `-`.
pub fn urgency_slug(level: &str) -> String {
    level
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

pub fn format_checked_on<Tz>(created_at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    created_at
        .with_timezone(tz)
        .format(CHECKED_ON_FORMAT)
        .to_string()
}

#[derive(Serialize)]
struct PageView<'a> {
    view: &'static str,
    phase: &'static str,
    consent_given: bool,
    input_enabled: bool,
    is_loading: bool,
    symptoms_text: &'a str,
    error_message: Option<&'a str>,
    result: Option<ResultView<'a>>,
    show_history: bool,
    history: Vec<HistoryItemView<'a>>,
}

#[derive(Serialize)]
struct ResultView<'a> {
    conditions: &'a [PotentialCondition],
    urgency_level: &'a str,
    urgency_slug: String,
    steps: &'a [String],
    safety_disclaimer: &'a str,
}

#[derive(Serialize)]
struct HistoryItemView<'a> {
    id: i64,
    symptoms: &'a str,
    condition_names: String,
    urgency_level: &'a str,
    checked_on: String,
}

impl<'a> HistoryItemView<'a> {
    fn new<Tz>(record: &'a HistoryRecord, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            id: record.id.0,
            symptoms: &record.symptoms,
            condition_names: record.response.condition_names().join(", "),
            urgency_level: record.response.urgency_level(),
            checked_on: format_checked_on(&record.created_at, tz),
        }
    }
}

impl<'a> PageView<'a> {
    fn from_state<Tz>(state: &'a SessionState, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let result = state.analysis_result.as_ref().map(|result| ResultView {
            conditions: &result.potential_conditions,
            urgency_level: result.urgency_level(),
            urgency_slug: urgency_slug(result.urgency_level()),
            steps: &result.recommended_next_steps.steps,
            safety_disclaimer: &result.safety_disclaimer,
        });
        let show_history = state.active_view == View::History
            && !state.is_loading()
            && state.error_message.is_none();
        let history = if show_history {
            state
                .history_records
                .iter()
                .map(|record| HistoryItemView::new(record, tz))
                .collect()
        } else {
            Vec::new()
        };

        Self {
            view: state.active_view.slug(),
            phase: state.phase().label(),
            consent_given: state.consent_given,
            input_enabled: state.input_enabled(),
            is_loading: state.is_loading(),
            symptoms_text: &state.symptoms_text,
            error_message: state.error_message.as_deref(),
            result,
            show_history,
            history,
        }
    }
}

pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Renders using the local time zone of the machine serving the page.
    pub fn render(&self, state: &SessionState) -> Result<String, minijinja::Error> {
        self.render_in(state, &Local)
    }

    pub fn render_in<Tz>(&self, state: &SessionState, tz: &Tz) -> Result<String, minijinja::Error>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let page = PageView::from_state(state, tz);
        self.env.get_template(PAGE_TEMPLATE_NAME)?.render(&page)
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
