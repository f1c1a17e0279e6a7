//! HTTP surface of the UI: every request either renders the session or
//! applies events to it and redirects back to the page.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use tokio::sync::mpsc::Sender;
use tracing::error;

use crate::backend_bridge::{commands::BackendCommand, runtime::SharedSession};
use crate::controller::{events::SessionEvent, orchestration::handle_event, state::View};
use crate::ui::PageRenderer;

#[derive(Clone)]
pub struct AppState {
    pub session: SharedSession,
    pub cmd_tx: Sender<BackendCommand>,
    pub renderer: Arc<PageRenderer>,
}

#[derive(Debug, Deserialize)]
struct ConsentForm {
    consent: Option<String>,
    /// Absent when the textarea is disabled, so the stored draft stays put.
    symptoms: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SymptomsForm {
    consent: Option<String>,
    #[serde(default)]
    symptoms: String,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .route("/consent", post(set_consent))
        .route("/symptoms", post(submit_symptoms))
        .route("/view/checker", get(show_checker))
        .route("/view/history", get(show_history))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn index(State(state): State<AppState>) -> Response {
    let session = state.session.lock().await;
    match state.renderer.render(&session) {
        Ok(page) => Html(page).into_response(),
        Err(err) => {
            error!(error = %err, "failed to render page");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to render page").into_response()
        }
    }
}

async fn apply(state: &AppState, events: impl IntoIterator<Item = SessionEvent>) -> Redirect {
    let mut session = state.session.lock().await;
    for event in events {
        handle_event(&mut session, &state.cmd_tx, event);
    }
    Redirect::to("/")
}

async fn set_consent(State(state): State<AppState>, Form(form): Form<ConsentForm>) -> Redirect {
    let draft = form.symptoms.map(SessionEvent::SymptomsEdited);
    let consent = SessionEvent::ConsentSet(form.consent.is_some());
    apply(&state, draft.into_iter().chain([consent])).await
}

async fn submit_symptoms(
    State(state): State<AppState>,
    Form(form): Form<SymptomsForm>,
) -> Redirect {
    apply(
        &state,
        [
            SessionEvent::ConsentSet(form.consent.is_some()),
            SessionEvent::SymptomsEdited(form.symptoms),
            SessionEvent::Submit,
        ],
    )
    .await
}

async fn show_checker(State(state): State<AppState>) -> Redirect {
    apply(&state, [SessionEvent::Navigate(View::Checker)]).await
}

async fn show_history(State(state): State<AppState>) -> Redirect {
    apply(&state, [SessionEvent::Navigate(View::History)]).await
}

#[cfg(test)]
#[path = "tests/routes_tests.rs"]
mod tests;
