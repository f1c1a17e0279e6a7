use super::*;
use crate::controller::{events::SessionEvent, reducer::reduce, state::RequestToken};
use crate::test_support::{analysis, history_record};
use chrono::FixedOffset;
use client_core::ClientError;

fn render_utc(state: &SessionState) -> String {
    PageRenderer::new()
        .expect("template")
        .render_in(state, &Utc)
        .expect("render")
}

fn resolved_checker(urgency: &str) -> SessionState {
    let mut state = SessionState::new();
    reduce(&mut state, SessionEvent::ConsentSet(true));
    reduce(&mut state, SessionEvent::SymptomsEdited("fever, cough".into()));
    reduce(&mut state, SessionEvent::Submit);
    reduce(
        &mut state,
        SessionEvent::AnalysisResolved {
            token: RequestToken(1),
            outcome: Ok(analysis(urgency)),
        },
    );
    state
}

fn loaded_history(records: Vec<HistoryRecord>) -> SessionState {
    let mut state = SessionState::new();
    reduce(&mut state, SessionEvent::Navigate(View::History));
    reduce(
        &mut state,
        SessionEvent::HistoryResolved {
            token: RequestToken(1),
            outcome: Ok(records),
        },
    );
    state
}

#[test]
fn urgency_slug_lowercases_and_hyphenates() {
    assert_eq!(urgency_slug("High Urgency"), "high-urgency");
    assert_eq!(urgency_slug("LOW"), "low");
    assert_eq!(urgency_slug("  mixed   case "), "mixed-case");
    assert_eq!(
        urgency_slug("Seek Immediate\tMedical Attention"),
        "seek-immediate-medical-attention"
    );
    assert_eq!(urgency_slug("Self-Care"), "self-care");
}

#[test]
fn result_page_shows_conditions_and_urgency_class() {
    let page = render_utc(&resolved_checker("Moderate"));

    assert!(page.contains(r#"data-phase="checker-result""#));
    assert_eq!(page.matches(r#"<li class="condition">"#).count(), 1);
    assert!(page.contains("<strong>Flu (High)</strong>: Viral infection of the airways."));
    assert!(page.contains(r#"class="card urgency-moderate""#));
    assert!(page.contains("Urgency: Moderate"));
    assert_eq!(page.matches(r#"<li class="step">"#).count(), 2);
    assert!(page.contains("This is not a medical diagnosis."));
}

#[test]
fn multi_word_urgency_uses_slug_class() {
    let page = render_utc(&resolved_checker("Consult a Doctor"));
    assert!(page.contains(r#"class="card urgency-consult-a-doctor""#));
}

#[test]
fn form_is_disabled_until_consent_is_given() {
    let page = render_utc(&SessionState::new());
    assert!(page.contains(r#"data-phase="checker-idle""#));
    assert!(page.contains("disabled>Check Symptoms</button>"));
    assert!(!page.contains(" checked>"));

    let mut state = SessionState::new();
    reduce(&mut state, SessionEvent::ConsentSet(true));
    let page = render_utc(&state);
    assert!(page.contains(" checked>"));
    assert!(page.contains("<button type=\"submit\">Check Symptoms</button>"));
}

#[test]
fn loading_page_shows_loader_and_refreshes() {
    let mut state = SessionState::new();
    reduce(&mut state, SessionEvent::ConsentSet(true));
    reduce(&mut state, SessionEvent::SymptomsEdited("fever".into()));
    reduce(&mut state, SessionEvent::Submit);

    let page = render_utc(&state);

    assert!(page.contains(r#"data-phase="checker-loading""#));
    assert!(page.contains(r#"<div class="loader"></div>"#));
    assert!(page.contains("Analyzing..."));
    assert!(page.contains(r#"http-equiv="refresh""#));
}

#[test]
fn error_message_is_rendered() {
    let mut state = SessionState::new();
    reduce(&mut state, SessionEvent::Submit);

    let page = render_utc(&state);

    assert!(page.contains(r#"<p class="error">Please enter your symptoms.</p>"#));
    assert!(!page.contains(r#"http-equiv="refresh""#));
}

#[test]
fn user_text_is_html_escaped() {
    let mut state = SessionState::new();
    reduce(&mut state, SessionEvent::ConsentSet(true));
    reduce(
        &mut state,
        SessionEvent::SymptomsEdited("<script>alert(1)</script>".into()),
    );

    let page = render_utc(&state);

    assert!(page.contains("&lt;script&gt;alert(1)"));
    assert!(!page.contains("<script>alert(1)"));
}

#[test]
fn history_items_show_summary_and_local_time() {
    let state = loaded_history(vec![history_record(2, "fever, cough")]);
    let tz = FixedOffset::east_opt(2 * 3600).expect("offset");

    let page = PageRenderer::new()
        .expect("template")
        .render_in(&state, &tz)
        .expect("render");

    assert!(page.contains(r#"data-phase="history-loaded""#));
    assert!(page.contains(r#"data-id="2""#));
    assert!(page.contains("<strong>Symptoms:</strong> fever, cough"));
    assert!(page.contains("<strong>Conditions Suggested:</strong> Flu"));
    assert!(page.contains("<strong>Urgency:</strong> Consult a Doctor"));
    assert!(page.contains("Checked on: 2024-05-01 12:20:30"));
    assert!(!page.contains("No history found."));
}

#[test]
fn empty_history_says_so() {
    let page = render_utc(&loaded_history(Vec::new()));
    assert!(page.contains("No history found."));
}

#[test]
fn failed_history_shows_only_the_error() {
    let mut state = SessionState::new();
    reduce(&mut state, SessionEvent::Navigate(View::History));
    reduce(
        &mut state,
        SessionEvent::HistoryResolved {
            token: RequestToken(1),
            outcome: Err(ClientError::Remote("Failed to fetch history.".into())),
        },
    );

    let page = render_utc(&state);

    assert!(page.contains(r#"data-phase="history-error""#));
    assert!(page.contains(r#"<p class="error">Failed to fetch history.</p>"#));
    assert!(!page.contains("No history found."));
    assert!(!page.contains("history-item"));
}

#[test]
fn active_nav_entry_follows_view() {
    let page = render_utc(&SessionState::new());
    assert!(page.contains(r#"<a href="/view/checker" class="active">"#));

    let page = render_utc(&loaded_history(Vec::new()));
    assert!(page.contains(r#"<a href="/view/history" class="active">"#));
}

#[test]
fn checked_on_formats_in_given_zone() {
    let record = history_record(1, "fever");
    assert_eq!(format_checked_on(&record.created_at, &Utc), "2024-05-01 10:20:30");
}
