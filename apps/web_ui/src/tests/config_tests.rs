use super::{parse_api_base_url, resolve_settings};

use std::collections::HashMap;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_point_at_local_service() {
    let settings = resolve_settings(None, env_from(&[])).expect("settings");
    assert_eq!(settings.bind_addr, "127.0.0.1:5173");
    assert_eq!(settings.api_base_url.as_str(), "http://localhost:8000/");
}

#[test]
fn file_values_override_defaults() {
    let raw = r#"
bind_addr = "0.0.0.0:9000"
api_base_url = "https://triage.example.org/api"
"#;
    let settings = resolve_settings(Some(raw), env_from(&[])).expect("settings");
    assert_eq!(settings.bind_addr, "0.0.0.0:9000");
    assert_eq!(settings.api_base_url.host_str(), Some("triage.example.org"));
    assert_eq!(settings.api_base_url.path(), "/api");
}

#[test]
fn environment_overrides_file() {
    let raw = r#"api_base_url = "http://file.example:8000""#;
    let settings = resolve_settings(
        Some(raw),
        env_from(&[
            ("WEB_UI_BIND", "127.0.0.1:7000"),
            ("APP__API_BASE_URL", "http://env.example:8001"),
        ]),
    )
    .expect("settings");
    assert_eq!(settings.bind_addr, "127.0.0.1:7000");
    assert_eq!(settings.api_base_url.host_str(), Some("env.example"));
    assert_eq!(settings.api_base_url.port(), Some(8001));
}

#[test]
fn prefixed_variables_win_over_short_names() {
    let settings = resolve_settings(
        None,
        env_from(&[
            ("WEB_UI_BIND", "127.0.0.1:7000"),
            ("APP__BIND_ADDR", "127.0.0.1:7001"),
        ]),
    )
    .expect("settings");
    assert_eq!(settings.bind_addr, "127.0.0.1:7001");
}

#[test]
fn malformed_file_is_an_error() {
    let err = resolve_settings(Some("bind_addr = ["), env_from(&[])).expect_err("bad toml");
    assert!(err.to_string().contains("web_ui.toml"));
}

#[test]
fn base_url_must_be_http() {
    assert!(parse_api_base_url("ftp://files.example").is_err());
    assert!(parse_api_base_url("not a url").is_err());
    assert!(parse_api_base_url(" https://triage.example ").is_ok());
}
