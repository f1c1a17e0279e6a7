use std::fs;

use anyhow::{bail, Context};
use client_core::DEFAULT_API_BASE_URL;
use serde::Deserialize;
use url::Url;

const SETTINGS_FILE: &str = "web_ui.toml";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5173";

#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_addr: String,
    pub api_base_url: Url,
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    bind_addr: Option<String>,
    api_base_url: Option<String>,
}

pub fn load_settings() -> anyhow::Result<Settings> {
    let file_raw = fs::read_to_string(SETTINGS_FILE).ok();
    resolve_settings(file_raw.as_deref(), |key| std::env::var(key).ok())
}

/// Defaults, then `web_ui.toml`, then environment; later sources win.
fn resolve_settings(
    file_raw: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let file_cfg = match file_raw {
        Some(raw) => toml::from_str::<FileSettings>(raw)
            .with_context(|| format!("failed to parse {SETTINGS_FILE}"))?,
        None => FileSettings::default(),
    };

    let mut bind_addr = file_cfg
        .bind_addr
        .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
    let mut api_base_url = file_cfg
        .api_base_url
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

    for key in ["WEB_UI_BIND", "APP__BIND_ADDR"] {
        if let Some(v) = env(key) {
            bind_addr = v;
        }
    }
    for key in ["TRIAGE_API_URL", "APP__API_BASE_URL"] {
        if let Some(v) = env(key) {
            api_base_url = v;
        }
    }

    Ok(Settings {
        bind_addr: bind_addr.trim().to_string(),
        api_base_url: parse_api_base_url(&api_base_url)?,
    })
}

pub fn parse_api_base_url(raw: &str) -> anyhow::Result<Url> {
    let url = Url::parse(raw.trim())
        .with_context(|| format!("invalid analysis service url '{raw}'"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!(
            "analysis service url must use http or https, got '{}'",
            url.scheme()
        );
    }
    Ok(url)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
