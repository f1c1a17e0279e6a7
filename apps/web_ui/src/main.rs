use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use client_core::{TriageApi, TriageClient};
use tokio::sync::{mpsc, Mutex};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod backend_bridge;
mod config;
mod controller;
mod routes;
mod ui;

#[cfg(test)]
mod test_support;

use backend_bridge::runtime;
use config::load_settings;
use controller::state::SessionState;
use routes::{build_router, AppState};
use ui::PageRenderer;

const COMMAND_QUEUE_CAPACITY: usize = 16;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = load_settings().context("failed to load web_ui settings")?;
    let renderer = PageRenderer::new().context("failed to compile page template")?;

    let api: Arc<dyn TriageApi> = Arc::new(TriageClient::new(settings.api_base_url.clone()));
    let session = Arc::new(Mutex::new(SessionState::new()));
    let (cmd_tx, cmd_rx) = mpsc::channel(COMMAND_QUEUE_CAPACITY);
    let worker = runtime::launch(api, Arc::clone(&session), cmd_rx);

    let app = build_router(AppState {
        session,
        cmd_tx,
        renderer: Arc::new(renderer),
    });

    let addr: SocketAddr = settings
        .bind_addr
        .parse()
        .with_context(|| format!("invalid bind address '{}'", settings.bind_addr))?;
    info!(%addr, api = %settings.api_base_url, "symptom checker ui listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    worker.abort();
    Ok(())
}
