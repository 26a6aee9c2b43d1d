mod answer;
mod config;
mod error;
mod intents;
mod llm;
mod routes;
mod source;
mod state;
#[cfg(test)]
mod testutil;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use answer::Orchestrator;
use config::{AnswerMode, AppConfig};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().context("Failed to load configuration")?;

    match &config.mode {
        AnswerMode::Offline => warn!("Running in offline mode, answers come from the built-in rule table"),
        AnswerMode::Upstream(cfg) => info!(
            base_url = cfg.base_url.as_str(),
            models = ?cfg.model_chain(),
            "Running in upstream mode"
        ),
    }

    let orchestrator = Orchestrator::new(&config.mode)?;
    let app = routes::router(AppState::new(orchestrator), &config.cors_allowlist);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;
    info!("Answer service listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
