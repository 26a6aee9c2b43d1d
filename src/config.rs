use std::time::Duration;

use anyhow::{Context, Result};
use tracing::warn;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_SECONDARY_MODELS: &[&str] = &["gpt-4o", "gpt-4o-mini-2024-07-18"];
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Wall-clock budget for a whole request at the HTTP boundary.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection details for the OpenAI-compatible completion provider.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub api_key: String,
    pub base_url: String,
    pub preferred_model: String,
    pub secondary_models: Vec<String>,
}

impl UpstreamConfig {
    /// The ordered model chain: preferred first, then the secondaries.
    pub fn model_chain(&self) -> Vec<String> {
        std::iter::once(self.preferred_model.clone())
            .chain(self.secondary_models.iter().cloned())
            .collect()
    }
}

/// How the service answers questions.
#[derive(Debug, Clone)]
pub enum AnswerMode {
    /// Rule-based responder only; no upstream traffic.
    Offline,
    Upstream(UpstreamConfig),
}

impl AnswerMode {
    /// Pick the effective mode. Upstream is only honoured when a credential
    /// is present; anything else degrades to offline.
    pub fn resolve(requested: &str, upstream: Option<UpstreamConfig>) -> Self {
        match (requested.trim().to_lowercase().as_str(), upstream) {
            ("upstream", Some(cfg)) => AnswerMode::Upstream(cfg),
            ("upstream", None) => {
                warn!("ANSWER_MODE=upstream but OPENAI_API_KEY is not set, staying offline");
                AnswerMode::Offline
            }
            ("offline", _) | ("", _) => AnswerMode::Offline,
            (other, _) => {
                warn!(mode = other, "Unknown ANSWER_MODE, staying offline");
                AnswerMode::Offline
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub cors_allowlist: Vec<String>,
    pub mode: AnswerMode,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let _ = dotenv::dotenv();

        let port = dotenv::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .context("PORT must be a valid number")?;

        let cors_allowlist = split_list(
            &dotenv::var("CORS_ALLOWLIST").unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string()),
        );

        let upstream = dotenv::var("OPENAI_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .map(|api_key| UpstreamConfig {
                api_key,
                base_url: dotenv::var("OPENAI_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
                preferred_model: dotenv::var("OPENAI_MODEL")
                    .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
                secondary_models: dotenv::var("OPENAI_FALLBACK_MODELS")
                    .map(|s| split_list(&s))
                    .unwrap_or_else(|_| {
                        DEFAULT_SECONDARY_MODELS.iter().map(|m| m.to_string()).collect()
                    }),
            });

        // Offline unless explicitly asked otherwise.
        let requested = dotenv::var("ANSWER_MODE").unwrap_or_else(|_| "offline".to_string());
        let mode = AnswerMode::resolve(&requested, upstream);

        Ok(Self {
            port,
            cors_allowlist,
            mode,
        })
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
