//! Answer orchestration: picks the offline responder or the upstream model
//! chain and normalizes what comes back.

pub mod prompts;

use anyhow::Result;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, info};

use crate::config::AnswerMode;
use crate::intents::fallback;
use crate::llm::{ChainClient, ChainError};
use crate::source::SourceFetcher;

/// Incoming question. Fields that are missing or not strings read as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskRequest {
    #[serde(default, deserialize_with = "string_or_none")]
    pub context: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub question: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub source_url: Option<String>,
}

fn string_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

/// Which path produced an answer. Serializes as `"fallback"` or the model id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelUsed {
    Fallback,
    Upstream(String),
}

impl ModelUsed {
    pub fn as_str(&self) -> &str {
        match self {
            ModelUsed::Fallback => "fallback",
            ModelUsed::Upstream(model) => model,
        }
    }
}

impl Serialize for ModelUsed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerResult {
    pub answer: String,
    #[serde(rename = "model")]
    pub model_used: ModelUsed,
}

enum Backend {
    Offline,
    Upstream {
        client: ChainClient,
        models: Vec<String>,
    },
}

pub struct Orchestrator {
    fetcher: SourceFetcher,
    backend: Backend,
}

impl Orchestrator {
    pub fn new(mode: &AnswerMode) -> Result<Self> {
        let backend = match mode {
            AnswerMode::Offline => Backend::Offline,
            AnswerMode::Upstream(cfg) => Backend::Upstream {
                client: ChainClient::new(&cfg.base_url, &cfg.api_key)?,
                models: cfg.model_chain(),
            },
        };

        Ok(Self {
            fetcher: SourceFetcher::new()?,
            backend,
        })
    }

    /// Produce exactly one answer for `req`. Only the upstream path can fail,
    /// and only once every model in the chain has.
    pub async fn answer(&self, req: &AskRequest) -> Result<AnswerResult, ChainError> {
        let question = req.question.as_deref().unwrap_or("");
        let context = req.context.as_deref().unwrap_or("");
        let fetched = self.fetch_source(req.source_url.as_deref()).await;

        match &self.backend {
            Backend::Offline => {
                debug!(question_len = question.len(), fetched_len = fetched.len(), "Answering offline");
                Ok(AnswerResult {
                    answer: fallback::respond(question),
                    model_used: ModelUsed::Fallback,
                })
            }
            Backend::Upstream { client, models } => {
                info!(
                    question_len = question.len(),
                    fetched_len = fetched.len(),
                    chain_len = models.len(),
                    "Answering via upstream chain"
                );
                let messages = prompts::build_messages(context, &fetched, question);
                let completion = client.complete(&messages, models).await?;
                Ok(AnswerResult {
                    answer: completion.answer,
                    model_used: ModelUsed::Upstream(completion.model),
                })
            }
        }
    }

    async fn fetch_source(&self, url: Option<&str>) -> String {
        match url.map(str::trim).filter(|u| !u.is_empty()) {
            Some(url) => self.fetcher.fetch(url).await,
            None => String::new(),
        }
    }
}
