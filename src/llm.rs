use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

/// Answer text used when a successful upstream body has no usable content.
pub const NO_ANSWER: &str = "No answer";

const TEMPERATURE: f32 = 0.2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// A successful completion and the model that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub answer: String,
    pub model: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    /// Every model in the chain failed at the HTTP level.
    #[error("all {attempts} upstream model(s) failed, last status {status:?}")]
    Exhausted {
        attempts: usize,
        /// Status of the last failed attempt; `None` if it never got a response.
        status: Option<u16>,
        detail: String,
    },
}

/// Result of a single model attempt.
enum Attempt {
    Answered(String),
    Failed { status: Option<u16>, body: String },
}

/// Client for an OpenAI-compatible chat completions endpoint that walks an
/// ordered list of models until one succeeds.
pub struct ChainClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ChainClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    /// Resolve the chat completions endpoint from the base URL.
    fn endpoint(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if base.ends_with("/chat/completions") {
            base.to_string()
        } else {
            format!("{}/chat/completions", base)
        }
    }

    /// Try each model in order, one at a time, and return the first success.
    pub async fn complete(
        &self,
        messages: &[Message],
        models: &[String],
    ) -> Result<Completion, ChainError> {
        let mut last_failure: Option<(Option<u16>, String)> = None;

        for model in models {
            match self.attempt(model, messages).await {
                Attempt::Answered(answer) => {
                    info!(model = model.as_str(), answer_len = answer.len(), "Upstream model answered");
                    return Ok(Completion {
                        answer,
                        model: model.clone(),
                    });
                }
                Attempt::Failed { status, body } => {
                    warn!(
                        model = model.as_str(),
                        status = ?status,
                        body_len = body.len(),
                        "Upstream model failed, trying next"
                    );
                    last_failure = Some((status, body));
                }
            }
        }

        let (status, body) = last_failure.unwrap_or((None, String::new()));
        let detail = if body.is_empty() {
            "unknown error".to_string()
        } else {
            body
        };
        error!(attempts = models.len(), status = ?status, "All upstream models failed");
        Err(ChainError::Exhausted {
            attempts: models.len(),
            status,
            detail,
        })
    }

    async fn attempt(&self, model: &str, messages: &[Message]) -> Attempt {
        let body = serde_json::json!({
            "model": model,
            "messages": messages,
            "temperature": TEMPERATURE,
        });

        let resp = match self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                return Attempt::Failed {
                    status: None,
                    body: format!("LLM request failed: {}", e),
                }
            }
        };

        let status = resp.status();
        let raw = resp.text().await.unwrap_or_default();

        if !status.is_success() {
            return Attempt::Failed {
                status: Some(status.as_u16()),
                body: raw,
            };
        }

        Attempt::Answered(extract_answer(&raw))
    }
}

/// Pull `choices[0].message.content` out of a completion body.
/// Unparseable or empty content degrades to [`NO_ANSWER`].
pub fn extract_answer(raw: &str) -> String {
    serde_json::from_str::<serde_json::Value>(raw)
        .ok()
        .and_then(|json| {
            json["choices"]
                .get(0)
                .and_then(|c| c["message"]["content"].as_str())
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
        })
        .unwrap_or_else(|| NO_ANSWER.to_string())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::testutil;
    use axum::extract::State;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// Scripted completion provider: fixed (status, body) per model, and a
    /// log of every request it receives.
    #[derive(Default)]
    pub(crate) struct MockUpstream {
        pub responses: HashMap<String, (u16, String)>,
        pub seen_models: Mutex<Vec<String>>,
        pub seen_requests: Mutex<Vec<(Option<String>, serde_json::Value)>>,
    }

    impl MockUpstream {
        pub fn with(responses: &[(&str, u16, &str)]) -> Arc<Self> {
            Arc::new(Self {
                responses: responses
                    .iter()
                    .map(|(m, s, b)| (m.to_string(), (*s, b.to_string())))
                    .collect(),
                ..Default::default()
            })
        }

        pub fn seen_models(&self) -> Vec<String> {
            self.seen_models.lock().unwrap().clone()
        }
    }

    async fn handle(
        State(mock): State<Arc<MockUpstream>>,
        headers: HeaderMap,
        Json(body): Json<serde_json::Value>,
    ) -> (StatusCode, String) {
        let model = body["model"].as_str().unwrap_or_default().to_string();
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        mock.seen_models.lock().unwrap().push(model.clone());
        mock.seen_requests.lock().unwrap().push((auth, body));
        let (status, body) = mock
            .responses
            .get(&model)
            .cloned()
            .unwrap_or((404, "unknown model".to_string()));
        (StatusCode::from_u16(status).unwrap(), body)
    }

    /// Serve `mock` and return an OpenAI-style base URL ending in `/v1`.
    pub async fn serve_mock(mock: Arc<MockUpstream>) -> String {
        let router = Router::new()
            .route("/v1/chat/completions", post(handle))
            .with_state(mock);
        format!("{}/v1", testutil::serve(router).await)
    }

    pub fn completion_body(content: &str) -> String {
        serde_json::json!({
            "choices": [{ "message": { "role": "assistant", "content": content } }]
        })
        .to_string()
    }

    fn chain(models: &[&str]) -> Vec<String> {
        models.iter().map(|m| m.to_string()).collect()
    }

    fn prompt() -> Vec<Message> {
        vec![Message::system("be brief"), Message::user("Question: hi")]
    }

    #[test]
    fn test_endpoint_resolution() {
        let c = ChainClient::new("https://api.openai.com/v1/", "k").unwrap();
        assert_eq!(c.endpoint(), "https://api.openai.com/v1/chat/completions");
        let c = ChainClient::new("http://localhost:1234", "k").unwrap();
        assert_eq!(c.endpoint(), "http://localhost:1234/chat/completions");
        let c = ChainClient::new("https://generativelanguage.googleapis.com/v1beta/openai", "k")
            .unwrap();
        assert_eq!(
            c.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/openai/chat/completions"
        );
        let c = ChainClient::new("https://proxy.test/v1/chat/completions", "k").unwrap();
        assert_eq!(c.endpoint(), "https://proxy.test/v1/chat/completions");
    }

    #[test]
    fn test_extract_answer() {
        assert_eq!(extract_answer(&completion_body("42")), "42");
        assert_eq!(extract_answer("not json"), NO_ANSWER);
        assert_eq!(extract_answer(r#"{"choices":[]}"#), NO_ANSWER);
        assert_eq!(extract_answer(r#"{"choices":[{"message":{"content":null}}]}"#), NO_ANSWER);
        assert_eq!(extract_answer(&completion_body("")), NO_ANSWER);
    }

    #[tokio::test]
    async fn test_third_model_answers_after_two_failures() {
        let ok = completion_body("Kepler found thousands.");
        let mock = MockUpstream::with(&[
            ("m1", 500, "boom"),
            ("m2", 429, "rate limited"),
            ("m3", 200, ok.as_str()),
            ("m4", 200, ok.as_str()),
        ]);
        let base = serve_mock(mock.clone()).await;
        let client = ChainClient::new(base, "sk-test").unwrap();

        let completion = client
            .complete(&prompt(), &chain(&["m1", "m2", "m3", "m4"]))
            .await
            .unwrap();

        assert_eq!(completion.model, "m3");
        assert_eq!(completion.answer, "Kepler found thousands.");
        assert_eq!(mock.seen_models(), vec!["m1", "m2", "m3"]);
    }

    #[tokio::test]
    async fn test_exhaustion_reports_last_status_and_body() {
        let mock = MockUpstream::with(&[
            ("m1", 500, "first"),
            ("m2", 503, "second"),
            ("m3", 500, "third"),
        ]);
        let base = serve_mock(mock.clone()).await;
        let client = ChainClient::new(base, "sk-test").unwrap();

        let err = client
            .complete(&prompt(), &chain(&["m1", "m2", "m3"]))
            .await
            .unwrap_err();

        let ChainError::Exhausted {
            attempts,
            status,
            detail,
        } = err;
        assert_eq!(attempts, 3);
        assert_eq!(status, Some(500));
        assert_eq!(detail, "third");
        assert_eq!(mock.seen_models(), vec!["m1", "m2", "m3"]);
    }

    #[tokio::test]
    async fn test_malformed_body_is_still_success() {
        let mock = MockUpstream::with(&[("m1", 200, "<html>oops</html>"), ("m2", 200, "{}")]);
        let base = serve_mock(mock.clone()).await;
        let client = ChainClient::new(base, "sk-test").unwrap();

        let completion = client.complete(&prompt(), &chain(&["m1", "m2"])).await.unwrap();

        assert_eq!(completion.model, "m1");
        assert_eq!(completion.answer, NO_ANSWER);
        assert_eq!(mock.seen_models(), vec!["m1"]);
    }

    #[tokio::test]
    async fn test_request_shape() {
        let ok = completion_body("fine");
        let mock = MockUpstream::with(&[("m1", 200, ok.as_str())]);
        let base = serve_mock(mock.clone()).await;
        let client = ChainClient::new(base, "sk-secret").unwrap();

        client.complete(&prompt(), &chain(&["m1"])).await.unwrap();

        let requests = mock.seen_requests.lock().unwrap();
        let (auth, body) = &requests[0];
        assert_eq!(auth.as_deref(), Some("Bearer sk-secret"));
        assert_eq!(body["model"], "m1");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "Question: hi");
        assert!((body["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_unreachable_provider_exhausts_without_status() {
        let base = testutil::dead_url().await;
        let client = ChainClient::new(base, "sk-test").unwrap();

        let err = client.complete(&prompt(), &chain(&["m1", "m2"])).await.unwrap_err();

        let ChainError::Exhausted { status, detail, .. } = err;
        assert_eq!(status, None);
        assert!(detail.starts_with("LLM request failed"));
    }

    #[tokio::test]
    async fn test_empty_chain_is_exhausted() {
        let client = ChainClient::new("http://127.0.0.1:9", "k").unwrap();
        let err = client.complete(&prompt(), &[]).await.unwrap_err();
        let ChainError::Exhausted {
            attempts, detail, ..
        } = err;
        assert_eq!(attempts, 0);
        assert_eq!(detail, "unknown error");
    }
}
