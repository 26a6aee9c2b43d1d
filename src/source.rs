use std::time::Duration;

use anyhow::{bail, Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

/// Upper bound on fetched text, in characters, to keep prompts small.
pub const MAX_FETCHED_CHARS: usize = 8000;

/// Upper bound on raw bytes read from a source response.
pub const MAX_SOURCE_BYTES: usize = 2 * 1024 * 1024;

lazy_static! {
    static ref SCRIPT_BLOCK: Regex = Regex::new(r"(?is)<script.*?</script>").unwrap();
    static ref STYLE_BLOCK: Regex = Regex::new(r"(?is)<style.*?</style>").unwrap();
    static ref ANY_TAG: Regex = Regex::new(r"<[^>]+>").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Best-effort retrieval of auxiliary text for a question.
#[derive(Clone)]
pub struct SourceFetcher {
    client: reqwest::Client,
}

impl SourceFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(20))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }

    /// Fetch `url` and return its sanitized, truncated text.
    /// Any failure yields an empty string; it is logged and never returned.
    pub async fn fetch(&self, url: &str) -> String {
        match self.try_fetch(url).await {
            Ok(text) => {
                debug!(url, len = text.chars().count(), "Source fetched");
                text
            }
            Err(e) => {
                warn!(url, error = %format!("{:#}", e), "Failed to fetch source, continuing without it");
                String::new()
            }
        }
    }

    async fn try_fetch(&self, url: &str) -> Result<String> {
        let mut resp = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to fetch URL")?;

        let status = resp.status();
        if !status.is_success() {
            bail!("source returned HTTP {}", status.as_u16());
        }

        let content_type = resp
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let mut raw = Vec::new();
        while let Some(chunk) = resp.chunk().await.context("Failed to read response body")? {
            let room = MAX_SOURCE_BYTES - raw.len();
            if chunk.len() >= room {
                raw.extend_from_slice(&chunk[..room]);
                debug!(url, cap = MAX_SOURCE_BYTES, "Source body capped");
                break;
            }
            raw.extend_from_slice(&chunk);
        }
        let body = String::from_utf8_lossy(&raw).into_owned();

        let text = if content_type.contains("html") {
            sanitize_html(&body)
        } else {
            body
        };

        Ok(truncate_chars(&text, MAX_FETCHED_CHARS))
    }
}

/// Strip markup from an HTML document.
///
/// Script and style blocks go first so their contents don't survive the
/// generic tag pass; whitespace is collapsed last.
pub fn sanitize_html(raw: &str) -> String {
    let text = SCRIPT_BLOCK.replace_all(raw, " ");
    let text = STYLE_BLOCK.replace_all(&text, " ");
    let text = ANY_TAG.replace_all(&text, " ");
    WHITESPACE_RUN.replace_all(&text, " ").into_owned()
}

/// First `max` characters of `text` (char-based, never splits a code point).
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
