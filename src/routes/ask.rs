use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::Json;

use crate::answer::{AnswerResult, AskRequest};
use crate::error::ApiError;
use crate::state::AppState;

/// Answer a question, optionally grounded in caller context and a source URL.
pub async fn ask(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<AnswerResult>, ApiError> {
    let req = parse_request(&headers, &body)?;
    let result = state.orchestrator.answer(&req).await?;
    Ok(Json(result))
}

/// Only JSON bodies are read; anything else is treated as an empty request.
/// A JSON body that does not parse is the one rejected case.
fn parse_request(headers: &HeaderMap, body: &[u8]) -> Result<AskRequest, ApiError> {
    if !is_json(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(AskRequest::default());
    }
    let value: serde_json::Value = serde_json::from_slice(body)?;
    if !value.is_object() {
        return Ok(AskRequest::default());
    }
    Ok(serde_json::from_value(value)?)
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}
