use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::warn;

use crate::llm::ChainError;

/// Errors surfaced to HTTP callers as `{ error, detail }`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Upstream AI error (all models failed)")]
    Upstream(#[from] ChainError),
    #[error("Invalid request body")]
    InvalidBody(#[from] serde_json::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Upstream(ChainError::Exhausted { status, .. }) => status
                .and_then(|s| StatusCode::from_u16(s).ok())
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn detail(&self) -> String {
        match self {
            ApiError::Upstream(ChainError::Exhausted { detail, .. }) => detail.clone(),
            ApiError::InvalidBody(e) => e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.detail();
        if let ApiError::InvalidBody(_) = &self {
            warn!(status = status.as_u16(), detail = detail.as_str(), "Rejected request body");
        }
        (
            status,
            Json(serde_json::json!({
                "error": self.to_string(),
                "detail": detail,
            })),
        )
            .into_response()
    }
}
