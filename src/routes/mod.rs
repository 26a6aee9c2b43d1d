mod ask;
mod health;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::REQUEST_TIMEOUT;
use crate::state::AppState;

const MAX_BODY_BYTES: usize = 1024 * 1024;

pub fn router(state: AppState, cors_allowlist: &[String]) -> Router {
    Router::new()
        .route("/api/ask", post(ask::ask))
        // Older UI builds post to /api/chat.
        .route("/api/chat", post(ask::ask))
        .route("/api/health", get(health::health))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(cors_layer(cors_allowlist))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(allowlist: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowlist
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(origin = origin.as_str(), "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
