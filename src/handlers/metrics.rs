use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};

/// Prometheus text exposition format content type.
pub const CONTENT_TYPE_LATEST: &str = "text/plain; version=0.0.4";

/// Prometheus metrics endpoint.
pub async fn metrics_exposition(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", CONTENT_TYPE_LATEST)],
        state.metrics.render(),
    )
}
