use crate::{startup::AppState, SERVICE_NAME};
use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;

/// Main greeting endpoint.
pub async fn hello(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "message": "Hello from CI/CD!",
        "service": SERVICE_NAME,
        "timestamp": Utc::now().to_rfc3339(),
        "version": state.config.app_version,
        "environment": state.config.environment,
    }))
}
