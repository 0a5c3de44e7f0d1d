use super::uptime;
use crate::{startup::AppState, SERVICE_NAME};
use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;
use serde_json::{json, Value};

/// API status endpoint with detailed deployment information.
pub async fn api_status(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "service": SERVICE_NAME,
        "status": "operational",
        "timestamp": Utc::now().to_rfc3339(),
        "version": state.config.app_version,
        "environment": state.config.environment,
        "hostname": state.config.hostname,
        "region": state.config.aws_region,
        "uptime": uptime(),
        "memory_usage": memory_usage(),
        "cpu_usage": cpu_usage(),
    }))
}

// Resource usage is reported best-effort. The demo carries no system-stats
// dependency, so the fields are present but unpopulated.

fn memory_usage() -> Value {
    json!({ "error": "unavailable" })
}

fn cpu_usage() -> Value {
    json!({ "error": "unavailable" })
}
