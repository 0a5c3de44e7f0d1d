use super::uptime;
use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;

/// Health check endpoint for load balancers and liveness probes.
///
/// The demo has no real database, cache, or downstream services, so the
/// individual checks are hardcoded healthy.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "version": state.config.app_version,
        "uptime": uptime(),
        "checks": {
            "database": "healthy",
            "cache": "healthy",
            "external_services": "healthy",
        },
    }))
}

/// Readiness check endpoint for Kubernetes readiness probes.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ready",
        "timestamp": Utc::now().to_rfc3339(),
        "version": state.config.app_version,
    }))
}
