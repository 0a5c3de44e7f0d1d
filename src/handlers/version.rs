use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

/// Version of the HTTP framework the service is built on.
pub const FRAMEWORK_VERSION: &str = "axum 0.7";

/// Version information endpoint.
///
/// `runtime_version` is baked in at compile time when CI exports
/// `RUSTC_VERSION`; otherwise it reads "unknown".
pub async fn version_info(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "version": state.config.app_version,
        "build_date": state.config.build_date,
        "git_commit": state.config.git_commit,
        "environment": state.config.environment,
        "runtime_version": option_env!("RUSTC_VERSION").unwrap_or("unknown"),
        "framework_version": FRAMEWORK_VERSION,
    }))
}
