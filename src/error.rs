use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde_json::json;
use thiserror::Error;

/// The service surfaces exactly two error kinds to clients: not-found and
/// internal. Configuration errors only occur before the server starts.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(anyhow::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            AppError::NotFound(err) => (StatusCode::NOT_FOUND, "Not Found", err.to_string()),
            AppError::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    "An internal server error occurred".to_string(),
                )
            }
            AppError::Config(err) => {
                tracing::error!(error = %err, "configuration error surfaced in request path");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        (
            status,
            Json(json!({
                "error": error,
                "message": message,
                "timestamp": Utc::now().to_rfc3339(),
            })),
        )
            .into_response()
    }
}
