pub mod health;
pub mod metrics;
pub mod root;
pub mod status;
pub mod version;

use crate::error::AppError;
use anyhow::anyhow;

/// Router fallback for paths with no matching route.
pub async fn not_found() -> AppError {
    AppError::NotFound(anyhow!("The requested resource was not found"))
}

// Uptime tracking is out of scope for the demo; probes only need the field
// to be present.
pub(crate) fn uptime() -> &'static str {
    "0 days, 0 hours, 0 minutes"
}
