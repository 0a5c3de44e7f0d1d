//! Prometheus recorder installation.
//!
//! The recorder is installed once per process; the returned handle is stored
//! in [`crate::startup::AppState`] and renders the text exposition for the
//! `/metrics` endpoint.

use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder and return a handle for rendering.
///
/// Idempotent so integration tests can spawn several applications in one
/// process; they all share the recorder.
pub fn init_metrics() -> PrometheusHandle {
    PROMETHEUS_HANDLE
        .get_or_init(|| {
            let handle = PrometheusBuilder::new()
                .install_recorder()
                .expect("failed to install Prometheus recorder");

            describe_counter!("http_requests_total", "Total HTTP requests");
            describe_histogram!("http_request_duration_seconds", "HTTP request latency");

            handle
        })
        .clone()
}
