//! Application startup and lifecycle management.
//!
//! Binds the listener (port 0 = random port for testing), assembles the
//! router with its instrumentation layers, and runs the server until a
//! shutdown signal arrives.

use crate::config::AppConfig;
use crate::error::AppError;
use crate::handlers;
use crate::middleware::{request_id_middleware, track_requests};
use axum::{middleware, routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

/// Shared application state.
///
/// Configuration is immutable after load; the metrics handle is the single
/// injected registry object backing `/metrics`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub metrics: PrometheusHandle,
}

/// Build the router with all routes and instrumentation layers.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root::hello))
        .route("/health", get(handlers::health::health_check))
        .route("/health/ready", get(handlers::health::readiness_check))
        .route("/version", get(handlers::version::version_info))
        .route("/metrics", get(handlers::metrics::metrics_exposition))
        .route("/api/v1/status", get(handlers::status::api_status))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(track_requests))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Bind the listener and assemble the router.
    pub async fn build(config: AppConfig, metrics: PrometheusHandle) -> Result<Self, AppError> {
        let listener = TcpListener::bind((config.host.as_str(), config.port))
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to bind listener to {}:{}: {}",
                    config.host,
                    config.port,
                    e
                );
                AppError::from(e)
            })?;
        let port = listener.local_addr()?.port();

        let state = AppState {
            config: Arc::new(config),
            metrics,
        };

        Ok(Self {
            port,
            listener,
            router: router(state),
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the server until a shutdown signal arrives; in-flight responses
    /// are completed best-effort before exit.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
