//! cicd-demo-service: minimal HTTP service for exercising a CI/CD pipeline.
//!
//! Exposes liveness/readiness/version/status endpoints plus Prometheus
//! metrics. All checks are hardcoded; there is no backing database or cache.

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod observability;
pub mod startup;

/// Service name reported in response bodies and startup logs.
pub const SERVICE_NAME: &str = env!("CARGO_PKG_NAME");
