use super::request_id::REQUEST_ID_HEADER;
use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics::{counter, histogram};
use std::time::Instant;

/// Request-lifecycle hook: times the request, records it into the latency
/// histogram and the labeled request counter, and emits one access log line.
pub async fn track_requests(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    // Label by the matched route template; unmatched requests fall back to
    // the raw path so 404s are still counted.
    let endpoint = req
        .extensions()
        .get::<MatchedPath>()
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| path.clone());
    // Inserted by the request id layer, which runs outside this one.
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let response = next.run(req).await;

    let elapsed = start.elapsed();
    let status = response.status().as_u16();

    histogram!("http_request_duration_seconds").record(elapsed.as_secs_f64());

    let labels = [
        ("method", method.clone()),
        ("endpoint", endpoint),
        ("status", status.to_string()),
    ];
    counter!("http_requests_total", &labels).increment(1);

    tracing::info!(
        %request_id,
        %method,
        %path,
        status,
        duration_seconds = elapsed.as_secs_f64(),
        "request completed"
    );

    response
}
