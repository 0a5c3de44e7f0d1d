use axum::http::HeaderValue;
use axum::{extract::Request, middleware::Next, response::Response};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Ensures every request carries an `x-request-id` header: the caller's id
/// is kept, otherwise a fresh v4 UUID is minted. The header is inserted
/// before dispatch so the access log line can pick it up, and echoed on the
/// response for cross-hop correlation.
pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .cloned()
        .unwrap_or_else(|| {
            let minted = Uuid::new_v4().to_string();
            // Hyphenated UUIDs are valid header values; the fallback is unreachable.
            HeaderValue::from_str(&minted).unwrap_or(HeaderValue::from_static("unknown"))
        });

    req.headers_mut()
        .insert(REQUEST_ID_HEADER, request_id.clone());

    let mut response = next.run(req).await;

    response.headers_mut().insert(REQUEST_ID_HEADER, request_id);

    response
}
