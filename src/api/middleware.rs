//! Request logging middleware.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::info;

/// Logs `<METHOD> <URI> <elapsed>` once the inner service has responded.
///
/// Install with [`axum::middleware::from_fn`]. The response passes through untouched.
pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    info!("{} {} {:?}", method, uri, start.elapsed());
    response
}
