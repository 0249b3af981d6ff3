//! Request logging middleware.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use nanoid::nanoid;
use std::time::Instant;
use tracing::info;

use crate::colors::colored_id;

/// Middleware that logs every request/response pair under a colored ID
///
/// Each request gets a short nanoid so its two log lines can be matched up
/// in interleaved output. The response line carries the status code and the
/// total handling latency.
pub async fn log_requests(req: Request<Body>, next: Next) -> Response {
    let id = nanoid!(5);
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = Instant::now();

    info!("{} → {} {}", colored_id(&id), method, path);

    let response = next.run(req).await;

    info!(
        "{} ← {} {} ({}ms)",
        colored_id(&id),
        method,
        response.status(),
        start.elapsed().as_millis()
    );
    response
}
