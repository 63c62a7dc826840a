// crates/medimock-rpc/src/middleware.rs
//
// Middleware for the HTTP server: per-request access logging.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Logging layer for every incoming request.
///
/// Records method, path, response status and latency using the `tracing`
/// crate. Installed with `axum::middleware::from_fn`.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(req).await;

    tracing::info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        latency_ms = start.elapsed().as_millis() as u64,
        "Handled request"
    );
    response
}
