//! Health check endpoint for liveness probes.
//!
//! Returns 200 OK if the server is running, for load balancers and the
//! deployment's uptime checks.

use axum::http::StatusCode;

/// Health check handler.
///
/// Returns 200 OK with the text "OK" to confirm the server is accepting
/// connections.
pub async fn health_handler() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}
