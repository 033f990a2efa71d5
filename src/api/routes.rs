//! HTTP API route definitions.

use axum::{routing::any, Router};

use super::handlers::{health, status};

/// Create the API router.
///
/// Routes accept every method; anything else falls through to the default 404.
pub fn create_router() -> Router {
    Router::new()
        .route("/health", any(health))
        .route("/api/status", any(status))
}
