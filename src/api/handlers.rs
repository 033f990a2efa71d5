//! HTTP API handlers.

use axum::{response::IntoResponse, Json};
use serde::Serialize;

/// Service name reported by the status endpoint.
pub const SERVICE_NAME: &str = "go-api";
/// Service version reported by the status endpoint.
pub const SERVICE_VERSION: &str = "1.0.0";

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "healthy".
    pub status: &'static str,
}

/// Status response.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Service name.
    pub service: &'static str,
    /// Service version.
    pub version: &'static str,
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "healthy" })
}

/// Status handler - returns the fixed service identity.
pub async fn status() -> impl IntoResponse {
    Json(StatusResponse {
        service: SERVICE_NAME,
        version: SERVICE_VERSION,
    })
}
