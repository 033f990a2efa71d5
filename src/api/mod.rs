//! HTTP API module for the health and status endpoints.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::log_request;
pub use routes::create_router;
