//! Minimal HTTP service with health and status endpoints.
//!
//! Two constant JSON endpoints sit behind a request-logging middleware:
//!
//! ```text
//! /health      -> {"status":"healthy"}
//! /api/status  -> {"service":"go-api","version":"1.0.0"}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: Router, handlers and logging middleware
//! - [`server`]: Listener binding and the serve loop

pub mod api;
pub mod config;
pub mod error;
pub mod server;

pub use config::{Config, ServerTimeouts};
pub use error::{Result, ServiceError};
