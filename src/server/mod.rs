//! Server bootstrap: middleware stack, listener binding and the accept loop.

mod connection;

use std::time::Duration;

use axum::{http::StatusCode, middleware, Router};
use tokio::net::TcpListener;
use tower_http::timeout::{RequestBodyTimeoutLayer, TimeoutLayer};
use tracing::{debug, info, warn};

use crate::api::{create_router, log_request};
use crate::config::{Config, ServerTimeouts};
use crate::error::{Result, ServiceError};

/// Build the full application: routes, timeouts and request logging.
///
/// Logging is outermost so timed-out and unmatched requests are still logged.
pub fn build_app(timeouts: ServerTimeouts) -> Router {
    create_router()
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeouts.write,
        ))
        .layer(RequestBodyTimeoutLayer::new(timeouts.read))
        .layer(middleware::from_fn(log_request))
}

/// Accept connections on an already-bound listener forever.
///
/// Each connection is served on its own task with the header read and
/// keep-alive idle timeouts applied.
pub async fn serve(listener: TcpListener, timeouts: ServerTimeouts) {
    debug!(
        "Timeouts: read={:?} write={:?} idle={:?}",
        timeouts.read, timeouts.write, timeouts.idle
    );
    let app = build_app(timeouts);

    loop {
        let (stream, peer_addr) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!("Failed to accept connection: {}", e);
                tokio::time::sleep(Duration::from_millis(100)).await;
                continue;
            }
        };

        debug!("Accepted connection from {}", peer_addr);
        tokio::spawn(connection::serve_connection(stream, app.clone(), timeouts));
    }
}

/// Bind the configured port and serve forever.
pub async fn run(config: &Config) -> Result<()> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServiceError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!("API starting on port {}", config.port);
    serve(listener, ServerTimeouts::default()).await;
    Ok(())
}
