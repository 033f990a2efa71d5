//! Health/status HTTP service entry point.

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use status_api::config::Config;
use status_api::error::ServiceError;
use status_api::server;

/// Minimal HTTP service exposing /health and /api/status.
///
/// The listening port is taken from the PORT environment variable (default 8080).
#[derive(Parser, Debug)]
#[command(name = "status-api")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("status_api=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        ServiceError::from(e)
    })?;
    info!("Configuration loaded: port={}", config.port);

    if let Err(e) = server::run(&config).await {
        error!("server failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}
