//! Hill-Stay Booking API Server Binary
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin hillstay-api
//!
//! # Point at a booking backend and log JSON
//! API_BASE=https://bookings.example.com/api HILLSTAY_LOG_FORMAT=json cargo run --bin hillstay-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_BASE` - Booking backend base URL (default: http://localhost:5000/api)
//! * `HILLSTAY_HOST` - Server host (default: 0.0.0.0)
//! * `HILLSTAY_PORT` - Server port (default: 8080)
//! * `HILLSTAY_BACKEND_TIMEOUT_SECS` - Backend request timeout (default: 10)
//! * `HILLSTAY_JWT_SECRET` - Session token secret (required in production)
//! * `HILLSTAY_LOG_LEVEL` - trace, debug, info, warn, error (default: info)
//! * `HILLSTAY_LOG_FORMAT` - pretty or json (default: pretty)
//! * `HILLSTAY_TIMEZONE` - Resort time zone (default: Asia/Kolkata)

use anyhow::Context;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use interface_api::{config::ApiConfig, config::LogFormat, create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    config.validate().context("invalid configuration")?;

    init_tracing(&config.log_level, config.log_format);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        api_base = %config.api_base,
        timezone = %config.timezone,
        "Starting Hill-Stay booking API"
    );

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .context("invalid server address")?;
    let state = AppState::from_config(config).context("failed to build services")?;
    let app = create_router(state);

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber; `RUST_LOG` wins over the configured level
fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init(),
    }
}

/// Waits for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
