//! Cashcast tool server
//!
//! Serves the forecasting and pricing tools over HTTP, or over stdio with
//! `--stdio`.

use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cashcast_api::{AppState, create_router, stdio};
use cashcast_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays clean for the stdio transport
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cashcast=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;
    info!(
        hotel = %config.hotel.hotel_name,
        entity = %config.hotel.entity_id,
        rooms = config.hotel.room_count,
        "Configuration loaded"
    );

    let addr = config.bind_addr();
    let timeout = Duration::from_secs(config.server.timeout_secs);
    let state = AppState::new(config.hotel, config.pricing);

    if std::env::args().any(|arg| arg == "--stdio") {
        stdio::serve_stdio(state).await?;
        return Ok(());
    }

    let app = create_router(state).layer(TimeoutLayer::new(timeout));

    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
