//! auction-fees - Auction fees data API
//!
//! Serves read endpoints for association fees, buyer/seller fees by car
//! type, and car types, plus read/update of the storage fee amount.

use anyhow::Result;
use auction_fees::{build_router, config::Config, db, AppState};
use clap::Parser;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting Auction Fees API (auction-fees) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let config = Config::parse();
    info!("Database path: {}", config.database.display());

    let pool = match db::init_database(&config.database).await {
        Ok(pool) => {
            info!("✓ Connected to database");
            pool
        }
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    // Create application state and router
    let state = AppState::new(pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    info!("auction-fees listening on http://{}", config.listen_addr());
    info!("Health check: http://{}/health", config.listen_addr());

    axum::serve(listener, app).await?;

    Ok(())
}
