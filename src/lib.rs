//! auction-fees library - Auction fees data API
//!
//! Thin read/update HTTP API over four fee tables: association fee brackets,
//! buyer/seller fees by car type, the car type catalog, and the storage fee
//! singleton. Pass-through queries only; the single write is the storage fee
//! amount update.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;

pub mod api;
pub mod config;
pub mod db;
pub mod error;

pub use error::{Error, Result};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
///
/// Fee endpoints are nested under /api/Main; /health and /api/buildinfo sit
/// alongside them.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, put};

    let main_api = Router::new()
        .route("/GetAssociationFees", get(api::get_association_fees))
        .route("/GetBuyerSellerFees/:car_type", get(api::get_buyer_seller_fees))
        .route("/GetCarTypes", get(api::get_car_types))
        .route("/GetStorageFees", get(api::get_storage_fees))
        .route("/UpdateStorageFees/:new_storage_fee", put(api::update_storage_fees));

    Router::new()
        .nest("/api/Main", main_api)
        .route("/api/buildinfo", get(api::get_build_info))
        .merge(api::health_routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
