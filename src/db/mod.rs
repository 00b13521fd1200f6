//! Database access layer for the auction fees service
//!
//! Connection setup and schema creation. Table queries live in [`fees`],
//! row types in [`models`].

use crate::error::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::path::Path;
use tracing::info;

pub mod fees;
pub mod models;

pub use models::{AssociationFee, BuyerSellerFee, CarType, StorageFee};

/// Initialize database connection and create tables if needed
///
/// Opens (or creates) the SQLite database at `db_path` and ensures the four
/// fee tables exist. No rows are seeded: this API never creates or deletes
/// entities, it only reads them and updates the storage fee amount.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    // mode=rwc creates the database file on first run
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    // Enable foreign keys
    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await?;

    // WAL mode allows concurrent readers while a storage fee update is in flight
    sqlx::query("PRAGMA journal_mode = WAL")
        .execute(&pool)
        .await?;

    sqlx::query("PRAGMA busy_timeout = 5000")
        .execute(&pool)
        .await?;

    create_tables(&pool).await?;

    Ok(pool)
}

/// Create the fee tables (idempotent - safe to call multiple times)
///
/// Public so tests can initialize an in-memory database without going
/// through a file path.
pub async fn create_tables(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS car_types (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS association_fees (
            id INTEGER PRIMARY KEY,
            price_from INTEGER NOT NULL,
            price_to INTEGER,
            fee_amount INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS buyer_seller_fees (
            id INTEGER PRIMARY KEY,
            car_type_id INTEGER REFERENCES car_types(id),
            fee_type TEXT NOT NULL,
            fee_rate REAL NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS storage_fee (
            id INTEGER PRIMARY KEY,
            fee_amount INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
