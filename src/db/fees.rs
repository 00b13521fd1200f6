//! Fee table queries
//!
//! One async function per operation, a thin pass-through to the underlying
//! tables. Storage faults propagate as `Error::Database` with no retry.

use crate::db::models::{AssociationFee, BuyerSellerFee, CarType, StorageFee};
use crate::error::Result;
use sqlx::SqlitePool;

/// Get all association fee brackets, unfiltered
pub async fn association_fees(db: &SqlitePool) -> Result<Vec<AssociationFee>> {
    let fees = sqlx::query_as::<_, AssociationFee>(
        r#"
        SELECT id, price_from, price_to, fee_amount
        FROM association_fees
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(fees)
}

/// Get buyer/seller fees for a specific car type
///
/// Returns rows whose `car_type_id` is present and equals `car_type`.
/// Rows with NULL `car_type_id` are never returned. Empty vec if no match.
pub async fn buyer_seller_fees(db: &SqlitePool, car_type: i64) -> Result<Vec<BuyerSellerFee>> {
    let fees = sqlx::query_as::<_, BuyerSellerFee>(
        r#"
        SELECT id, car_type_id, fee_type, fee_rate
        FROM buyer_seller_fees
        WHERE car_type_id IS NOT NULL AND car_type_id = ?
        "#,
    )
    .bind(car_type)
    .fetch_all(db)
    .await?;

    Ok(fees)
}

/// Get the car type catalog, unfiltered
pub async fn car_types(db: &SqlitePool) -> Result<Vec<CarType>> {
    let types = sqlx::query_as::<_, CarType>(
        r#"
        SELECT id, name
        FROM car_types
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(types)
}

/// Get the storage fee row (first-row semantics)
///
/// Returns `None` if the table is empty.
pub async fn storage_fee(db: &SqlitePool) -> Result<Option<StorageFee>> {
    let fee = sqlx::query_as::<_, StorageFee>(
        r#"
        SELECT id, fee_amount
        FROM storage_fee
        ORDER BY id
        LIMIT 1
        "#,
    )
    .fetch_optional(db)
    .await?;

    Ok(fee)
}

/// Update the storage fee amount on the first row
///
/// Returns `Ok(false)` without side effects if no row exists, `Ok(true)`
/// after persisting otherwise. Read-modify-write with no concurrency guard:
/// two concurrent updates race and the last write wins, matching the
/// consistency level the storage layer provides.
pub async fn update_storage_fee(db: &SqlitePool, new_amount: i64) -> Result<bool> {
    let Some(current) = storage_fee(db).await? else {
        return Ok(false);
    };

    sqlx::query("UPDATE storage_fee SET fee_amount = ? WHERE id = ?")
        .bind(new_amount)
        .bind(current.id)
        .execute(db)
        .await?;

    Ok(true)
}
