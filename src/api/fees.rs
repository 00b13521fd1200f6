//! Fee lookup and storage fee update handlers
//!
//! Five endpoints mounted under /api/Main. Each delegates to the data access
//! layer and maps the result to an HTTP response: 200 on success, 404 when a
//! filtered or singleton lookup comes back empty, 500 when the storage fee
//! update precondition fails or the database errors.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::db::models::{AssociationFee, BuyerSellerFee, CarType, StorageFee};
use crate::db::fees as db;
use crate::error::Error;
use crate::AppState;

/// GET /api/Main/GetAssociationFees
///
/// Returns all association fee brackets. An empty table yields 200 with an
/// empty array, not 404.
pub async fn get_association_fees(
    State(state): State<AppState>,
) -> Result<Json<Vec<AssociationFee>>, Error> {
    let fees = db::association_fees(&state.db).await?;
    Ok(Json(fees))
}

/// GET /api/Main/GetBuyerSellerFees/{car_type}
///
/// Returns the buyer/seller fees for the given car type, or 404 when no
/// rows match. Rows with no car type never match.
pub async fn get_buyer_seller_fees(
    State(state): State<AppState>,
    Path(car_type): Path<i64>,
) -> Result<Json<Vec<BuyerSellerFee>>, Error> {
    let fees = db::buyer_seller_fees(&state.db, car_type).await?;
    if fees.is_empty() {
        return Err(Error::NotFound(format!(
            "No buyer/seller fees for car type {}",
            car_type
        )));
    }
    Ok(Json(fees))
}

/// GET /api/Main/GetCarTypes
///
/// Returns the car type catalog (possibly empty).
pub async fn get_car_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<CarType>>, Error> {
    let types = db::car_types(&state.db).await?;
    Ok(Json(types))
}

/// GET /api/Main/GetStorageFees
///
/// Returns the storage fee row, or 404 when the table is empty.
pub async fn get_storage_fees(
    State(state): State<AppState>,
) -> Result<Json<StorageFee>, Error> {
    let fee = db::storage_fee(&state.db)
        .await?
        .ok_or_else(|| Error::NotFound("No storage fee record".to_string()))?;
    Ok(Json(fee))
}

/// PUT /api/Main/UpdateStorageFees/{new_storage_fee}
///
/// Sets the storage fee amount on the first row. Returns 200 with an empty
/// body on success, 500 when no row exists to update.
pub async fn update_storage_fees(
    State(state): State<AppState>,
    Path(new_storage_fee): Path<i64>,
) -> Result<StatusCode, Error> {
    if db::update_storage_fee(&state.db, new_storage_fee).await? {
        info!("Storage fee updated to {}", new_storage_fee);
        Ok(StatusCode::OK)
    } else {
        Err(Error::UpdateFailed(
            "No storage fee row to update".to_string(),
        ))
    }
}
