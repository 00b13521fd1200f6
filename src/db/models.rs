//! Database models
//!
//! Flat row types for the four fee tables. All rows are immutable per fetch;
//! only `StorageFee.fee_amount` is ever written back.

use serde::{Deserialize, Serialize};

/// Association fee bracket (price range → flat fee)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AssociationFee {
    pub id: i64,
    pub price_from: i64,
    /// Upper bound of the bracket; NULL means open-ended
    pub price_to: Option<i64>,
    pub fee_amount: i64,
}

/// Buyer/seller fee row, optionally scoped to a car type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct BuyerSellerFee {
    pub id: i64,
    /// Car type this fee applies to; NULL rows are never returned by
    /// car-type-filtered queries
    pub car_type_id: Option<i64>,
    pub fee_type: String,
    pub fee_rate: f64,
}

/// Car type catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CarType {
    pub id: i64,
    pub name: String,
}

/// Storage fee row (singleton semantics: only the first row is read/written)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct StorageFee {
    pub id: i64,
    pub fee_amount: i64,
}
