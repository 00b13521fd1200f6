//! HTTP API handlers for the auction fees service

pub mod buildinfo;
pub mod fees;
pub mod health;

pub use buildinfo::get_build_info;
pub use fees::{
    get_association_fees, get_buyer_seller_fees, get_car_types, get_storage_fees,
    update_storage_fees,
};
pub use health::health_routes;
