//! API handlers.

pub mod coupons;
pub mod health;
