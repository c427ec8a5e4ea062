//! Database schema definitions and column families.
//!
//! This module defines the column families used in `RocksDB` storage.

/// Column family names for the `RocksDB` database.
pub mod cf {
    /// Primary coupon records, keyed by big-endian `coupon_id`.
    pub const COUPONS: &str = "coupons";

    /// Index: coupons by email, keyed by `email`, value is `coupon_id`.
    pub const COUPONS_BY_EMAIL: &str = "coupons_by_email";

    /// Index: coupons by code, keyed by `code`, value is `coupon_id`.
    pub const COUPONS_BY_CODE: &str = "coupons_by_code";

    /// Store metadata (identifier sequence, record count).
    pub const META: &str = "meta";
}

/// Returns all column family names for database initialization.
#[must_use]
pub fn all_column_families() -> Vec<&'static str> {
    vec![
        cf::COUPONS,
        cf::COUPONS_BY_EMAIL,
        cf::COUPONS_BY_CODE,
        cf::META,
    ]
}
