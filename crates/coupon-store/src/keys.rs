//! Key encoding utilities for `RocksDB`.
//!
//! This module provides functions for encoding and decoding keys used in column families.

use coupon_core::CouponId;

/// Metadata key holding the last assigned coupon identifier.
pub const LAST_ID_KEY: &[u8] = b"last_id";

/// Metadata key holding the number of stored coupons.
pub const COUNT_KEY: &[u8] = b"count";

/// Create a coupon key from an identifier.
///
/// Keys are big-endian so iteration order matches identifier order.
#[must_use]
pub fn coupon_key(id: CouponId) -> Vec<u8> {
    id.to_bytes().to_vec()
}

/// Create an email index key.
#[must_use]
pub fn email_key(email: &str) -> Vec<u8> {
    email.as_bytes().to_vec()
}

/// Create a code index key.
#[must_use]
pub fn code_key(code: &str) -> Vec<u8> {
    code.as_bytes().to_vec()
}

/// Encode a counter value stored under a metadata key.
#[must_use]
pub fn encode_counter(value: u64) -> Vec<u8> {
    value.to_be_bytes().to_vec()
}

/// Decode a counter value; absent or malformed values read as zero.
#[must_use]
pub fn decode_counter(bytes: Option<&[u8]>) -> u64 {
    bytes
        .and_then(|b| <[u8; 8]>::try_from(b).ok())
        .map_or(0, u64::from_be_bytes)
}
