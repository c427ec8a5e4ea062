//! Identifier types for coupons.
//!
//! Coupon identifiers are assigned by the store on insert. They are strictly
//! increasing, so ordering by identifier is ordering by issue time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A coupon identifier.
///
/// Serialized as a bare JSON number.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CouponId(u64);

impl CouponId {
    /// Create an identifier from its numeric value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Return the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Return the identifier following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Big-endian bytes, so byte order matches numeric order.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    /// Decode an identifier from its big-endian byte form.
    ///
    /// # Errors
    ///
    /// Returns an error if the slice is not exactly 8 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, IdError> {
        let bytes: [u8; 8] = bytes.try_into().map_err(|_| IdError::InvalidBytes)?;
        Ok(Self(u64::from_be_bytes(bytes)))
    }
}

impl FromStr for CouponId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self).map_err(|_| IdError::InvalidNumber)
    }
}

impl fmt::Debug for CouponId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CouponId({})", self.0)
    }
}

impl fmt::Display for CouponId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CouponId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Errors that can occur when parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The input is not an unsigned integer.
    #[error("invalid coupon id: not an unsigned integer")]
    InvalidNumber,

    /// The input is not an 8-byte big-endian integer.
    #[error("invalid coupon id bytes")]
    InvalidBytes,
}
