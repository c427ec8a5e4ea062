//! Error types for coupon storage.

use coupon_core::CouponError;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Database operation failed.
    #[error("database error: {0}")]
    Database(String),

    /// Serialization/deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A coupon already exists for this email.
    #[error("email already has a coupon: {email}")]
    EmailTaken {
        /// The conflicting email.
        email: String,
    },

    /// A coupon already exists with this code.
    #[error("code already in use: {code}")]
    CodeTaken {
        /// The conflicting code.
        code: String,
    },
}

impl From<StoreError> for CouponError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::EmailTaken { .. } => Self::DuplicateEmail,
            StoreError::CodeTaken { .. } => Self::CodeCollision,
            other => Self::Storage(other.to_string()),
        }
    }
}
