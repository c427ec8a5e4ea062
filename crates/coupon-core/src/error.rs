//! Error types for coupon issuance.

use crate::code::MAX_CODE_GENERATION_ATTEMPTS;
use crate::ids::CouponId;

/// Result type for coupon operations.
pub type Result<T> = std::result::Result<T, CouponError>;

/// Errors that can occur while issuing or reading coupons.
///
/// Every variant has a stable machine-readable code, see [`CouponError::code`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CouponError {
    /// No coupon with the requested identifier.
    #[error("Not exist coupon with id {id}")]
    NotFound {
        /// The identifier that was not found.
        id: CouponId,
    },

    /// The email was missing, empty or blank.
    #[error("Fail to create Coupon. Email is null or empty.")]
    EmptyEmail,

    /// The email is not a structurally valid address.
    #[error("Fail to create Coupon. Email format is invalid.")]
    InvalidEmail,

    /// A coupon has already been issued for this email.
    #[error("Fail to create Coupon. Already coupon issued for this mail.")]
    DuplicateEmail,

    /// The code generator produced an empty code.
    #[error("Fail to create Coupon. Code generator returned an empty code.")]
    EmptyCode,

    /// Every generated code collided with an existing coupon.
    #[error(
        "Fail to create Coupon. Collision occur more than {} in code generator.",
        MAX_CODE_GENERATION_ATTEMPTS
    )]
    CodeCollision,

    /// Storage error.
    #[error("storage error: {0}")]
    Storage(String),
}

impl CouponError {
    /// Stable machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not.exist.coupon",
            Self::EmptyEmail => "empty.email",
            Self::InvalidEmail => "invalid.email",
            Self::DuplicateEmail => "duplicate.email",
            Self::EmptyCode => "empty.code",
            Self::CodeCollision => "code.collision",
            Self::Storage(_) => "internal.error",
        }
    }

    /// Whether the failure is the caller's fault rather than the service's.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::EmptyEmail | Self::InvalidEmail | Self::DuplicateEmail
        )
    }
}
