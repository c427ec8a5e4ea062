//! Coupon records.

use serde::{Deserialize, Serialize};

use crate::ids::CouponId;

/// An issued coupon.
///
/// Immutable once created: the store assigns `id` on insert and nothing
/// updates or deletes a coupon afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    /// Store-assigned identifier.
    pub id: CouponId,
    /// The email address the coupon was issued for.
    pub email: String,
    /// The generated coupon code.
    pub code: String,
}

/// A coupon that has been validated but not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCoupon {
    /// The email address the coupon is issued for.
    pub email: String,
    /// The accepted coupon code.
    pub code: String,
}

impl NewCoupon {
    /// Create a new unsaved coupon.
    #[must_use]
    pub fn new(email: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            code: code.into(),
        }
    }

    /// Attach the identifier assigned by the store.
    #[must_use]
    pub fn with_id(self, id: CouponId) -> Coupon {
        Coupon {
            id,
            email: self.email,
            code: self.code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coupon_json_shape() {
        let coupon = NewCoupon::new("a@x.com", "AbC123").with_id(CouponId::new(3));
        let json = serde_json::to_value(&coupon).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 3, "email": "a@x.com", "code": "AbC123" })
        );
    }
}
