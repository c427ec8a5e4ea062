//! Coupon issuance engine.
//!
//! `CouponIssuer` owns the business rules: one coupon per email, one coupon
//! per code, and a bounded number of attempts to draw a free code.
//!
//! # Create flow
//!
//! 1. Reject a missing or blank email (`EmptyEmail`).
//! 2. Reject an email that already has a coupon (`DuplicateEmail`), before
//!    any code is generated.
//! 3. Draw up to [`MAX_CODE_GENERATION_ATTEMPTS`] codes. An empty code fails
//!    at once (`EmptyCode`); a taken code consumes an attempt. Running out of
//!    attempts fails with `CodeCollision`.
//! 4. Save the coupon and return it with its assigned identifier.
//!
//! Email format is checked by the HTTP layer before the engine is called.
//!
//! The existence checks in steps 2 and 3 are a fast path only. The store
//! re-checks both under its write lock, and a race lost there is reported
//! with the same error as the fast path.

use coupon_core::{
    CodeGenerator, Coupon, CouponError, CouponId, NewCoupon, Page, PageRequest, Result,
};
use coupon_store::{Store, StoreError};

pub use coupon_core::MAX_CODE_GENERATION_ATTEMPTS;

/// Issues and reads coupons.
///
/// Stateless apart from its collaborators, so one instance can be shared by
/// all request handlers.
pub struct CouponIssuer<S, G> {
    store: S,
    generator: G,
}

impl<S: Store, G: CodeGenerator> CouponIssuer<S, G> {
    /// Create an issuer over a store and a code generator.
    #[must_use]
    pub const fn new(store: S, generator: G) -> Self {
        Self { store, generator }
    }

    /// Get a coupon by identifier.
    ///
    /// # Errors
    ///
    /// - `CouponError::NotFound` if no coupon has this identifier.
    /// - `CouponError::Storage` if the store fails.
    pub fn get(&self, id: CouponId) -> Result<Coupon> {
        self.store
            .find_by_id(id)?
            .ok_or(CouponError::NotFound { id })
    }

    /// List one page of coupons, newest first unless the request says otherwise.
    ///
    /// # Errors
    ///
    /// Returns `CouponError::Storage` if the store fails.
    pub fn list(&self, request: &PageRequest) -> Result<Page<Coupon>> {
        Ok(self.store.find_page(request)?)
    }

    /// Issue a coupon for `email`.
    ///
    /// `None` stands for a missing email and is treated like an empty one.
    ///
    /// # Errors
    ///
    /// - `CouponError::EmptyEmail` if the email is missing or blank.
    /// - `CouponError::DuplicateEmail` if the email already has a coupon.
    /// - `CouponError::EmptyCode` if the generator returns an empty code.
    /// - `CouponError::CodeCollision` if every attempt drew a taken code.
    /// - `CouponError::Storage` if the store fails.
    pub fn create(&self, email: Option<&str>) -> Result<Coupon> {
        let email = match email {
            Some(email) if !email.trim().is_empty() => email,
            _ => return Err(CouponError::EmptyEmail),
        };

        if self.store.exists_by_email(email)? {
            tracing::info!(email = %email, "Coupon already issued for email");
            return Err(CouponError::DuplicateEmail);
        }

        let code = self.assign_code()?;

        let coupon = self
            .store
            .save(NewCoupon::new(email, code))
            .map_err(|e| match e {
                StoreError::EmailTaken { .. } | StoreError::CodeTaken { .. } => {
                    tracing::warn!(email = %email, error = %e, "Lost uniqueness race on save");
                    CouponError::from(e)
                }
                other => CouponError::from(other),
            })?;

        tracing::info!(coupon_id = %coupon.id, email = %coupon.email, "Coupon issued");

        Ok(coupon)
    }

    /// Draw codes until one is free or the attempts run out.
    fn assign_code(&self) -> Result<String> {
        for attempt in 1..=MAX_CODE_GENERATION_ATTEMPTS {
            let code = self.generator.generate_code();

            if code.is_empty() {
                tracing::error!(attempt, "Code generator returned an empty code");
                return Err(CouponError::EmptyCode);
            }

            if !self.store.exists_by_code(&code)? {
                return Ok(code);
            }

            tracing::warn!(attempt, "Generated coupon code collided");
        }

        Err(CouponError::CodeCollision)
    }
}
