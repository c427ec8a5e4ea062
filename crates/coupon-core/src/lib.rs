//! Core types for the coupon service.
//!
//! This crate provides the foundational types shared by every other crate in
//! the workspace:
//!
//! - **Identifiers**: `CouponId`
//! - **Coupons**: `Coupon`, `NewCoupon`
//! - **Paging**: `PageRequest`, `Sort`, `Page`
//! - **Codes**: `CodeGenerator`, `RandomCodeGenerator`
//! - **Errors**: `CouponError`
//!
//! # Uniqueness
//!
//! A coupon pairs one email with one code. No two coupons share an email and
//! no two coupons share a code. Coupons are never updated or deleted once
//! issued.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod code;
pub mod coupon;
pub mod error;
pub mod ids;
pub mod page;

pub use code::{
    CodeGenerator, RandomCodeGenerator, DEFAULT_CODE_LENGTH, MAX_CODE_GENERATION_ATTEMPTS,
};
pub use coupon::{Coupon, NewCoupon};
pub use error::{CouponError, Result};
pub use ids::{CouponId, IdError};
pub use page::{Direction, Page, PageRequest, Sort, SortField, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
