//! Coupon issuance HTTP API service.
//!
//! This crate provides the issuance engine and its HTTP surface:
//!
//! - [`CouponIssuer`]: one coupon per email, unique codes, bounded retries
//! - Email validation ahead of the engine
//! - `GET`/`POST /api/v1/coupon` and `GET /api/v1/coupon/:id`
//!
//! # Errors
//!
//! Every failure is returned as `{"url", "message", "errorCode"}`; see
//! [`error`] for the codes and their HTTP statuses.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::unused_async)]

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod issuance;
pub mod pagination;
pub mod routes;
pub mod state;
pub mod validation;

pub use config::{ServiceConfig, StorageBackend};
pub use error::{ApiError, ErrorInfo};
pub use issuance::CouponIssuer;
pub use routes::create_router;
pub use state::AppState;
