//! Coupon Client SDK.
//!
//! This crate provides a client library for services that issue or look up
//! coupons through the coupon service API.
//!
//! # Example
//!
//! ```no_run
//! use coupon_client::{ClientError, CouponClient};
//!
//! # async fn example() -> Result<(), ClientError> {
//! let client = CouponClient::new("http://coupon-service:8080")?;
//!
//! match client.create_coupon("jimin.joo@example.com").await {
//!     Ok(coupon) => println!("Issued {} (id {})", coupon.code, coupon.id),
//!     Err(ClientError::DuplicateEmail) => println!("Already issued"),
//!     Err(e) => return Err(e),
//! }
//!
//! let page = client.list_coupons(0, 20).await?;
//! println!("{} coupons issued", page.total_elements);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod error;

pub use client::{ClientOptions, CouponClient};
pub use coupon_core::{Coupon, CouponId, Page};
pub use error::{ClientError, ErrorBody};
