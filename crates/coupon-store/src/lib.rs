//! Storage layer for the coupon service.
//!
//! This crate provides persistent storage for issued coupons behind the
//! [`Store`] trait, with two backends:
//!
//! - [`MemoryStore`]: process-local, always available
//! - `RocksStore`: `RocksDB` with column families for the email and code
//!   indexes (feature `rocksdb-backend`)
//!
//! # Uniqueness
//!
//! Callers may check `exists_by_email` / `exists_by_code` before saving, but
//! those checks race with concurrent writers. Every backend re-checks both
//! indexes inside `save` under a store-wide write lock, so the store is the
//! authoritative guard for one coupon per email and one coupon per code.
//!
//! # Example
//!
//! ```
//! use coupon_core::{NewCoupon, PageRequest};
//! use coupon_store::{MemoryStore, Store};
//!
//! let store = MemoryStore::new();
//! let coupon = store.save(NewCoupon::new("a@x.com", "AbCdEf1234")).unwrap();
//!
//! assert!(store.exists_by_email("a@x.com").unwrap());
//! assert_eq!(store.find_by_id(coupon.id).unwrap(), Some(coupon));
//! assert_eq!(store.find_page(&PageRequest::default()).unwrap().total_elements, 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod memory;

#[cfg(feature = "rocksdb-backend")]
pub mod keys;
#[cfg(feature = "rocksdb-backend")]
pub mod rocks;
#[cfg(feature = "rocksdb-backend")]
pub mod schema;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
#[cfg(feature = "rocksdb-backend")]
pub use rocks::RocksStore;

use coupon_core::{Coupon, CouponId, NewCoupon, Page, PageRequest};

/// The storage trait defining all coupon persistence operations.
///
/// This trait abstracts the storage layer, allowing for different
/// implementations (e.g., `RocksDB`, in-memory for testing).
pub trait Store: Send + Sync {
    /// Get a coupon by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn find_by_id(&self, id: CouponId) -> Result<Option<Coupon>>;

    /// Check whether a coupon has been issued for `email`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn exists_by_email(&self, email: &str) -> Result<bool>;

    /// Check whether `code` is already in use.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn exists_by_code(&self, code: &str) -> Result<bool>;

    /// Insert a coupon, assigning the next identifier.
    ///
    /// The uniqueness checks and the insert happen atomically.
    ///
    /// # Errors
    ///
    /// - `StoreError::EmailTaken` if a coupon exists for the email.
    /// - `StoreError::CodeTaken` if a coupon exists with the code.
    /// - `StoreError::Database` if the database operation fails.
    fn save(&self, coupon: NewCoupon) -> Result<Coupon>;

    /// List one page of coupons in the requested order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn find_page(&self, request: &PageRequest) -> Result<Page<Coupon>>;
}

impl<S: Store + ?Sized> Store for std::sync::Arc<S> {
    fn find_by_id(&self, id: CouponId) -> Result<Option<Coupon>> {
        (**self).find_by_id(id)
    }

    fn exists_by_email(&self, email: &str) -> Result<bool> {
        (**self).exists_by_email(email)
    }

    fn exists_by_code(&self, code: &str) -> Result<bool> {
        (**self).exists_by_code(code)
    }

    fn save(&self, coupon: NewCoupon) -> Result<Coupon> {
        (**self).save(coupon)
    }

    fn find_page(&self, request: &PageRequest) -> Result<Page<Coupon>> {
        (**self).find_page(request)
    }
}
