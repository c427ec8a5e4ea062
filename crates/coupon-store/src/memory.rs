//! In-memory storage implementation.

use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use coupon_core::{Coupon, CouponId, NewCoupon, Page, PageRequest};

use crate::error::{Result, StoreError};
use crate::Store;

/// Process-local store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    coupons: BTreeMap<CouponId, Coupon>,
    by_email: HashMap<String, CouponId>,
    by_code: HashMap<String, CouponId>,
    last_id: CouponId,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|_| StoreError::Database("memory store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|_| StoreError::Database("memory store lock poisoned".into()))
    }
}

impl Store for MemoryStore {
    fn find_by_id(&self, id: CouponId) -> Result<Option<Coupon>> {
        Ok(self.read()?.coupons.get(&id).cloned())
    }

    fn exists_by_email(&self, email: &str) -> Result<bool> {
        Ok(self.read()?.by_email.contains_key(email))
    }

    fn exists_by_code(&self, code: &str) -> Result<bool> {
        Ok(self.read()?.by_code.contains_key(code))
    }

    fn save(&self, coupon: NewCoupon) -> Result<Coupon> {
        let mut inner = self.write()?;

        if inner.by_email.contains_key(&coupon.email) {
            return Err(StoreError::EmailTaken {
                email: coupon.email,
            });
        }
        if inner.by_code.contains_key(&coupon.code) {
            return Err(StoreError::CodeTaken { code: coupon.code });
        }

        let id = inner.last_id.next();
        inner.last_id = id;
        inner.by_email.insert(coupon.email.clone(), id);
        inner.by_code.insert(coupon.code.clone(), id);

        let coupon = coupon.with_id(id);
        inner.coupons.insert(id, coupon.clone());

        tracing::debug!(coupon_id = %id, "Coupon stored in memory");

        Ok(coupon)
    }

    fn find_page(&self, request: &PageRequest) -> Result<Page<Coupon>> {
        let inner = self.read()?;

        if request.sort.is_newest_first() {
            let content = inner
                .coupons
                .values()
                .rev()
                .skip(request.offset())
                .take(request.limit())
                .cloned()
                .collect();
            return Ok(Page::new(content, request, inner.coupons.len() as u64));
        }

        let mut all: Vec<Coupon> = inner.coupons.values().cloned().collect();
        all.sort_by(|a, b| request.sort.compare(a, b));
        Ok(Page::from_sorted(all, request))
    }
}
