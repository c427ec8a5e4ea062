//! `RocksDB` storage implementation.
//!
//! This module provides the `RocksStore` implementation of the `Store` trait.

use std::path::Path;
use std::sync::{Arc, Mutex};

use rocksdb::{
    BoundColumnFamily, ColumnFamilyDescriptor, DBWithThreadMode, IteratorMode, MultiThreaded,
    Options, WriteBatch,
};

use coupon_core::{Coupon, CouponId, NewCoupon, Page, PageRequest};

use crate::error::{Result, StoreError};
use crate::keys;
use crate::schema::{all_column_families, cf};
use crate::Store;

/// RocksDB-backed storage implementation.
pub struct RocksStore {
    db: Arc<DBWithThreadMode<MultiThreaded>>,
    /// Serializes `save` so index checks and the batch write are atomic.
    write_lock: Mutex<()>,
}

impl RocksStore {
    /// Open or create a `RocksDB` database at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_descriptors: Vec<_> = all_column_families()
            .into_iter()
            .map(|name| ColumnFamilyDescriptor::new(name, Options::default()))
            .collect();

        let db = DBWithThreadMode::open_cf_descriptors(&opts, path, cf_descriptors)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(Self {
            db: Arc::new(db),
            write_lock: Mutex::new(()),
        })
    }

    /// Get a column family handle.
    fn cf(&self, name: &str) -> Result<Arc<BoundColumnFamily<'_>>> {
        self.db
            .cf_handle(name)
            .ok_or_else(|| StoreError::Database(format!("column family not found: {name}")))
    }

    /// Serialize a value using CBOR.
    fn serialize<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        ciborium::into_writer(value, &mut buf)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(buf)
    }

    /// Deserialize a value from CBOR.
    fn deserialize<T: serde::de::DeserializeOwned>(data: &[u8]) -> Result<T> {
        ciborium::from_reader(data).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    fn contains(&self, cf_name: &str, key: &[u8]) -> Result<bool> {
        let cf = self.cf(cf_name)?;
        let exists = self
            .db
            .get_cf(&cf, key)
            .map_err(|e| StoreError::Database(e.to_string()))?
            .is_some();
        Ok(exists)
    }

    fn read_counter(&self, key: &[u8]) -> Result<u64> {
        let cf = self.cf(cf::META)?;
        let value = self
            .db
            .get_cf(&cf, key)
            .map_err(|e| StoreError::Database(e.to_string()))?;
        Ok(keys::decode_counter(value.as_deref()))
    }

    /// Load every coupon in identifier order.
    fn all_coupons(&self) -> Result<Vec<Coupon>> {
        let cf = self.cf(cf::COUPONS)?;
        self.db
            .iterator_cf(&cf, IteratorMode::Start)
            .map(|item| {
                let (_, value) = item.map_err(|e| StoreError::Database(e.to_string()))?;
                Self::deserialize(&value)
            })
            .collect()
    }

    /// Newest-first page straight off a reverse scan of the primary column family.
    fn newest_first(&self, request: &PageRequest) -> Result<Vec<Coupon>> {
        let cf = self.cf(cf::COUPONS)?;
        self.db
            .iterator_cf(&cf, IteratorMode::End)
            .skip(request.offset())
            .take(request.limit())
            .map(|item| {
                let (_, value) = item.map_err(|e| StoreError::Database(e.to_string()))?;
                Self::deserialize(&value)
            })
            .collect()
    }
}

impl Store for RocksStore {
    fn find_by_id(&self, id: CouponId) -> Result<Option<Coupon>> {
        let cf = self.cf(cf::COUPONS)?;
        let key = keys::coupon_key(id);

        self.db
            .get_cf(&cf, key)
            .map_err(|e| StoreError::Database(e.to_string()))?
            .map(|data| Self::deserialize(&data))
            .transpose()
    }

    fn exists_by_email(&self, email: &str) -> Result<bool> {
        self.contains(cf::COUPONS_BY_EMAIL, &keys::email_key(email))
    }

    fn exists_by_code(&self, code: &str) -> Result<bool> {
        self.contains(cf::COUPONS_BY_CODE, &keys::code_key(code))
    }

    fn save(&self, coupon: NewCoupon) -> Result<Coupon> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StoreError::Database("write lock poisoned".into()))?;

        let email_key = keys::email_key(&coupon.email);
        let code_key = keys::code_key(&coupon.code);

        if self.contains(cf::COUPONS_BY_EMAIL, &email_key)? {
            return Err(StoreError::EmailTaken {
                email: coupon.email,
            });
        }
        if self.contains(cf::COUPONS_BY_CODE, &code_key)? {
            return Err(StoreError::CodeTaken { code: coupon.code });
        }

        let id = CouponId::new(self.read_counter(keys::LAST_ID_KEY)?).next();
        let count = self.read_counter(keys::COUNT_KEY)? + 1;
        let coupon = coupon.with_id(id);

        let cf_coupons = self.cf(cf::COUPONS)?;
        let cf_by_email = self.cf(cf::COUPONS_BY_EMAIL)?;
        let cf_by_code = self.cf(cf::COUPONS_BY_CODE)?;
        let cf_meta = self.cf(cf::META)?;

        let id_key = keys::coupon_key(id);
        let value = Self::serialize(&coupon)?;

        // Write atomically
        let mut batch = WriteBatch::default();
        batch.put_cf(&cf_coupons, &id_key, &value);
        batch.put_cf(&cf_by_email, &email_key, &id_key);
        batch.put_cf(&cf_by_code, &code_key, &id_key);
        batch.put_cf(&cf_meta, keys::LAST_ID_KEY, keys::encode_counter(id.get()));
        batch.put_cf(&cf_meta, keys::COUNT_KEY, keys::encode_counter(count));

        self.db
            .write(batch)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        tracing::debug!(coupon_id = %id, "Coupon written to RocksDB");

        Ok(coupon)
    }

    fn find_page(&self, request: &PageRequest) -> Result<Page<Coupon>> {
        if request.sort.is_newest_first() {
            let total = self.read_counter(keys::COUNT_KEY)?;
            let content = self.newest_first(request)?;
            return Ok(Page::new(content, request, total));
        }

        let mut all = self.all_coupons()?;
        all.sort_by(|a, b| request.sort.compare(a, b));
        Ok(Page::from_sorted(all, request))
    }
}
