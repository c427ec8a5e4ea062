//! Paged listing types.
//!
//! `PageRequest` is transport-neutral: page index, page size and sort order.
//! `Page` is the result envelope, serialized with camelCase keys
//! (`content`, `totalElements`, `numberOfElements`, ...).

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::coupon::Coupon;

/// Page size used when the caller does not name one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest page size a request may ask for.
pub const MAX_PAGE_SIZE: u32 = 2000;

/// Coupon property to sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// Sort by identifier (issue order).
    Id,
    /// Sort by email address.
    Email,
    /// Sort by coupon code.
    Code,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Smallest first.
    Asc,
    /// Largest first.
    Desc,
}

/// A sort order over coupons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    /// Property to sort by.
    pub field: SortField,
    /// Direction to sort in.
    pub direction: Direction,
}

impl Sort {
    /// Create a sort order.
    #[must_use]
    pub const fn new(field: SortField, direction: Direction) -> Self {
        Self { field, direction }
    }

    /// Whether this is the natural order (identifier descending).
    #[must_use]
    pub fn is_newest_first(&self) -> bool {
        *self == Self::default()
    }

    /// Compare two coupons under this order.
    ///
    /// Ties on email or code cannot happen for stored coupons, but the
    /// identifier is used as a tie-breaker so the order is total anyway.
    #[must_use]
    pub fn compare(&self, a: &Coupon, b: &Coupon) -> Ordering {
        let ordering = match self.field {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Email => a.email.cmp(&b.email).then(a.id.cmp(&b.id)),
            SortField::Code => a.code.cmp(&b.code).then(a.id.cmp(&b.id)),
        };
        match self.direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }
}

impl Default for Sort {
    fn default() -> Self {
        Self::new(SortField::Id, Direction::Desc)
    }
}

/// A request for one page of coupons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Zero-based page index.
    pub page: u32,
    /// Maximum number of items on the page.
    pub size: u32,
    /// Order of the full result set.
    pub sort: Sort,
}

impl PageRequest {
    /// Create a request in the default order (newest first).
    ///
    /// `size` is clamped to `1..=MAX_PAGE_SIZE`.
    #[must_use]
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size: size.clamp(1, MAX_PAGE_SIZE),
            sort: Sort::default(),
        }
    }

    /// Replace the sort order.
    #[must_use]
    pub const fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }

    /// Number of items preceding this page.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.page as usize * self.size as usize
    }

    /// Maximum number of items on this page.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.size as usize
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page.
    pub content: Vec<T>,
    /// Number of items across all pages.
    pub total_elements: u64,
    /// Number of pages.
    pub total_pages: u64,
    /// Zero-based index of this page.
    pub number: u32,
    /// Requested page size.
    pub size: u32,
    /// Number of items on this page.
    pub number_of_elements: usize,
    /// Whether this is the first page.
    pub first: bool,
    /// Whether this is the last page.
    pub last: bool,
    /// Whether this page has no items.
    pub empty: bool,
}

impl<T> Page<T> {
    /// Build a page from its content and the total item count.
    #[must_use]
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        let size = u64::from(request.size.max(1));
        let total_pages = total_elements.div_ceil(size);
        let number_of_elements = content.len();

        Self {
            empty: content.is_empty(),
            content,
            total_elements,
            total_pages,
            number: request.page,
            size: request.size,
            number_of_elements,
            first: request.page == 0,
            last: u64::from(request.page) + 1 >= total_pages,
        }
    }

    /// Cut one page out of an already-sorted full result set.
    #[must_use]
    pub fn from_sorted(items: Vec<T>, request: &PageRequest) -> Self {
        let total = items.len() as u64;
        let content = items
            .into_iter()
            .skip(request.offset())
            .take(request.limit())
            .collect();
        Self::new(content, request, total)
    }
}
