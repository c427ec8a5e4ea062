//! Paging parameter parsing.
//!
//! Query parameters:
//!
//! - `page`: zero-based page index (default 0)
//! - `size`: page size (default 20, clamped to `1..=2000`)
//! - `sort`: `property[,direction]`, property one of `id`, `email`, `code`,
//!   direction `asc` (default) or `desc`
//!
//! Without `sort`, coupons are listed newest first.

use serde::Deserialize;

use coupon_core::{Direction, PageRequest, Sort, SortField, DEFAULT_PAGE_SIZE};

use crate::error::ApiError;

/// Raw paging query parameters.
///
/// Values are kept as strings so that malformed numbers are reported as
/// `invalid.pagination` instead of a generic query rejection.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    /// Page index.
    pub page: Option<String>,
    /// Page size.
    pub size: Option<String>,
    /// Sort expression.
    pub sort: Option<String>,
}

impl PageParams {
    /// Convert the raw parameters into a page request.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidPagination` if a number does not parse or
    /// the sort expression names an unknown property or direction.
    pub fn into_page_request(self) -> Result<PageRequest, ApiError> {
        let page = parse_number(self.page.as_deref(), 0)?;
        let size = parse_number(self.size.as_deref(), DEFAULT_PAGE_SIZE)?;

        let request = PageRequest::new(page, size);
        match self.sort.as_deref().map(str::trim) {
            None | Some("") => Ok(request),
            Some(expr) => Ok(request.with_sort(parse_sort(expr)?)),
        }
    }
}

fn parse_number(value: Option<&str>, default: u32) -> Result<u32, ApiError> {
    match value.map(str::trim) {
        None | Some("") => Ok(default),
        Some(v) => v.parse().map_err(|_| ApiError::InvalidPagination),
    }
}

fn parse_sort(expr: &str) -> Result<Sort, ApiError> {
    let mut parts = expr.split(',').map(str::trim);

    let field = match parts.next().map(str::to_ascii_lowercase).as_deref() {
        Some("id") => SortField::Id,
        Some("email") => SortField::Email,
        Some("code") => SortField::Code,
        _ => return Err(ApiError::InvalidPagination),
    };

    let direction = match parts.next().map(str::to_ascii_lowercase).as_deref() {
        None | Some("asc") => Direction::Asc,
        Some("desc") => Direction::Desc,
        Some(_) => return Err(ApiError::InvalidPagination),
    };

    if parts.next().is_some() {
        return Err(ApiError::InvalidPagination);
    }

    Ok(Sort::new(field, direction))
}
