//! Request extractors with coupon API error mapping.
//!
//! Wrappers over axum's `Json`, `Path` and `Query` whose rejections render as
//! the API's error envelope instead of axum's plain-text defaults.

use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use coupon_core::{CouponId, PageRequest};

use crate::error::ApiError;
use crate::pagination::PageParams;

/// JSON request body.
///
/// A missing JSON content type is `not.json`; an empty or unparseable body
/// is `null.body`.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(JsonRejection::MissingJsonContentType(_)) => Err(ApiError::NotJson),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Unreadable request body");
                Err(ApiError::NullBody)
            }
        }
    }
}

/// Coupon identifier taken from the request path.
#[derive(Debug, Clone, Copy)]
pub struct CouponIdPath(pub CouponId);

#[async_trait]
impl<S> FromRequestParts<S> for CouponIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::ArgumentTypeMismatch)?;

        raw.parse()
            .map(Self)
            .map_err(|_| ApiError::ArgumentTypeMismatch)
    }
}

/// Paging parameters taken from the query string.
#[derive(Debug, Clone, Copy)]
pub struct Paging(pub PageRequest);

#[async_trait]
impl<S> FromRequestParts<S> for Paging
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InvalidPagination)?;

        params.into_page_request().map(Self)
    }
}
