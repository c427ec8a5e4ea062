//! API error types and responses.
//!
//! Every error is rendered as
//! `{"url": ..., "message": ..., "errorCode": ...}`. The request URL is not
//! known where the error is raised, so [`ApiError`] leaves it blank and the
//! [`attach_request_url`] middleware fills it in on the way out.

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use coupon_core::CouponError;

/// Error code for a missing or unreadable request body.
pub const NULL_BODY: &str = "null.body";
/// Error code for a path parameter of the wrong type.
pub const ARG_TYPE_MISMATCH: &str = "argument.type.mismatch";
/// Error code for a request body that is not JSON.
pub const NOT_JSON_MEDIA_TYPE: &str = "not.json";
/// Error code for unusable paging parameters.
pub const INVALID_PAGINATION: &str = "invalid.pagination";

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The issuance engine rejected the request.
    #[error(transparent)]
    Coupon(#[from] CouponError),

    /// The request body is missing or is not valid JSON for the endpoint.
    #[error("Required request body is null")]
    NullBody,

    /// A path parameter could not be parsed.
    #[error("Argument type mismatch")]
    ArgumentTypeMismatch,

    /// The request body was sent with a content type other than JSON.
    #[error("Only support Content type 'application/json'")]
    NotJson,

    /// Paging or sort parameters are invalid.
    #[error("Pagination param is invalid")]
    InvalidPagination,
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Coupon(CouponError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Coupon(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            Self::Coupon(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotJson => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::NullBody | Self::ArgumentTypeMismatch | Self::InvalidPagination => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Coupon(e) => e.code(),
            Self::NullBody => NULL_BODY,
            Self::ArgumentTypeMismatch => ARG_TYPE_MISMATCH,
            Self::NotJson => NOT_JSON_MEDIA_TYPE,
            Self::InvalidPagination => INVALID_PAGINATION,
        }
    }
}

/// JSON error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorInfo {
    /// The request URL that failed.
    pub url: String,
    /// Human-readable message.
    pub message: String,
    /// Stable machine-readable code.
    pub error_code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self {
            Self::Coupon(CouponError::Storage(msg)) => {
                tracing::error!(error = %msg, "Storage failure");
                "An internal error occurred".to_string()
            }
            Self::Coupon(e) if status.is_server_error() => {
                tracing::error!(error = %e, code = e.code(), "Coupon issuance failed");
                e.to_string()
            }
            other => {
                tracing::info!(error = %other, code = other.code(), "Request rejected");
                other.to_string()
            }
        };

        let info = ErrorInfo {
            url: String::new(),
            message,
            error_code: self.code().to_string(),
        };

        let mut response = (status, Json(info.clone())).into_response();
        response.extensions_mut().insert(info);
        response
    }
}

/// Middleware that stamps the request path and query into error responses.
pub async fn attach_request_url(request: Request, next: Next) -> Response {
    let url = request
        .uri()
        .path_and_query()
        .map_or_else(|| request.uri().path().to_string(), ToString::to_string);
    let mut response = next.run(request).await;

    match response.extensions_mut().remove::<ErrorInfo>() {
        Some(info) => {
            let status = response.status();
            (status, Json(ErrorInfo { url, ..info })).into_response()
        }
        None => response,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coupon_core::CouponId;

    #[test]
    fn status_mapping() {
        let cases = [
            (
                ApiError::from(CouponError::NotFound {
                    id: CouponId::new(1),
                }),
                StatusCode::NOT_FOUND,
                "not.exist.coupon",
            ),
            (ApiError::from(CouponError::EmptyEmail), StatusCode::BAD_REQUEST, "empty.email"),
            (ApiError::from(CouponError::InvalidEmail), StatusCode::BAD_REQUEST, "invalid.email"),
            (
                ApiError::from(CouponError::DuplicateEmail),
                StatusCode::BAD_REQUEST,
                "duplicate.email",
            ),
            (
                ApiError::from(CouponError::EmptyCode),
                StatusCode::INTERNAL_SERVER_ERROR,
                "empty.code",
            ),
            (
                ApiError::from(CouponError::CodeCollision),
                StatusCode::INTERNAL_SERVER_ERROR,
                "code.collision",
            ),
            (
                ApiError::from(CouponError::Storage("io".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal.error",
            ),
            (ApiError::NullBody, StatusCode::BAD_REQUEST, NULL_BODY),
            (ApiError::ArgumentTypeMismatch, StatusCode::BAD_REQUEST, ARG_TYPE_MISMATCH),
            (ApiError::NotJson, StatusCode::UNSUPPORTED_MEDIA_TYPE, NOT_JSON_MEDIA_TYPE),
            (ApiError::InvalidPagination, StatusCode::BAD_REQUEST, INVALID_PAGINATION),
        ];

        for (error, status, code) in cases {
            assert_eq!(error.status(), status, "{error:?}");
            assert_eq!(error.code(), code, "{error:?}");
        }
    }

    #[test]
    fn response_carries_error_info() {
        let response = ApiError::from(CouponError::DuplicateEmail).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let info = response.extensions().get::<ErrorInfo>().unwrap();
        assert_eq!(info.error_code, "duplicate.email");
        assert_eq!(
            info.message,
            "Fail to create Coupon. Already coupon issued for this mail."
        );
    }

    #[test]
    fn storage_details_are_not_leaked() {
        let response = ApiError::from(CouponError::Storage("secret path".into())).into_response();
        let info = response.extensions().get::<ErrorInfo>().unwrap();
        assert_eq!(info.message, "An internal error occurred");
    }
}
