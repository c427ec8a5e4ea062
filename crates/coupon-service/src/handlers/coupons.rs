//! Coupon handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use coupon_core::{Coupon, Page};

use crate::error::ApiError;
use crate::extract::{CouponIdPath, JsonBody, Paging};
use crate::state::AppState;
use crate::validation::validate_email;

/// Create coupon request.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateCouponRequest {
    /// Address to issue the coupon for. Missing and blank are both `empty.email`.
    pub email: Option<String>,
}

/// Get a coupon by identifier.
pub async fn get_coupon(
    State(state): State<Arc<AppState>>,
    CouponIdPath(id): CouponIdPath,
) -> Result<Json<Coupon>, ApiError> {
    let coupon = state.issuer.get(id)?;
    Ok(Json(coupon))
}

/// List coupons, one page at a time.
pub async fn list_coupons(
    State(state): State<Arc<AppState>>,
    Paging(request): Paging,
) -> Result<Json<Page<Coupon>>, ApiError> {
    let page = state.issuer.list(&request)?;

    tracing::debug!(
        page = request.page,
        size = request.size,
        returned = page.number_of_elements,
        total = page.total_elements,
        "Listed coupons"
    );

    Ok(Json(page))
}

/// Issue a coupon for an email address.
pub async fn create_coupon(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<CreateCouponRequest>,
) -> Result<(StatusCode, Json<Coupon>), ApiError> {
    let email = body.email.as_deref();

    if let Some(email) = email {
        validate_email(email)?;
    }

    let coupon = state.issuer.create(email)?;
    Ok((StatusCode::CREATED, Json(coupon)))
}
