//! Coupon service HTTP client implementation.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;

use coupon_core::{Coupon, CouponId, Page};

use crate::error::{ClientError, ErrorBody};

/// Coupon API client.
#[derive(Debug, Clone)]
pub struct CouponClient {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct CreateCouponRequest<'a> {
    email: &'a str,
}

impl CouponClient {
    /// Create a new coupon client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the coupon service (e.g., `"http://coupon-service:8080"`)
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_options(base_url, ClientOptions::default())
    }

    /// Create a new coupon client with custom options.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_options(
        base_url: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Get a coupon by identifier.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotFound` if the coupon does not exist, or
    /// another error if the request fails.
    pub async fn get_coupon(&self, id: CouponId) -> Result<Coupon, ClientError> {
        let url = format!("{}/api/v1/coupon/{id}", self.base_url);

        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// List one page of coupons, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_coupons(&self, page: u32, size: u32) -> Result<Page<Coupon>, ClientError> {
        let url = format!("{}/api/v1/coupon", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("page", page), ("size", size)])
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Issue a coupon for `email`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::DuplicateEmail` if a coupon was already issued
    /// for the address, or another error if the request fails.
    pub async fn create_coupon(&self, email: &str) -> Result<Coupon, ClientError> {
        let url = format!("{}/api/v1/coupon", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&CreateCouponRequest { email })
            .send()
            .await?;

        let coupon: Coupon = self.handle_response(response).await?;
        tracing::debug!(coupon_id = %coupon.id, "Coupon issued");
        Ok(coupon)
    }

    /// Handle API response and convert errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            return Ok(serde_json::from_slice(&bytes)?);
        }

        match serde_json::from_slice::<ErrorBody>(&bytes) {
            Ok(body) => {
                tracing::debug!(
                    status = status.as_u16(),
                    code = %body.error_code,
                    url = %body.url,
                    "Coupon service returned an error"
                );
                match body.error_code.as_str() {
                    "not.exist.coupon" => Err(ClientError::NotFound {
                        message: body.message,
                    }),
                    "duplicate.email" => Err(ClientError::DuplicateEmail),
                    _ => Err(ClientError::Api {
                        code: body.error_code,
                        message: body.message,
                        status: status.as_u16(),
                    }),
                }
            }
            Err(_) => Err(ClientError::Api {
                code: "unknown".to_string(),
                message: format!("HTTP {status}"),
                status: status.as_u16(),
            }),
        }
    }
}

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
        }
    }
}

impl ClientOptions {
    /// Create options with a request timeout.
    #[must_use]
    pub fn with_timeout(seconds: u64) -> Self {
        Self {
            timeout_seconds: seconds,
        }
    }
}
