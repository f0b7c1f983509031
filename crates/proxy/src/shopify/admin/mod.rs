//! Shopify Admin API GraphQL client.
//!
//! Sends raw GraphQL documents to the configured endpoint with the shop's
//! access token and returns the parsed JSON body untouched.

use std::sync::Arc;
use std::time::Duration;

use draft_order_proxy_core::GraphQLRequest;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use secrecy::ExposeSecret;
use serde_json::Value;
use tracing::instrument;
use url::Url;

use crate::config::ShopifyAdminConfig;

use super::{AdminGateway, ShopifyError};

pub mod queries;

const ACCESS_TOKEN_HEADER: HeaderName = HeaderName::from_static("x-shopify-access-token");

/// Shopify Admin API GraphQL client.
///
/// Cheap to clone; all clones share one connection pool.
///
/// # Security
///
/// The access token is attached to every request as a sensitive default
/// header, so it is never rendered by `reqwest`'s own debug output.
#[derive(Clone)]
pub struct AdminClient {
    inner: Arc<AdminClientInner>,
}

struct AdminClientInner {
    client: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
}

impl AdminClient {
    /// Create a new Admin API client.
    ///
    /// # Arguments
    ///
    /// * `config` - Shopify Admin API configuration
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError::InvalidHeader` if the access token cannot be
    /// sent as a header value, or `ShopifyError::Http` if the HTTP client
    /// cannot be built.
    pub fn new(config: &ShopifyAdminConfig) -> Result<Self, ShopifyError> {
        crate::install_crypto_provider();

        let mut token = HeaderValue::from_str(config.access_token.expose_secret())?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCESS_TOKEN_HEADER, token);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(AdminClientInner {
                client,
                endpoint: config.admin_url.clone(),
                timeout: config.timeout,
            }),
        })
    }

    /// Classify a `reqwest` failure, separating timeouts.
    fn transport_error(&self, err: reqwest::Error) -> ShopifyError {
        if err.is_timeout() {
            ShopifyError::Timeout(self.inner.timeout)
        } else {
            ShopifyError::Http(err)
        }
    }
}

impl AdminGateway for AdminClient {
    #[instrument(skip(self, request), fields(endpoint = %self.inner.endpoint))]
    async fn post_graphql(&self, request: &GraphQLRequest) -> Result<Value, ShopifyError> {
        let response = self
            .inner
            .client
            .post(self.inner.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                status = status.as_u16(),
                body_len = body.len(),
                "Shopify returned non-success status"
            );
            tracing::debug!(body = %body, "Shopify error body");
            return Err(ShopifyError::Status(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;

        Ok(serde_json::from_slice(&bytes)?)
    }
}
