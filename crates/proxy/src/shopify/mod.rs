//! Shopify Admin API gateway (HIGH PRIVILEGE).
//!
//! # Security
//!
//! **This module holds the high-privilege Shopify Admin API access token.**
//!
//! Every outbound call carries the token in the `X-Shopify-Access-Token`
//! header. The token never appears in logs or `Debug` output.
//!
//! # Architecture
//!
//! - [`AdminGateway`] is the single seam for outbound calls: one GraphQL POST
//!   per inbound request, no retries
//! - [`AdminClient`] implements it over `reqwest` with an explicit timeout
//! - [`draft_orders`] builds the two draft order operations on top of any
//!   gateway, so handlers can be tested against a fake
//!
//! # Example
//!
//! ```rust,ignore
//! use draft_order_proxy::shopify::{AdminClient, draft_orders};
//! use draft_order_proxy_core::EmailFilter;
//!
//! let client = AdminClient::new(&config.shopify)?;
//!
//! // Forward a caller-supplied mutation
//! let body = draft_orders::create_draft_order(&client, &request).await?;
//!
//! // First page of draft orders for one customer
//! let edges = draft_orders::list_draft_orders(&client, &EmailFilter::new(Some("a@x.com"))).await?;
//! ```

use std::future::Future;
use std::time::Duration;

use draft_order_proxy_core::GraphQLRequest;
use serde_json::Value;
use thiserror::Error;

mod admin;
pub mod draft_orders;

pub use admin::AdminClient;
pub use admin::queries::DRAFT_ORDERS_QUERY;

/// Errors that can occur when calling the Shopify Admin API.
///
/// `Http`, `Timeout`, `Status` and `Parse` are transport failures: the call
/// could not produce a JSON body. `InvalidResponse` means the body parsed but
/// did not have the expected shape.
#[derive(Debug, Error)]
pub enum ShopifyError {
    /// HTTP request failed (DNS, connect, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request did not complete within the configured timeout.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Upstream answered with a non-2xx status.
    #[error("Request failed with status code {0}")]
    Status(u16),

    /// Access token cannot be sent as an HTTP header.
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// Response body was not valid JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Response body lacked `data.draftOrders.edges`.
    #[error("Invalid response from Shopify")]
    InvalidResponse {
        /// Full upstream body, kept for diagnostics.
        raw: Value,
    },
}

impl ShopifyError {
    /// Returns `true` for failures where no usable body was received.
    #[must_use]
    pub const fn is_transport_failure(&self) -> bool {
        !matches!(self, Self::InvalidResponse { .. })
    }
}

/// Outbound channel to the Shopify Admin GraphQL endpoint.
///
/// Implementations perform exactly one request per call and return the full
/// parsed body (`data` and `errors` alike) for any 2xx response.
pub trait AdminGateway: Clone + Send + Sync + 'static {
    /// POST a GraphQL request and return the parsed response body.
    fn post_graphql(
        &self,
        request: &GraphQLRequest,
    ) -> impl Future<Output = Result<Value, ShopifyError>> + Send;
}
