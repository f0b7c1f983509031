//! Unified error handling for the proxy.
//!
//! Every failure is rendered as a JSON body with a fixed `error` label and
//! either a `details` message or, for malformed listing responses, the `raw`
//! upstream body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use thiserror::Error;

use crate::shopify::ShopifyError;

/// Label for failed draft order creation.
pub const DRAFT_ORDER_FAILED: &str = "Shopify draft order failed";
/// Label for transport failures while listing draft orders.
pub const FETCH_DRAFT_ORDERS_FAILED: &str = "Failed to fetch draft orders";
/// Label for listing responses without `data.draftOrders.edges`.
pub const INVALID_SHOPIFY_RESPONSE: &str = "Invalid response from Shopify";
/// Label for inbound bodies that cannot be forwarded.
pub const INVALID_DRAFT_ORDER_REQUEST: &str = "Invalid draft order request";

/// Application-level error type for the proxy.
#[derive(Debug, Error)]
pub enum AppError {
    /// Draft order creation failed upstream.
    #[error("Shopify draft order failed: {0}")]
    DraftOrder(#[source] ShopifyError),

    /// Draft order listing failed upstream.
    #[error("Draft order listing failed: {0}")]
    ListDraftOrders(#[source] ShopifyError),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::DraftOrder(_) | Self::ListDraftOrders(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn body(self) -> Value {
        match self {
            Self::DraftOrder(err) => json!({
                "error": DRAFT_ORDER_FAILED,
                "details": err.to_string(),
            }),
            Self::ListDraftOrders(ShopifyError::InvalidResponse { raw }) => json!({
                "error": INVALID_SHOPIFY_RESPONSE,
                "raw": raw,
            }),
            Self::ListDraftOrders(err) => json!({
                "error": FETCH_DRAFT_ORDERS_FAILED,
                "details": err.to_string(),
            }),
            Self::BadRequest(details) => json!({
                "error": INVALID_DRAFT_ORDER_REQUEST,
                "details": details,
            }),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log server errors with Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Proxy request error"
            );
        } else {
            tracing::debug!(error = %self, "Rejected request");
        }

        (status, Json(self.body())).into_response()
    }
}
