//! Draft order operations.
//!
//! Both operations make exactly one gateway call. Creation is a pure
//! pass-through; listing fetches the first page and filters it by email.

use draft_order_proxy_core::{EmailFilter, GraphQLRequest, draft_order_edges};
use serde_json::Value;
use tracing::instrument;

use super::{AdminGateway, DRAFT_ORDERS_QUERY, ShopifyError};

/// Forward a caller-supplied GraphQL request and return the upstream body.
///
/// # Errors
///
/// Returns any transport failure reported by the gateway.
#[instrument(skip_all)]
pub async fn create_draft_order<G: AdminGateway>(
    gateway: &G,
    request: &GraphQLRequest,
) -> Result<Value, ShopifyError> {
    let body = gateway.post_graphql(request).await?;

    if body.get("errors").is_some() {
        tracing::debug!("Shopify returned GraphQL errors for draft order mutation");
    }

    Ok(body)
}

/// Fetch the first page of draft orders and keep the edges matching `filter`.
///
/// Edges are returned with their `node` wrapper intact and in upstream order.
///
/// # Errors
///
/// Returns `ShopifyError::InvalidResponse` carrying the full body when
/// `data.draftOrders.edges` is missing, or any transport failure reported by
/// the gateway.
#[instrument(skip_all, fields(match_all = filter.is_match_all()))]
pub async fn list_draft_orders<G: AdminGateway>(
    gateway: &G,
    filter: &EmailFilter,
) -> Result<Vec<Value>, ShopifyError> {
    let body = gateway
        .post_graphql(&GraphQLRequest::new(DRAFT_ORDERS_QUERY))
        .await?;

    match draft_order_edges(&body) {
        Some(edges) => {
            let matched = filter.apply(edges);
            tracing::debug!(
                fetched = edges.len(),
                matched = matched.len(),
                "Filtered draft orders by email"
            );
            Ok(matched)
        }
        None => {
            tracing::warn!("Shopify response missing data.draftOrders.edges");
            Err(ShopifyError::InvalidResponse { raw: body })
        }
    }
}
