//! Draft order handlers.

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
};
use draft_order_proxy_core::{EmailFilter, GraphQLRequest};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use crate::{
    error::AppError,
    shopify::{AdminGateway, draft_orders},
    state::AppState,
};

/// Query parameters for `GET /get-draft-orders`.
#[derive(Debug, Default, Deserialize)]
pub struct DraftOrdersQuery {
    /// Customer email to match, case-insensitively.
    pub email: Option<String>,
}

/// Response body for `GET /get-draft-orders`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftOrdersResponse {
    /// Matching draft order edges, `node` wrappers intact.
    pub draft_orders: Vec<Value>,
}

/// Create a draft order by forwarding the caller's GraphQL request.
///
/// The upstream body is returned verbatim, including any GraphQL `errors`.
#[instrument(skip_all)]
pub async fn create<G: AdminGateway>(
    State(state): State<AppState<G>>,
    payload: Result<Json<GraphQLRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let body = draft_orders::create_draft_order(state.gateway(), &request)
        .await
        .map_err(AppError::DraftOrder)?;

    Ok(Json(body))
}

/// List the first page of draft orders matching `?email=`.
#[instrument(skip_all, fields(has_email = query.email.is_some()))]
pub async fn list<G: AdminGateway>(
    State(state): State<AppState<G>>,
    Query(query): Query<DraftOrdersQuery>,
) -> Result<Json<DraftOrdersResponse>, AppError> {
    let filter = EmailFilter::new(query.email.as_deref());

    let draft_orders = draft_orders::list_draft_orders(state.gateway(), &filter)
        .await
        .map_err(AppError::ListDraftOrders)?;

    Ok(Json(DraftOrdersResponse { draft_orders }))
}
