//! HTTP route handlers for the proxy.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                    - Welcome message (liveness signal, no upstream call)
//! GET  /health              - Health check
//!
//! # Draft orders (Shopify Admin API)
//! POST /draft-order         - Forward a draft order GraphQL request
//! GET  /get-draft-orders    - First 50 draft orders, filtered by ?email=
//! ```

use axum::{
    Router,
    routing::{get, post},
};

use crate::{shopify::AdminGateway, state::AppState};

pub mod draft_orders;
pub mod home;

/// Build the route table for any gateway implementation.
pub fn routes<G: AdminGateway>() -> Router<AppState<G>> {
    Router::new()
        .route("/", get(home::index))
        .route("/health", get(home::health))
        .route("/draft-order", post(draft_orders::create::<G>))
        .route("/get-draft-orders", get(draft_orders::list::<G>))
}
