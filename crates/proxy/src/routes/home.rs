//! Root and liveness handlers.

use axum::Json;
use serde_json::{Value, json};

/// Greeting returned from `GET /`.
pub const WELCOME_MESSAGE: &str = "Welcome to Shopify Draft Order API!";

/// Root handler, so the bare path answers instead of 404.
pub async fn index() -> Json<Value> {
    Json(json!({ "message": WELCOME_MESSAGE }))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check Shopify.
pub async fn health() -> &'static str {
    "ok"
}
