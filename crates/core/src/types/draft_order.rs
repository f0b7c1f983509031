//! Draft order connection helpers.
//!
//! Shopify returns draft orders as a GraphQL connection:
//!
//! ```text
//! { "data": { "draftOrders": { "edges": [ { "node": { "email": ... } } ] } } }
//! ```
//!
//! Nodes are treated as opaque JSON. Only `node.email` is ever read.

use serde_json::Value;

/// Extract `data.draftOrders.edges` from an upstream response body.
///
/// Returns `None` when any segment of the path is missing or when `edges` is
/// not an array. An empty array is `Some(&[])`, which is a valid (empty)
/// result and distinct from a malformed response.
///
/// ## Examples
///
/// ```
/// use draft_order_proxy_core::draft_order_edges;
/// use serde_json::json;
///
/// let body = json!({ "data": { "draftOrders": { "edges": [] } } });
/// assert_eq!(draft_order_edges(&body).map(<[_]>::len), Some(0));
///
/// let body = json!({ "errors": [{ "message": "Throttled" }] });
/// assert!(draft_order_edges(&body).is_none());
/// ```
#[must_use]
pub fn draft_order_edges(body: &Value) -> Option<&[Value]> {
    body.pointer("/data/draftOrders/edges")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
}

/// Case-insensitive email filter over draft order edges.
///
/// An empty or absent email matches every edge. Otherwise an edge matches
/// when its `node.email` is a string equal to the requested email ignoring
/// case; nodes without an email never match. The requested email is not
/// trimmed, so surrounding whitespace has to match too.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmailFilter(Option<String>);

impl EmailFilter {
    /// Build a filter from the optional `email` query parameter.
    #[must_use]
    pub fn new(email: Option<&str>) -> Self {
        Self(
            email
                .filter(|e| !e.is_empty())
                .map(str::to_lowercase),
        )
    }

    /// Returns `true` if this filter lets every edge through.
    #[must_use]
    pub const fn is_match_all(&self) -> bool {
        self.0.is_none()
    }

    /// Returns `true` if the candidate email matches.
    #[must_use]
    pub fn matches_email(&self, candidate: Option<&str>) -> bool {
        match (&self.0, candidate) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(wanted), Some(candidate)) => candidate.to_lowercase() == *wanted,
        }
    }

    /// Returns `true` if the edge's `node.email` matches.
    #[must_use]
    pub fn matches_edge(&self, edge: &Value) -> bool {
        self.matches_email(edge.pointer("/node/email").and_then(Value::as_str))
    }

    /// Keep the matching edges, preserving upstream order.
    #[must_use]
    pub fn apply(&self, edges: &[Value]) -> Vec<Value> {
        edges
            .iter()
            .filter(|edge| self.matches_edge(edge))
            .cloned()
            .collect()
    }
}
