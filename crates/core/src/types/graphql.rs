//! GraphQL request envelope.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A GraphQL request as sent to the Shopify Admin API.
///
/// The same shape is accepted from callers of `POST /draft-order` and
/// forwarded verbatim. `variables` is opaque: it is never inspected, and it is
/// left out of the serialized body entirely when the caller did not send it.
/// An explicit `"variables": null` is kept and forwarded as `null`.
///
/// ## Examples
///
/// ```
/// use draft_order_proxy_core::GraphQLRequest;
/// use serde_json::json;
///
/// let request = GraphQLRequest::new("{ shop { name } }");
/// assert_eq!(
///     serde_json::to_value(&request).unwrap(),
///     json!({ "query": "{ shop { name } }" })
/// );
///
/// let request = request.with_variables(json!({ "first": 5 }));
/// assert_eq!(request.variables, Some(json!({ "first": 5 })));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphQLRequest {
    /// GraphQL document text.
    pub query: String,
    /// Variables for the document, if any.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub variables: Option<Value>,
}

/// Wrap any present value, `null` included, so it survives re-serialization.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl GraphQLRequest {
    /// Create a request with no variables.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: None,
        }
    }

    /// Attach variables to the request.
    #[must_use]
    pub fn with_variables(mut self, variables: Value) -> Self {
        self.variables = Some(variables);
        self
    }
}
