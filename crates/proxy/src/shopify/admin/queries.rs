//! GraphQL documents sent to the Shopify Admin API.
//!
//! Draft order creation forwards the caller's own document, so only the
//! listing query lives here.

/// First 50 draft orders with totals and up to 10 line items each.
pub const DRAFT_ORDERS_QUERY: &str = include_str!("../../../graphql/admin/draft_orders.graphql");
