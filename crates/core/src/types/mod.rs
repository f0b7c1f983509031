//! Core types for the draft order proxy.
//!
//! This module provides the request envelope sent upstream and helpers for
//! working with the draft order connection returned by Shopify.

pub mod draft_order;
pub mod graphql;

pub use draft_order::{EmailFilter, draft_order_edges};
pub use graphql::GraphQLRequest;
