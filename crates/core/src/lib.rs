//! Draft Order Proxy Core - Shared types library.
//!
//! This crate provides the wire types used across the draft order proxy:
//! - `proxy` - HTTP service forwarding draft order requests to Shopify
//! - `integration-tests` - End-to-end tests against a fake upstream
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. This keeps it lightweight and lets the filtering rules be tested
//! without a network.
//!
//! # Modules
//!
//! - [`types`] - GraphQL request envelopes and draft order edge handling

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
