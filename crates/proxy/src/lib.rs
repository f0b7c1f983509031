//! Draft Order Proxy library.
//!
//! This crate provides the proxy as a library, allowing it to be tested and
//! mounted by hosting platforms that invoke a handler per request.
//!
//! # Security
//!
//! This crate holds HIGH PRIVILEGE access to the Shopify Admin API through
//! the configured access token. Callers are not authenticated; restrict who
//! can reach it with the CORS allow-list and network placement.
//!
//! # Entry Points
//!
//! - [`app`] - the full router with CORS, tracing and Sentry layers
//! - [`handle`] - serve a single request, for platforms that own the listener

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod shopify;
pub mod state;

use axum::{Router, body::Body, extract::Request, response::Response};
use tower::ServiceExt;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use shopify::AdminGateway;
use state::AppState;

/// Build the application router with all middleware applied.
pub fn app<G: AdminGateway>(state: AppState<G>) -> Router {
    let cors = middleware::cors_layer(&state.config().cors);

    routes::routes::<G>()
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // Path only: query strings carry customer emails
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record("latency_ms", latency.as_millis() as u64);
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

/// Serve one request through the router.
///
/// Used in hosted deployments, where the platform accepts the connection and
/// hands each request over instead of the proxy binding a listener.
pub async fn handle(router: Router, request: Request<Body>) -> Response {
    match router.oneshot(request).await {
        Ok(response) => response,
        Err(infallible) => match infallible {},
    }
}

/// Install the process-wide rustls crypto provider.
///
/// Several providers are compiled in through the HTTP client stack, so rustls
/// cannot pick one on its own. Safe to call more than once.
pub fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}
