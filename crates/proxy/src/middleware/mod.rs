//! HTTP middleware stack for the proxy.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, outermost)
//! 2. `TraceLayer` (request tracing with status and latency)
//! 3. CORS (configured policy, answers preflight requests)

pub mod cors;

pub use cors::cors_layer;
