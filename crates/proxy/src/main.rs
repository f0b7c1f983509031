//! Draft Order Proxy - Shopify Admin API draft order gateway.
//!
//! This binary serves the proxy on port 3001 by default.
//!
//! # Security
//!
//! - Contains HIGH PRIVILEGE Shopify Admin API token
//! - Does not authenticate callers; restrict access with
//!   `CORS_ALLOWED_ORIGINS` and network placement
//!
//! # Architecture
//!
//! - Axum web framework
//! - Shopify Admin GraphQL API via `reqwest`
//! - Sentry error tracking (optional)
//!
//! # Deployment
//!
//! With `DEPLOY_MODE=hosted` the hosting platform owns the listener and
//! drives `draft_order_proxy::app` per request, so this binary refuses to
//! bind.

#![cfg_attr(not(test), forbid(unsafe_code))]

use draft_order_proxy::config::{DeployMode, LogFormat, ProxyConfig};
use draft_order_proxy::state::AppState;
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &ProxyConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            sample_rate: config.sentry_sample_rate,
            traces_sample_rate: config.sentry_traces_sample_rate,
            attach_stacktrace: true,
            // Request bodies carry customer emails
            send_default_pii: false,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (must be done before any TLS operations)
    draft_order_proxy::install_crypto_provider();

    // Load configuration from environment (needed for Sentry init)
    let config = ProxyConfig::from_env().expect("Failed to load configuration");

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    // Initialize tracing with EnvFilter and Sentry integration
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "draft_order_proxy=info,tower_http=debug".into());

    let is_json = config.log_format == LogFormat::Json;
    let json_layer = is_json.then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!is_json).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    if config.deploy_mode == DeployMode::Hosted {
        tracing::error!(
            "DEPLOY_MODE=hosted: requests are served by the hosting platform through \
             draft_order_proxy::app, not by this binary"
        );
        std::process::exit(2);
    }

    tracing::info!(
        endpoint = %config.shopify.admin_url,
        timeout_secs = config.shopify.timeout.as_secs(),
        cors = ?config.cors,
        "Configuration loaded"
    );

    // Build application state (includes the Shopify Admin client)
    let addr = config.socket_addr();
    let state = AppState::new(config).expect("Failed to create application state");

    let app = draft_order_proxy::app(state);

    tracing::info!("draft order proxy listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
