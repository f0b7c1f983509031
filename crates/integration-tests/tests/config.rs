//! Startup configuration checks against a live mock endpoint.

#![allow(clippy::unwrap_used)]

use draft_order_proxy::config::{ConfigError, CorsConfig, DeployMode};
use draft_order_proxy_integration_tests::{GRAPHQL_PATH, config_for};
use wiremock::MockServer;

#[tokio::test]
async fn test_defaults() {
    let shopify = MockServer::start().await;

    let config = config_for(&shopify, &[]).unwrap();

    assert_eq!(config.port, 3001);
    assert_eq!(config.deploy_mode, DeployMode::Standalone);
    assert_eq!(config.cors, CorsConfig::Permissive);
    assert_eq!(config.shopify.timeout.as_secs(), 30);
    assert!(config.shopify.admin_url.path().ends_with(GRAPHQL_PATH));
}

#[tokio::test]
async fn test_placeholder_token_is_rejected() {
    let shopify = MockServer::start().await;

    let err = config_for(
        &shopify,
        &[("SHOPIFY_ADMIN_ACCESS_TOKEN", "your-access-token-here")],
    )
    .unwrap_err();

    assert!(matches!(err, ConfigError::InsecureSecret(..)));
}

#[tokio::test]
async fn test_debug_output_redacts_token() {
    let shopify = MockServer::start().await;

    let config = config_for(&shopify, &[]).unwrap();
    let debug = format!("{config:?}");

    assert!(debug.contains("[REDACTED]"));
    assert!(!debug.contains("shpat_"));
}
