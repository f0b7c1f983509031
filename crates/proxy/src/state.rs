//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ProxyConfig;
use crate::shopify::{AdminClient, AdminGateway, ShopifyError};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Nothing in here is mutated after startup, so
/// concurrent requests never share mutable state.
#[derive(Clone)]
pub struct AppState<G = AdminClient> {
    inner: Arc<AppStateInner<G>>,
}

struct AppStateInner<G> {
    config: ProxyConfig,
    gateway: G,
}

impl AppState<AdminClient> {
    /// Create application state backed by the real Shopify Admin client.
    ///
    /// # Errors
    ///
    /// Returns an error if the Admin API client cannot be built.
    pub fn new(config: ProxyConfig) -> Result<Self, ShopifyError> {
        let gateway = AdminClient::new(&config.shopify)?;
        Ok(Self::with_gateway(config, gateway))
    }
}

impl<G: AdminGateway> AppState<G> {
    /// Create application state around any gateway implementation.
    #[must_use]
    pub fn with_gateway(config: ProxyConfig, gateway: G) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, gateway }),
        }
    }

    /// Get a reference to the proxy configuration.
    #[must_use]
    pub fn config(&self) -> &ProxyConfig {
        &self.inner.config
    }

    /// Get a reference to the Shopify Admin gateway.
    #[must_use]
    pub fn gateway(&self) -> &G {
        &self.inner.gateway
    }
}
