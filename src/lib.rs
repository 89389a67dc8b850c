pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;

pub use models::*;

use std::sync::Arc;
use std::time::Duration;

use config::ServerConfig;
use middleware::RateLimiter;
use services::catalog::{CatalogClient, EventSource};
use services::{ChatService, EventCache};

/// Core application state shared across all handlers.
pub struct AppCore {
    pub config: ServerConfig,
    pub chat: ChatService,
    pub rate_limiter: Option<RateLimiter>,
}

impl AppCore {
    pub fn new(config: ServerConfig) -> Self {
        if config.nasa_api_key.is_none() {
            tracing::warn!("NASA_API_KEY not configured; catalog requests are sent without a key");
        }
        let source = Arc::new(CatalogClient::new(
            config.catalog_base_url.clone(),
            config.nasa_api_key.clone(),
        ));
        Self::with_source(config, source)
    }

    /// Build the core around an arbitrary event source. Lets tests run the
    /// full stack against a stub catalog.
    pub fn with_source(config: ServerConfig, source: Arc<dyn EventSource>) -> Self {
        let cache = EventCache::new(
            Duration::from_secs(config.cache_ttl_secs),
            config.cache_capacity,
        );
        let chat = ChatService::new(source, cache);
        let rate_limiter = RateLimiter::new(config.rate_limit_per_minute);

        Self {
            config,
            chat,
            rate_limiter,
        }
    }
}
