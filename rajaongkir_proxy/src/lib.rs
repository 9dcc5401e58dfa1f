//! rajaongkir_proxy - Cached access to the RajaOngkir shipping-logistics API
//!
//! This crate provides the pieces behind the proxy endpoints: startup
//! configuration, an expiring in-memory cache, the upstream HTTP client, and
//! the fetch-or-cache service that ties them together.

mod cache;
mod config;
mod coordination;
mod upstream;

pub use cache::{CacheEntry, CacheStore, InMemoryCacheStore};

pub use config::{
    API_KEY_VAR, BASE_URL_VAR, CACHE_TTL_VAR, ConfigError, DEFAULT_BASE_URL, DEFAULT_CACHE_TTL,
    DEFAULT_TIMEOUT, ProxyConfig, TIMEOUT_VAR,
};

pub use coordination::ShippingService;

pub use upstream::{RajaOngkirClient, RemoteClient, ShippingCostQuery, UpstreamError, UpstreamQuery};

/// Read the configuration from the environment and build the service.
///
/// A missing API key is reported before any client or cache is created.
pub fn init() -> Result<ShippingService, Box<dyn std::error::Error + Send + Sync>> {
    let config = ProxyConfig::from_env()?;
    tracing::info!("Using RajaOngkir API at {}", config.base_url);
    let service = ShippingService::from_config(&config)?;
    Ok(service)
}
