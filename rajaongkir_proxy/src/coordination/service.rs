use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::cache::{CacheStore, InMemoryCacheStore};
use crate::config::ProxyConfig;
use crate::upstream::{
    RajaOngkirClient, RemoteClient, ShippingCostQuery, UpstreamError, UpstreamQuery,
};

/// Cached access to the RajaOngkir API.
///
/// Owns its cache store, so each instance (and each test) has an isolated
/// cache. The store lock is released before any upstream call; two
/// concurrent misses on the same key may both fetch, and the later `put`
/// wins.
pub struct ShippingService {
    cache: Mutex<Box<dyn CacheStore>>,
    client: Arc<dyn RemoteClient>,
}

impl ShippingService {
    pub fn new(cache: Box<dyn CacheStore>, client: Arc<dyn RemoteClient>) -> Self {
        Self {
            cache: Mutex::new(cache),
            client,
        }
    }

    /// Wire an in-memory cache and the reqwest client from `config`
    pub fn from_config(config: &ProxyConfig) -> Result<Self, UpstreamError> {
        let client = RajaOngkirClient::new(config)?;
        Ok(Self::new(
            Box::new(InMemoryCacheStore::new(config.cache_ttl)),
            Arc::new(client),
        ))
    }

    /// Return the cached document for `key`, or run `fetch` and cache its
    /// result. Errors from `fetch` are propagated and never cached.
    pub async fn fetch_or_cache<F, Fut>(&self, key: &str, fetch: F) -> Result<Value, UpstreamError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value, UpstreamError>>,
    {
        if let Some(value) = self.cache.lock().await.get(key).await {
            tracing::debug!("Cache hit: {}", key);
            return Ok(value);
        }

        tracing::debug!("Cache miss: {}", key);
        let value = fetch().await?;

        self.cache.lock().await.put(key, value.clone()).await;
        Ok(value)
    }

    async fn cached_query(&self, query: UpstreamQuery) -> Result<Value, UpstreamError> {
        let key = query.cache_key();
        self.fetch_or_cache(&key, || self.client.fetch(&query)).await
    }

    pub async fn provinces(&self) -> Result<Value, UpstreamError> {
        self.cached_query(UpstreamQuery::Provinces).await
    }

    pub async fn cities_in_province(&self, province_id: i64) -> Result<Value, UpstreamError> {
        self.cached_query(UpstreamQuery::CitiesInProvince { province_id }).await
    }

    pub async fn all_cities(&self) -> Result<Value, UpstreamError> {
        self.cached_query(UpstreamQuery::AllCities).await
    }

    pub async fn subdistricts(&self, city_id: i64) -> Result<Value, UpstreamError> {
        self.cached_query(UpstreamQuery::Subdistricts { city_id }).await
    }

    pub async fn shipping_cost(&self, query: &ShippingCostQuery) -> Result<Value, UpstreamError> {
        self.cached_query(UpstreamQuery::ShippingCost(query.clone())).await
    }

    /// Number of entries held by the cache, stale ones included
    pub async fn cached_entries(&self) -> usize {
        self.cache.lock().await.entry_count().await
    }
}
