use async_trait::async_trait;
use serde_json::Value;
use tokio::time::Instant;

/// An upstream document together with the moment it was stored
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub value: Value,
    pub stored_at: Instant,
}

impl CacheEntry {
    pub(crate) fn new(value: Value) -> Self {
        Self {
            value,
            stored_at: Instant::now(),
        }
    }

    /// An entry is fresh while its age is strictly below `ttl`.
    pub(crate) fn is_fresh(&self, ttl: std::time::Duration) -> bool {
        self.stored_at.elapsed() < ttl
    }
}

// Trait
#[async_trait]
pub trait CacheStore: Send + Sync + 'static {
    /// Get a fresh value from the store.
    ///
    /// Entries older than the store's TTL are removed on this read and
    /// reported as absent.
    async fn get(&mut self, key: &str) -> Option<Value>;

    /// Put a value into the store, replacing any existing entry and
    /// resetting its timestamp.
    async fn put(&mut self, key: &str, value: Value);

    /// Number of entries currently held, stale ones included.
    async fn entry_count(&self) -> usize;
}
