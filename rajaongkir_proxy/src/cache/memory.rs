use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

use super::types::{CacheEntry, CacheStore};

pub struct InMemoryCacheStore {
    entry: HashMap<String, CacheEntry>,
    ttl: Duration,
}

impl InMemoryCacheStore {
    pub fn new(ttl: Duration) -> Self {
        tracing::info!("Creating new in-memory cache store with ttl: {:?}", ttl);
        Self {
            entry: HashMap::new(),
            ttl,
        }
    }
}

#[async_trait]
impl CacheStore for InMemoryCacheStore {
    async fn get(&mut self, key: &str) -> Option<Value> {
        let fresh = self.entry.get(key)?.is_fresh(self.ttl);
        if !fresh {
            tracing::debug!("Evicting expired cache entry: {}", key);
            self.entry.remove(key);
            return None;
        }
        self.entry.get(key).map(|entry| entry.value.clone())
    }

    async fn put(&mut self, key: &str, value: Value) {
        self.entry.insert(key.to_string(), CacheEntry::new(value));
    }

    async fn entry_count(&self) -> usize {
        self.entry.len()
    }
}
