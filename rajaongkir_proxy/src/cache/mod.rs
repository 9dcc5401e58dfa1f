mod memory;
mod types;

pub use memory::InMemoryCacheStore;
pub use types::{CacheEntry, CacheStore};
