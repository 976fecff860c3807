//! L1 in-memory cache using moka.

use std::sync::Arc;

use moka::sync::Cache;

/// L1 in-memory embedding cache keyed by content hash.
pub struct L1MemoryCache {
    cache: Cache<String, Arc<Vec<f32>>>,
}

impl L1MemoryCache {
    pub fn new(max_entries: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_entries).build(),
        }
    }

    pub fn get(&self, content_hash: &str) -> Option<Arc<Vec<f32>>> {
        self.cache.get(content_hash)
    }

    pub fn insert(&self, content_hash: String, embedding: Arc<Vec<f32>>) {
        self.cache.insert(content_hash, embedding);
    }

    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
