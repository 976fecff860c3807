//! Two-tier embedding cache: moka L1, optional SQLite L2.

mod l1_memory;
mod l2_sqlite;

use std::sync::Arc;

pub use l1_memory::L1MemoryCache;
pub use l2_sqlite::L2SqliteCache;
use namematch_core::errors::EmbeddingError;
use tracing::warn;

/// Which tier served a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheHitTier {
    L1,
    L2,
    Miss,
}

/// Looks up L1 then L2; an L2 hit is promoted to L1. L2 failures are logged
/// and treated as misses.
pub struct CacheCoordinator {
    l1: L1MemoryCache,
    l2: Option<L2SqliteCache>,
}

impl CacheCoordinator {
    pub fn new(l1_max_entries: u64) -> Self {
        Self {
            l1: L1MemoryCache::new(l1_max_entries),
            l2: None,
        }
    }

    pub fn with_l2(l1_max_entries: u64, l2: L2SqliteCache) -> Self {
        Self {
            l1: L1MemoryCache::new(l1_max_entries),
            l2: Some(l2),
        }
    }

    pub fn get(&self, content_hash: &str) -> (Option<Arc<Vec<f32>>>, CacheHitTier) {
        if let Some(v) = self.l1.get(content_hash) {
            return (Some(v), CacheHitTier::L1);
        }
        if let Some(l2) = &self.l2 {
            match l2.get(content_hash) {
                Ok(Some(v)) => {
                    let v = Arc::new(v);
                    self.l1.insert(content_hash.to_string(), Arc::clone(&v));
                    return (Some(v), CacheHitTier::L2);
                }
                Ok(None) => {}
                Err(e) => warn!(error = %e, "L2 embedding cache read failed"),
            }
        }
        (None, CacheHitTier::Miss)
    }

    /// Write through to both tiers.
    pub fn put(&self, content_hash: String, embedding: Arc<Vec<f32>>) {
        if let Some(l2) = &self.l2 {
            if let Err(e) = l2.insert(&content_hash, &embedding) {
                warn!(error = %e, "L2 embedding cache write failed");
            }
        }
        self.l1.insert(content_hash, embedding);
    }

    pub fn has_l2(&self) -> bool {
        self.l2.is_some()
    }
}

/// Open the optional L2 tier from a configured path.
pub fn open_l2(path: Option<&str>) -> Result<Option<L2SqliteCache>, EmbeddingError> {
    path.map(|p| L2SqliteCache::open(std::path::Path::new(p)))
        .transpose()
}
