//! Per-run normalization cache keyed by raw string.

use std::sync::Arc;

use moka::sync::Cache;
use namematch_core::models::NormalizedName;

pub struct NormalizationCache {
    cache: Cache<String, Arc<NormalizedName>>,
}

impl NormalizationCache {
    pub fn new(max_entries: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_entries).build(),
        }
    }

    pub fn get(&self, raw: &str) -> Option<Arc<NormalizedName>> {
        self.cache.get(raw)
    }

    /// Return the cached entry for `raw`, computing it with `init` on a miss.
    pub fn get_or_insert_with(
        &self,
        raw: &str,
        init: impl FnOnce() -> NormalizedName,
    ) -> Arc<NormalizedName> {
        self.cache.get_with_by_ref(raw, || Arc::new(init()))
    }

    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}
