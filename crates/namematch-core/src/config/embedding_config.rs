use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Use the embedding provider when one is supplied.
    pub enabled: bool,
    /// Neighbors requested from the ANN index per query.
    pub ann_neighbors: usize,
    /// Texts per provider call when embedding the reference list.
    pub batch_size: usize,
    /// L1 in-memory cache max entries.
    pub l1_cache_size: u64,
    /// Optional path of the persistent L2 SQLite cache.
    pub l2_cache_path: Option<String>,
    /// Per-call timeout in milliseconds. 0 disables the timeout.
    pub timeout_ms: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_EMBEDDING_ENABLED,
            ann_neighbors: defaults::DEFAULT_ANN_NEIGHBORS,
            batch_size: defaults::DEFAULT_EMBEDDING_BATCH_SIZE,
            l1_cache_size: defaults::DEFAULT_L1_CACHE_SIZE,
            l2_cache_path: None,
            timeout_ms: defaults::DEFAULT_EMBEDDING_TIMEOUT_MS,
        }
    }
}
