//! EmbeddingEngine: cached, chunked, deadline-bounded embedding of core keys.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use namematch_core::capability::{CapabilityRunner, Deadline};
use namematch_core::config::EmbeddingConfig;
use namematch_core::errors::EmbeddingError;
use tracing::{debug, info, warn};

use crate::cache::{open_l2, CacheCoordinator};
use crate::degradation::DegradationChain;

/// Point-in-time embedding counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmbeddingStatsSnapshot {
    /// Provider batch calls made.
    pub provider_calls: u64,
    /// Texts served from L1 or L2.
    pub cache_hits: u64,
    /// Provider calls that failed or timed out.
    pub failures: u64,
}

#[derive(Default)]
struct EmbeddingStats {
    provider_calls: AtomicU64,
    cache_hits: AtomicU64,
    failures: AtomicU64,
}

/// Embeds normalized core keys through the provider chain with caching.
pub struct EmbeddingEngine {
    chain: Arc<DegradationChain>,
    cache: CacheCoordinator,
    config: EmbeddingConfig,
    runner: CapabilityRunner,
    stats: EmbeddingStats,
}

impl EmbeddingEngine {
    /// Build an engine. Opens the L2 cache when a path is configured.
    pub fn new(config: EmbeddingConfig, chain: DegradationChain) -> Result<Self, EmbeddingError> {
        let cache = match open_l2(config.l2_cache_path.as_deref())? {
            Some(l2) => CacheCoordinator::with_l2(config.l1_cache_size, l2),
            None => CacheCoordinator::new(config.l1_cache_size),
        };

        info!(
            provider = chain.active_provider_name().unwrap_or("none"),
            dims = chain.active_dimensions().unwrap_or(0),
            l2 = cache.has_l2(),
            "EmbeddingEngine initialized"
        );

        Ok(Self {
            chain: Arc::new(chain),
            cache,
            runner: CapabilityRunner::new("embedding", Duration::from_millis(config.timeout_ms)),
            config,
            stats: EmbeddingStats::default(),
        })
    }

    /// Enabled in config and at least one provider is available.
    pub fn is_active(&self) -> bool {
        self.config.enabled && self.chain.is_available()
    }

    pub fn active_provider(&self) -> Option<&str> {
        self.chain.active_provider_name()
    }

    /// Embed one key. Empty keys have no embedding.
    pub fn embed_key(&self, key: &str) -> Result<Option<Arc<Vec<f32>>>, EmbeddingError> {
        let mut out = self.embed_keys(&[key.to_string()])?;
        Ok(out.pop().flatten())
    }

    /// Embed many keys. The output has one entry per input, in order; empty
    /// keys map to `None`. Cache misses are embedded in chunks of
    /// `batch_size`, each chunk under the configured timeout.
    ///
    /// Vectors are cached under the provider that produced them, so lookups
    /// try every available provider in chain order.
    pub fn embed_keys(&self, keys: &[String]) -> Result<Vec<Option<Arc<Vec<f32>>>>, EmbeddingError> {
        let providers = self.chain.available_provider_names();
        if providers.is_empty() {
            return Err(EmbeddingError::ProviderUnavailable {
                provider: "none".to_string(),
            });
        }

        let mut resolved: HashMap<&str, Arc<Vec<f32>>> = HashMap::new();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut missing: Vec<&str> = Vec::new();
        for key in keys.iter().map(String::as_str).filter(|k| !k.is_empty()) {
            if !seen.insert(key) {
                continue;
            }
            match self.lookup(&providers, key) {
                Some(v) => {
                    self.stats.cache_hits.fetch_add(1, Ordering::Relaxed);
                    resolved.insert(key, v);
                }
                None => missing.push(key),
            }
        }

        if !missing.is_empty() {
            debug!(
                total = keys.len(),
                from_cache = resolved.len(),
                to_compute = missing.len(),
                "embedding batch plan"
            );
        }

        let batch_size = self.config.batch_size.max(1);
        for chunk in missing.chunks(batch_size) {
            let texts: Vec<String> = chunk.iter().map(|s| s.to_string()).collect();
            let (vectors, served_by) = self.call_chain(texts)?;
            for (key, mut vector) in chunk.iter().zip(vectors) {
                l2_normalize(&mut vector);
                let vector = Arc::new(vector);
                self.cache.put(content_hash(&served_by, key), Arc::clone(&vector));
                resolved.insert(*key, vector);
            }
        }

        Ok(keys
            .iter()
            .map(|k| resolved.get(k.as_str()).cloned())
            .collect())
    }

    fn lookup(&self, providers: &[&str], key: &str) -> Option<Arc<Vec<f32>>> {
        providers
            .iter()
            .find_map(|provider| self.cache.get(&content_hash(provider, key)).0)
    }

    fn call_chain(&self, texts: Vec<String>) -> Result<(Vec<Vec<f32>>, String), EmbeddingError> {
        self.stats.provider_calls.fetch_add(1, Ordering::Relaxed);
        let sent = texts.len();
        let chain = Arc::clone(&self.chain);
        let result = match self.runner.run(move || chain.embed_batch(&texts)) {
            Deadline::Completed(result) => result.and_then(|batch| validate(batch, sent)),
            Deadline::TimedOut => Err(EmbeddingError::Timeout {
                after_ms: self.config.timeout_ms,
            }),
            Deadline::Saturated => Err(EmbeddingError::Saturated {
                in_flight: self.runner.in_flight(),
            }),
        };
        if let Err(e) = &result {
            self.stats.failures.fetch_add(1, Ordering::Relaxed);
            warn!(error = %e, "embedding call failed");
        }
        result
    }

    pub fn stats(&self) -> EmbeddingStatsSnapshot {
        EmbeddingStatsSnapshot {
            provider_calls: self.stats.provider_calls.load(Ordering::Relaxed),
            cache_hits: self.stats.cache_hits.load(Ordering::Relaxed),
            failures: self.stats.failures.load(Ordering::Relaxed),
        }
    }
}

/// One vector per text, all finite, all the same length.
fn validate(
    (vectors, served_by): (Vec<Vec<f32>>, String),
    sent: usize,
) -> Result<(Vec<Vec<f32>>, String), EmbeddingError> {
    if vectors.len() != sent {
        return Err(EmbeddingError::BatchSizeMismatch {
            sent,
            received: vectors.len(),
        });
    }
    if vectors.iter().flatten().any(|x| !x.is_finite()) {
        return Err(EmbeddingError::NonFiniteVector { provider: served_by });
    }
    if let Some(first) = vectors.first() {
        if let Some(bad) = vectors.iter().find(|v| v.len() != first.len()) {
            return Err(EmbeddingError::DimensionMismatch {
                expected: first.len(),
                actual: bad.len(),
            });
        }
    }
    Ok((vectors, served_by))
}

/// Cache key: blake3 of provider name and text, so switching providers
/// never serves another provider's vectors.
fn content_hash(provider: &str, text: &str) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(provider.as_bytes());
    hasher.update(&[0x1f]);
    hasher.update(text.as_bytes());
    hasher.finalize().to_hex().to_string()
}

pub(crate) fn l2_normalize(v: &mut [f32]) {
    let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > f32::EPSILON {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}

/// Cosine of two vectors; 0 when either is zero or lengths differ.
pub fn cosine(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let na: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let nb: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if na <= f32::EPSILON || nb <= f32::EPSILON {
        return 0.0;
    }
    f64::from(dot / (na * nb)).clamp(-1.0, 1.0)
}
