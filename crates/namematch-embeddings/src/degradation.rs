//! Fallback chain for embedding generation.
//!
//! Providers are tried in priority order; unavailable providers are skipped
//! and a failing provider hands over to the next one with a warning.

use std::sync::Arc;

use namematch_core::errors::EmbeddingError;
use namematch_core::traits::EmbeddingProvider;
use tracing::warn;

/// Ordered list of providers.
#[derive(Default, Clone)]
pub struct DegradationChain {
    chain: Vec<Arc<dyn EmbeddingProvider>>,
}

impl DegradationChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a provider to the end of the chain.
    pub fn push(&mut self, provider: Arc<dyn EmbeddingProvider>) {
        self.chain.push(provider);
    }

    /// Embed a batch with the first provider that succeeds. Returns the
    /// vectors and the name of the provider that produced them.
    pub fn embed_batch(&self, texts: &[String]) -> Result<(Vec<Vec<f32>>, String), EmbeddingError> {
        let mut last_error = None;

        for (i, provider) in self.chain.iter().enumerate() {
            if !provider.is_available() {
                continue;
            }

            match provider.embed_batch(texts) {
                Ok(vecs) if vecs.len() == texts.len() && !all_finite(&vecs) => {
                    warn!(
                        provider = provider.name(),
                        "provider returned non-finite values, trying next in chain"
                    );
                    last_error = Some(EmbeddingError::NonFiniteVector {
                        provider: provider.name().to_string(),
                    });
                }
                Ok(vecs) if vecs.len() == texts.len() => {
                    if i > 0 {
                        warn!(
                            primary = self.primary_name(),
                            fallback = provider.name(),
                            "embedding served by fallback provider"
                        );
                    }
                    return Ok((vecs, provider.name().to_string()));
                }
                Ok(vecs) => {
                    warn!(
                        provider = provider.name(),
                        sent = texts.len(),
                        received = vecs.len(),
                        "provider returned wrong batch size, trying next in chain"
                    );
                    last_error = Some(EmbeddingError::BatchSizeMismatch {
                        sent: texts.len(),
                        received: vecs.len(),
                    });
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        error = %e,
                        "batch embed failed, trying next in chain"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| EmbeddingError::ProviderUnavailable {
            provider: "all providers exhausted".to_string(),
        }))
    }

    /// Names of the available providers, in priority order.
    pub fn available_provider_names(&self) -> Vec<&str> {
        self.chain
            .iter()
            .filter(|p| p.is_available())
            .map(|p| p.name())
            .collect()
    }

    /// Name of the first available provider, if any.
    pub fn active_provider_name(&self) -> Option<&str> {
        self.chain
            .iter()
            .find(|p| p.is_available())
            .map(|p| p.name())
    }

    /// Dimensions of the first available provider.
    pub fn active_dimensions(&self) -> Option<usize> {
        self.chain
            .iter()
            .find(|p| p.is_available())
            .map(|p| p.dimensions())
    }

    pub fn is_available(&self) -> bool {
        self.chain.iter().any(|p| p.is_available())
    }

    fn primary_name(&self) -> &str {
        self.chain.first().map(|p| p.name()).unwrap_or("unknown")
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}

fn all_finite(vectors: &[Vec<f32>]) -> bool {
    vectors.iter().flatten().all(|x| x.is_finite())
}
