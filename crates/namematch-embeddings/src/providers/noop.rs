use namematch_core::errors::EmbeddingError;
use namematch_core::traits::EmbeddingProvider;

/// Placeholder provider that is never available. Using it disables the
/// semantic stage without special-casing callers.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEmbedder;

impl EmbeddingProvider for NoopEmbedder {
    fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Err(EmbeddingError::ProviderUnavailable {
            provider: self.name().to_string(),
        })
    }

    fn dimensions(&self) -> usize {
        0
    }

    fn name(&self) -> &str {
        "noop"
    }

    fn is_available(&self) -> bool {
        false
    }
}
