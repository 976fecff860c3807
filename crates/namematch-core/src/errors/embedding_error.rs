/// Embedding capability errors.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },

    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("batch size mismatch: sent {sent} texts, got {received} vectors")]
    BatchSizeMismatch { sent: usize, received: usize },

    #[error("provider {provider} returned a non-finite vector component")]
    NonFiniteVector { provider: String },

    #[error("embedding call timed out after {after_ms}ms")]
    Timeout { after_ms: u64 },

    #[error("embedding call refused: {in_flight} earlier calls still running")]
    Saturated { in_flight: usize },

    #[error("cache failure: {reason}")]
    Cache { reason: String },
}
