mod arbiter_error;
mod config_error;
mod embedding_error;
mod lexicon_error;

pub use arbiter_error::ArbiterError;
pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use lexicon_error::LexiconError;

/// Top-level error for the namematch pipeline.
///
/// Only configuration and lexicon errors are fatal; capability errors are
/// normally recovered where they happen and surface as warnings.
#[derive(Debug, thiserror::Error)]
pub enum NameMatchError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("lexicon error: {0}")]
    Lexicon(#[from] LexiconError),

    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("arbiter error: {0}")]
    Arbiter(#[from] ArbiterError),

    #[error("duplicate reference id: {id}")]
    DuplicateReferenceId { id: String },
}

/// Convenience alias used throughout the workspace.
pub type NameMatchResult<T> = Result<T, NameMatchError>;
