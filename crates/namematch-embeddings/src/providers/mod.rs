//! Built-in embedding providers.

mod hashed_ngram;
mod noop;

pub use hashed_ngram::HashedNgramEmbedder;
pub use noop::NoopEmbedder;
