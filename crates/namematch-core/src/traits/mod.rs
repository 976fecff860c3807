mod arbiter;
mod embedding;

pub use arbiter::ArbiterProvider;
pub use embedding::EmbeddingProvider;
