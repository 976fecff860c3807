//! # namematch-embeddings
//!
//! Optional semantic capability for the matcher.
//!
//! - **Providers**: a no-op provider and a deterministic hashed n-gram
//!   provider that needs no network or model files.
//! - **Degradation chain**: providers tried in priority order.
//! - **Cache**: moka L1 and optional SQLite L2, keyed by provider and text.
//! - **Engine**: chunked, cached, deadline-bounded embedding of core keys.
//! - **ANN index**: exact top-k cosine over the reference embeddings.

pub mod ann;
pub mod cache;
pub mod degradation;
pub mod engine;
pub mod providers;

pub use ann::AnnIndex;
pub use degradation::DegradationChain;
pub use engine::{EmbeddingEngine, EmbeddingStatsSnapshot};
pub use providers::{HashedNgramEmbedder, NoopEmbedder};
