//! Span definitions per stage: reference load, batch, query, embedding,
//! arbitration.

/// Span around loading a reference list.
#[macro_export]
macro_rules! load_span {
    ($references:expr) => {
        tracing::info_span!("namematch.load", references = $references)
    };
}

/// Span around a batch of queries.
#[macro_export]
macro_rules! batch_span {
    ($queries:expr) => {
        tracing::info_span!("namematch.batch", queries = $queries)
    };
}

/// Span around one query.
#[macro_export]
macro_rules! query_span {
    ($query_id:expr, $name:expr) => {
        tracing::debug_span!("namematch.query", query_id = $query_id, name = %$name)
    };
}

/// Span around an embedding pass.
#[macro_export]
macro_rules! embedding_span {
    ($provider:expr, $texts:expr) => {
        tracing::info_span!("namematch.embedding", provider = %$provider, texts = $texts)
    };
}

/// Span around arbitration for one query.
#[macro_export]
macro_rules! arbiter_span {
    ($query_id:expr) => {
        tracing::debug_span!("namematch.arbiter", query_id = $query_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const LOAD: &str = "namematch.load";
    pub const BATCH: &str = "namematch.batch";
    pub const QUERY: &str = "namematch.query";
    pub const EMBEDDING: &str = "namematch.embedding";
    pub const ARBITER: &str = "namematch.arbiter";
}
