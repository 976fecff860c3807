//! # namematch-engine
//!
//! The `Matcher` wires normalization, retrieval, scoring, decisions, and the
//! optional embedding and arbiter capabilities into one pipeline:
//! load a reference list once, then match query names against it one at a
//! time or in parallel batches.

pub mod evaluation;
pub mod matcher;
pub mod reference;

pub use evaluation::{evaluate_batch, evaluate_pairs, EvalMetrics, LabeledPair};
pub use matcher::Matcher;
pub use reference::ReferenceIndex;
