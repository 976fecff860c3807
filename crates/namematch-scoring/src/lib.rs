//! # namematch-scoring
//!
//! Explainable pairwise scoring of a query against one candidate, and the
//! threshold/margin decision over the ranked candidates.

pub mod decision;
pub mod features;
pub mod scorer;

pub use decision::{decide, decide_scores, rank, Ranking};
pub use scorer::Scorer;
