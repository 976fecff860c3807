//! # namematch-core
//!
//! Foundation crate for the namematch pipeline.
//! Defines the data model, capability traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod capability;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::MatchConfig;
pub use errors::{NameMatchError, NameMatchResult};
pub use models::{
    Candidate, CandidateSource, Decision, KeyKind, MatchResult, NormalizedName, ReasonCode,
    ScoredCandidate, WarningCode,
};
