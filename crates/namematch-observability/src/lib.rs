//! # namematch-observability
//!
//! Subscriber setup, span macros for the matching stages, and lock-free run
//! statistics.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{RunStats, RunStatsSnapshot};
pub use tracing_setup::init_tracing;
