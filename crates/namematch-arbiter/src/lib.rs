//! # namematch-arbiter
//!
//! The arbiter gate decides when an external judge may be consulted for a
//! REVIEW query, enforces the global call budget, and caches verdicts by
//! the order-independent pair of core keys.

pub mod budget;
pub mod cache;
pub mod evidence;
pub mod gate;
pub mod pair_key;
pub mod prompt;
pub mod providers;

pub use budget::CallBudget;
pub use cache::{VerdictCache, VerdictSnapshot};
pub use gate::{ArbiterGate, ArbiterStatsSnapshot, GateOutcome, Revision};
pub use pair_key::PairKey;
pub use providers::{NoopArbiter, PromptArbiter, TextCompletion};
