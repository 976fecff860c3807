//! Run statistics.
//!
//! [`RunStats`] is updated concurrently by every query of a run;
//! [`RunStatsSnapshot`] is the serializable read-out.

use std::sync::atomic::{AtomicU64, Ordering};

use namematch_core::models::Decision;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default)]
pub struct RunStats {
    references: AtomicU64,
    queries: AtomicU64,
    comparisons: AtomicU64,
    no_candidates: AtomicU64,
    truncated: AtomicU64,
    matches: AtomicU64,
    no_matches: AtomicU64,
    reviews: AtomicU64,
    arbiter_used: AtomicU64,
    arbiter_overrides: AtomicU64,
}

/// Counters at a point in time. Capability counters are filled in by the
/// component that owns them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStatsSnapshot {
    pub references: u64,
    pub queries: u64,
    /// Scored (query, candidate) pairs.
    pub comparisons: u64,
    pub no_candidates: u64,
    pub truncated: u64,
    pub matches: u64,
    pub no_matches: u64,
    pub reviews: u64,
    /// Queries that consulted at least one verdict.
    pub arbiter_used: u64,
    pub arbiter_overrides: u64,
    pub arbiter_calls: u64,
    pub arbiter_cache_hits: u64,
    pub embedding_calls: u64,
    pub embedding_cache_hits: u64,
}

impl RunStatsSnapshot {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_references(&self, count: usize) {
        self.references.store(count as u64, Ordering::Relaxed);
    }

    /// Record one finished query.
    pub fn record_query(&self, decision: Decision, comparisons: usize, truncated: bool) {
        self.queries.fetch_add(1, Ordering::Relaxed);
        self.comparisons
            .fetch_add(comparisons as u64, Ordering::Relaxed);
        if truncated {
            self.truncated.fetch_add(1, Ordering::Relaxed);
        }
        let band = match decision {
            Decision::Match => &self.matches,
            Decision::NoMatch => &self.no_matches,
            Decision::Review => &self.reviews,
        };
        band.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_no_candidates(&self) {
        self.no_candidates.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_arbiter(&self, used: bool, overridden: bool) {
        if used {
            self.arbiter_used.fetch_add(1, Ordering::Relaxed);
        }
        if overridden {
            self.arbiter_overrides.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn snapshot(&self) -> RunStatsSnapshot {
        RunStatsSnapshot {
            references: self.references.load(Ordering::Relaxed),
            queries: self.queries.load(Ordering::Relaxed),
            comparisons: self.comparisons.load(Ordering::Relaxed),
            no_candidates: self.no_candidates.load(Ordering::Relaxed),
            truncated: self.truncated.load(Ordering::Relaxed),
            matches: self.matches.load(Ordering::Relaxed),
            no_matches: self.no_matches.load(Ordering::Relaxed),
            reviews: self.reviews.load(Ordering::Relaxed),
            arbiter_used: self.arbiter_used.load(Ordering::Relaxed),
            arbiter_overrides: self.arbiter_overrides.load(Ordering::Relaxed),
            ..RunStatsSnapshot::default()
        }
    }
}
