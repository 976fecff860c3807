//! Verdict cache, shared across concurrent queries. Last writer wins.

use std::collections::BTreeMap;

use chrono::Utc;
use dashmap::DashMap;
use namematch_core::models::{ArbiterVerdict, VerdictCacheEntry};
use serde::{Deserialize, Serialize};

use crate::pair_key::PairKey;

#[derive(Debug, Default)]
pub struct VerdictCache {
    entries: DashMap<PairKey, VerdictCacheEntry>,
}

/// Serializable copy of a cache, for callers that persist verdicts between
/// runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerdictSnapshot {
    pub entries: BTreeMap<PairKey, VerdictCacheEntry>,
}

impl VerdictCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &PairKey) -> Option<ArbiterVerdict> {
        self.entries.get(key).map(|e| e.verdict.clone())
    }

    pub fn insert(&self, key: PairKey, verdict: ArbiterVerdict) {
        self.entries.insert(
            key,
            VerdictCacheEntry {
                verdict,
                recorded_at: Utc::now(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn snapshot(&self) -> VerdictSnapshot {
        VerdictSnapshot {
            entries: self
                .entries
                .iter()
                .map(|r| (r.key().clone(), r.value().clone()))
                .collect(),
        }
    }

    /// Merge a snapshot in. Snapshot entries replace existing ones.
    pub fn restore(&self, snapshot: VerdictSnapshot) {
        for (key, entry) in snapshot.entries {
            self.entries.insert(key, entry);
        }
    }
}
