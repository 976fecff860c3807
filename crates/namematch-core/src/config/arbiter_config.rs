use serde::{Deserialize, Serialize};

use super::defaults;

/// External arbiter gating configuration.
///
/// The gate is only consulted when an arbiter provider is supplied; `enabled`
/// lets a run switch an available provider off without unwiring it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArbiterConfig {
    pub enabled: bool,
    /// Number of top-ranked candidates the arbiter may be asked about.
    pub top_k: usize,
    /// Hard bound on provider calls for the lifetime of the gate.
    pub global_call_cap: usize,
    /// Minimum verdict confidence for SAME/DIFFERENT to override REVIEW.
    pub min_confidence: f64,
    /// Per-call timeout in milliseconds. 0 disables the timeout.
    pub timeout_ms: u64,
}

impl Default for ArbiterConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_ARBITER_ENABLED,
            top_k: defaults::DEFAULT_ARBITER_TOP_K,
            global_call_cap: defaults::DEFAULT_ARBITER_GLOBAL_CALL_CAP,
            min_confidence: defaults::DEFAULT_ARBITER_MIN_CONFIDENCE,
            timeout_ms: defaults::DEFAULT_ARBITER_TIMEOUT_MS,
        }
    }
}
