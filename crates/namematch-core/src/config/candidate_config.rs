use serde::{Deserialize, Serialize};

use super::defaults;

/// Candidate retrieval caps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateConfig {
    /// Hard cap on the merged candidate set.
    pub max_candidates_total: usize,
    /// Sub-cap on candidates surfaced by blocking keys.
    pub max_candidates_lexical: usize,
    /// Sub-cap on candidates surfaced by the ANN index.
    pub max_candidates_ann: usize,
    /// Emit the low-specificity `first` blocking key.
    pub use_first_token_key: bool,
}

impl Default for CandidateConfig {
    fn default() -> Self {
        Self {
            max_candidates_total: defaults::DEFAULT_MAX_CANDIDATES_TOTAL,
            max_candidates_lexical: defaults::DEFAULT_MAX_CANDIDATES_LEXICAL,
            max_candidates_ann: defaults::DEFAULT_MAX_CANDIDATES_ANN,
            use_first_token_key: defaults::DEFAULT_USE_FIRST_TOKEN_KEY,
        }
    }
}
