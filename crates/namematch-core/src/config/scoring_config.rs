use serde::{Deserialize, Serialize};

use super::defaults;

/// Weights for the four scoring features.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub token_overlap: f64,
    pub fuzzy_similarity: f64,
    pub acronym_signal: f64,
    pub semantic_similarity: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            token_overlap: defaults::DEFAULT_WEIGHT_TOKEN_OVERLAP,
            fuzzy_similarity: defaults::DEFAULT_WEIGHT_FUZZY,
            acronym_signal: defaults::DEFAULT_WEIGHT_ACRONYM,
            semantic_similarity: defaults::DEFAULT_WEIGHT_SEMANTIC,
        }
    }
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.token_overlap + self.fuzzy_similarity + self.acronym_signal + self.semantic_similarity
    }
}

/// Penalty magnitudes and evidence floors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Penalties {
    /// Both sides carry numbers and the sets differ.
    pub numeric_mismatch: f64,
    /// Only one side carries numbers.
    pub numeric_one_side_only: f64,
    /// Either side has a single-token effective core.
    pub short_name_guardrail: f64,
    /// Acronym signal when either matching acronym is on the collision list.
    pub acronym_collision_signal: f64,
    /// Acronym signal for an exact or initialism match.
    pub acronym_strong_signal: f64,
    /// Minimum token overlap or fuzzy similarity required before semantic or
    /// acronym evidence may lift a score into the MATCH band.
    pub lexical_floor: f64,
}

impl Default for Penalties {
    fn default() -> Self {
        Self {
            numeric_mismatch: defaults::DEFAULT_NUMERIC_MISMATCH_PENALTY,
            numeric_one_side_only: defaults::DEFAULT_NUMERIC_ONE_SIDE_PENALTY,
            short_name_guardrail: defaults::DEFAULT_SHORT_NAME_PENALTY,
            acronym_collision_signal: defaults::DEFAULT_ACRONYM_COLLISION_SIGNAL,
            acronym_strong_signal: defaults::DEFAULT_ACRONYM_STRONG_SIGNAL,
            lexical_floor: defaults::DEFAULT_LEXICAL_FLOOR,
        }
    }
}

/// Decision band thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub t_high: f64,
    pub t_low: f64,
    pub margin: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            t_high: defaults::DEFAULT_T_HIGH,
            t_low: defaults::DEFAULT_T_LOW,
            margin: defaults::DEFAULT_MARGIN,
        }
    }
}
