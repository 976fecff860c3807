use std::fmt;

use serde::{Deserialize, Serialize};

/// Enumerated explanation for a score or a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    CoreOverlapHigh,
    FuzzyHigh,
    AcronymMatchStrong,
    AcronymMatchWeak,
    AcronymExpansion,
    SemanticBoost,
    SemanticCapped,
    AcronymOnlyCapped,
    NumericMismatch,
    NumericOneSideOnly,
    ShortNameGuardrail,
    NoCandidates,
    ArbiterSame,
    ArbiterDifferent,
}

impl ReasonCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CoreOverlapHigh => "core_overlap_high",
            Self::FuzzyHigh => "fuzzy_high",
            Self::AcronymMatchStrong => "acronym_match_strong",
            Self::AcronymMatchWeak => "acronym_match_weak",
            Self::AcronymExpansion => "acronym_expansion",
            Self::SemanticBoost => "semantic_boost",
            Self::SemanticCapped => "semantic_capped",
            Self::AcronymOnlyCapped => "acronym_only_capped",
            Self::NumericMismatch => "numeric_mismatch",
            Self::NumericOneSideOnly => "numeric_one_side_only",
            Self::ShortNameGuardrail => "short_name_guardrail",
            Self::NoCandidates => "no_candidates",
            Self::ArbiterSame => "arbiter_same",
            Self::ArbiterDifferent => "arbiter_different",
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-fatal condition recorded while normalizing or matching a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningCode {
    EmptyInput,
    DesignatorStripRevertedShortCore,
    SingleTokenCore,
    CollisionAcronym,
    CandidateCapTruncated,
    EmbeddingUnavailable,
    ArbiterFailed,
    ArbiterTimeout,
    ArbiterBudgetExhausted,
}

impl WarningCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::DesignatorStripRevertedShortCore => "designator_strip_reverted_short_core",
            Self::SingleTokenCore => "single_token_core",
            Self::CollisionAcronym => "collision_acronym",
            Self::CandidateCapTruncated => "candidate_cap_truncated",
            Self::EmbeddingUnavailable => "embedding_unavailable",
            Self::ArbiterFailed => "arbiter_failed",
            Self::ArbiterTimeout => "arbiter_timeout",
            Self::ArbiterBudgetExhausted => "arbiter_budget_exhausted",
        }
    }
}

impl fmt::Display for WarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
