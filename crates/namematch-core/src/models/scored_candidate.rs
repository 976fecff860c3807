use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::candidate::CandidateSource;
use super::codes::ReasonCode;

/// How the two sides' acronyms relate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcronymRelation {
    #[default]
    None,
    /// Both sides derive the same acronym.
    Exact,
    /// One side's acronym equals the other side's initialism.
    Initialism,
    /// A match on an acronym from the collision list.
    Collision,
}

/// Typed feature vector for one (query, candidate) pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Features {
    pub token_overlap: f64,
    pub fuzzy_similarity: f64,
    pub acronym_signal: f64,
    /// Cosine from the embedding capability; `None` when absent or disabled
    /// by the short-name guardrail.
    pub semantic_similarity: Option<f64>,
    pub acronym_relation: AcronymRelation,
    pub acronym_expanded: bool,
    pub numeric_penalty: f64,
    pub short_name_penalty: f64,
    /// Weighted average before penalties and caps.
    pub raw_score: f64,
}

impl Features {
    /// Numeric features as a `name -> value` map.
    pub fn as_map(&self) -> BTreeMap<&'static str, f64> {
        let mut map = BTreeMap::new();
        map.insert("token_overlap", self.token_overlap);
        map.insert("fuzzy_similarity", self.fuzzy_similarity);
        map.insert("acronym_signal", self.acronym_signal);
        map.insert("semantic_similarity", self.semantic_similarity.unwrap_or(0.0));
        map.insert("numeric_penalty", self.numeric_penalty);
        map.insert("short_name_penalty", self.short_name_penalty);
        map.insert("raw_score", self.raw_score);
        map
    }
}

/// Score and explanation for one candidate. Created once per pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub ref_idx: usize,
    pub score: f64,
    pub features: Features,
    pub reason_codes: Vec<ReasonCode>,
    pub sources: Vec<CandidateSource>,
}

impl ScoredCandidate {
    pub fn has_reason(&self, code: ReasonCode) -> bool {
        self.reason_codes.contains(&code)
    }
}
