use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::scored_candidate::AcronymRelation;

/// One side of an arbitration request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceSide {
    pub original: String,
    pub core_key: String,
    pub tokens: Vec<String>,
    pub acronym: Option<String>,
    pub numeric_tokens: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceFeatures {
    pub token_overlap: f64,
    pub fuzzy_similarity: f64,
    pub acronym_signal: f64,
    pub acronym_relation: AcronymRelation,
    pub semantic_similarity: f64,
    pub deterministic_score: f64,
    pub margin: f64,
}

/// Structured record handed to an `ArbiterProvider`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArbiterEvidence {
    pub query: EvidenceSide,
    pub candidate: EvidenceSide,
    pub features: EvidenceFeatures,
}
