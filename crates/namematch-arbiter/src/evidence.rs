use namematch_core::models::{
    ArbiterEvidence, EvidenceFeatures, EvidenceSide, NormalizedName, ScoredCandidate,
};

fn side(name: &NormalizedName) -> EvidenceSide {
    EvidenceSide {
        original: name.original.clone(),
        core_key: name.core_key.clone(),
        tokens: name.core_tokens.clone(),
        acronym: name.acronym.clone(),
        numeric_tokens: name.numeric_tokens.clone(),
    }
}

/// Structured evidence for one pair. `margin` is the best score minus the
/// runner-up (or minus 0 with a single candidate).
pub fn build_evidence(
    query: &NormalizedName,
    candidate: &NormalizedName,
    scored: &ScoredCandidate,
    margin: f64,
) -> ArbiterEvidence {
    let f = &scored.features;
    ArbiterEvidence {
        query: side(query),
        candidate: side(candidate),
        features: EvidenceFeatures {
            token_overlap: f.token_overlap,
            fuzzy_similarity: f.fuzzy_similarity,
            acronym_signal: f.acronym_signal,
            acronym_relation: f.acronym_relation,
            semantic_similarity: f.semantic_similarity.unwrap_or(0.0),
            deterministic_score: scored.score,
            margin,
        },
    }
}
