//! Composite pairwise scorer.
//!
//! Composite = weighted average over the active features (token overlap and
//! fuzzy always; acronym when non-zero; semantic when supplied and not
//! disabled by the short-name guardrail), minus penalties, then capped.
//!
//! Lexical features always compare the two real effective cores. A bare
//! acronym against its expansion has no lexical evidence, so it is held in
//! the middle of the REVIEW band instead of being scored as a match.

use namematch_core::config::{MatchConfig, Penalties, ScoringWeights, Thresholds};
use namematch_core::constants::{CAP_BELOW_T_HIGH, FUZZY_HIGH, OVERLAP_HIGH, SEMANTIC_BOOST};
use namematch_core::models::{
    AcronymRelation, CandidateSource, Features, NormalizedName, ReasonCode, ScoredCandidate,
};
use tracing::trace;

use crate::features::{
    acronym_relation, expansion, numeric_conflict, token_overlap, token_sort_similarity,
    NumericConflict,
};

/// Scores (query, candidate) pairs. Holds only configuration.
#[derive(Debug, Clone)]
pub struct Scorer {
    weights: ScoringWeights,
    penalties: Penalties,
    thresholds: Thresholds,
}

impl Scorer {
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            weights: config.weights.clone(),
            penalties: config.penalties.clone(),
            thresholds: config.thresholds.clone(),
        }
    }

    /// Score one candidate. `semantic` is the embedding cosine when the
    /// capability produced one for this pair.
    pub fn score(
        &self,
        query: &NormalizedName,
        candidate: &NormalizedName,
        ref_idx: usize,
        sources: Vec<CandidateSource>,
        semantic: Option<f64>,
    ) -> ScoredCandidate {
        let mut reasons = Vec::new();
        let expanded = expansion(query, candidate);

        let overlap = token_overlap(&query.effective_tokens, &candidate.effective_tokens);
        let fuzzy = token_sort_similarity(&query.effective_tokens, &candidate.effective_tokens);

        // Acronym signal.
        let relation = acronym_relation(query, candidate);
        let acronym_signal = match relation {
            AcronymRelation::Exact | AcronymRelation::Initialism => {
                reasons.push(ReasonCode::AcronymMatchStrong);
                self.penalties.acronym_strong_signal
            }
            AcronymRelation::Collision => {
                reasons.push(ReasonCode::AcronymMatchWeak);
                self.penalties.acronym_collision_signal
            }
            AcronymRelation::None => 0.0,
        };
        if expanded.is_expanded() {
            reasons.push(ReasonCode::AcronymExpansion);
        }

        // Short-name guardrail. A bare acronym facing its expansion is not a
        // short name.
        let short = !expanded.is_expanded()
            && (query.effective_tokens.len() == 1 || candidate.effective_tokens.len() == 1);
        let short_name_penalty = if short {
            reasons.push(ReasonCode::ShortNameGuardrail);
            self.penalties.short_name_guardrail
        } else {
            0.0
        };
        let semantic = if short {
            None
        } else {
            semantic.filter(|s| s.is_finite()).map(|s| s.clamp(0.0, 1.0))
        };

        // Numeric conflict.
        let numeric_penalty = match numeric_conflict(query, candidate) {
            NumericConflict::Mismatch => {
                reasons.push(ReasonCode::NumericMismatch);
                self.penalties.numeric_mismatch
            }
            NumericConflict::OneSideOnly => {
                reasons.push(ReasonCode::NumericOneSideOnly);
                self.penalties.numeric_one_side_only
            }
            NumericConflict::None => 0.0,
        };

        let lexical_raw = self.weighted(overlap, fuzzy, acronym_signal, None);
        let raw_score = self.weighted(overlap, fuzzy, acronym_signal, semantic);
        let penalty = numeric_penalty + short_name_penalty;
        let mut score = (raw_score - penalty).clamp(0.0, 1.0);

        // Caps: neither semantic nor a bare acronym match may reach the MATCH
        // band without lexical support.
        let t_high = self.thresholds.t_high;
        let ceiling = (t_high - CAP_BELOW_T_HIGH).max(0.0);
        let floor = self.penalties.lexical_floor;
        let lexically_weak = overlap < floor && fuzzy < floor;
        if expanded.is_expanded() && lexically_weak {
            let review_mid = (self.thresholds.t_low + t_high) / 2.0;
            score = score.max(review_mid).min(ceiling);
            reasons.push(ReasonCode::AcronymOnlyCapped);
        }
        if semantic.is_some() && lexically_weak && score >= t_high && lexical_raw - penalty < t_high {
            score = ceiling;
            reasons.push(ReasonCode::SemanticCapped);
        }
        if matches!(relation, AcronymRelation::Exact | AcronymRelation::Initialism)
            && lexically_weak
            && score >= t_high
        {
            score = ceiling;
            reasons.push(ReasonCode::AcronymOnlyCapped);
        }

        if overlap >= OVERLAP_HIGH {
            reasons.push(ReasonCode::CoreOverlapHigh);
        }
        if fuzzy >= FUZZY_HIGH {
            reasons.push(ReasonCode::FuzzyHigh);
        }
        if semantic.is_some_and(|s| s >= SEMANTIC_BOOST) {
            reasons.push(ReasonCode::SemanticBoost);
        }
        reasons.sort_unstable();
        reasons.dedup();

        trace!(
            query = %query.core_key,
            candidate = %candidate.core_key,
            overlap,
            fuzzy,
            acronym_signal,
            ?semantic,
            score,
            "pair scored"
        );

        ScoredCandidate {
            ref_idx,
            score,
            features: Features {
                token_overlap: overlap,
                fuzzy_similarity: fuzzy,
                acronym_signal,
                semantic_similarity: semantic,
                acronym_relation: relation,
                acronym_expanded: expanded.is_expanded(),
                numeric_penalty,
                short_name_penalty,
                raw_score,
            },
            reason_codes: reasons,
            sources,
        }
    }

    fn weighted(&self, overlap: f64, fuzzy: f64, acronym: f64, semantic: Option<f64>) -> f64 {
        let w = &self.weights;
        let mut sum = w.token_overlap * overlap + w.fuzzy_similarity * fuzzy;
        let mut total = w.token_overlap + w.fuzzy_similarity;
        if acronym > 0.0 {
            sum += w.acronym_signal * acronym;
            total += w.acronym_signal;
        }
        if let Some(s) = semantic {
            sum += w.semantic_similarity * s;
            total += w.semantic_similarity;
        }
        if total <= 0.0 {
            return 0.0;
        }
        (sum / total).clamp(0.0, 1.0)
    }
}
