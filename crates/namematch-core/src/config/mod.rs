//! Run configuration.
//!
//! A `MatchConfig` is built once (usually from TOML), validated, and then
//! shared read-only by every stage of the pipeline.

pub mod arbiter_config;
pub mod candidate_config;
pub mod defaults;
pub mod embedding_config;
pub mod lexicon_config;
pub mod normalization_config;
pub mod observability_config;
pub mod scoring_config;

pub use arbiter_config::ArbiterConfig;
pub use candidate_config::CandidateConfig;
pub use embedding_config::EmbeddingConfig;
pub use lexicon_config::LexiconConfig;
pub use normalization_config::{AcronymConfig, NormalizationConfig};
pub use observability_config::ObservabilityConfig;
pub use scoring_config::{Penalties, ScoringWeights, Thresholds};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub normalization: NormalizationConfig,
    pub acronym: AcronymConfig,
    pub candidates: CandidateConfig,
    pub weights: ScoringWeights,
    pub penalties: Penalties,
    pub thresholds: Thresholds,
    pub arbiter: ArbiterConfig,
    pub embedding: EmbeddingConfig,
    pub lexicon: LexiconConfig,
    pub observability: ObservabilityConfig,
}

impl MatchConfig {
    /// Parse and validate a TOML document. Missing sections and fields take
    /// their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would make scoring or decisions meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.weights;
        for (field, value) in [
            ("weights.token_overlap", w.token_overlap),
            ("weights.fuzzy_similarity", w.fuzzy_similarity),
            ("weights.acronym_signal", w.acronym_signal),
            ("weights.semantic_similarity", w.semantic_similarity),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: format!("must be a non-negative number, got {value}"),
                });
            }
        }
        if w.token_overlap + w.fuzzy_similarity <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "weights".to_string(),
                reason: "token_overlap and fuzzy_similarity cannot both be zero".to_string(),
            });
        }

        let p = &self.penalties;
        for (field, value) in [
            ("penalties.numeric_mismatch", p.numeric_mismatch),
            ("penalties.numeric_one_side_only", p.numeric_one_side_only),
            ("penalties.short_name_guardrail", p.short_name_guardrail),
            ("penalties.acronym_collision_signal", p.acronym_collision_signal),
            ("penalties.acronym_strong_signal", p.acronym_strong_signal),
            ("penalties.lexical_floor", p.lexical_floor),
        ] {
            check_unit(field, value)?;
        }

        let t = &self.thresholds;
        check_unit("thresholds.t_high", t.t_high)?;
        check_unit("thresholds.t_low", t.t_low)?;
        check_unit("thresholds.margin", t.margin)?;
        if t.t_low >= t.t_high {
            return Err(ConfigError::InvalidValue {
                field: "thresholds".to_string(),
                reason: format!("t_low ({}) must be below t_high ({})", t.t_low, t.t_high),
            });
        }

        check_unit("arbiter.min_confidence", self.arbiter.min_confidence)?;

        for (field, value) in [
            ("candidates.max_candidates_total", self.candidates.max_candidates_total),
            ("candidates.max_candidates_lexical", self.candidates.max_candidates_lexical),
            ("acronym.min_length", self.acronym.min_length),
            ("embedding.batch_size", self.embedding.batch_size),
        ] {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: "must be greater than zero".to_string(),
                });
            }
        }

        Ok(())
    }
}

fn check_unit(field: &str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            reason: format!("must be within [0, 1], got {value}"),
        });
    }
    Ok(())
}
