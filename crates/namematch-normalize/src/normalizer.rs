//! The normalization pipeline.

use std::collections::BTreeSet;
use std::sync::Arc;

use namematch_core::config::{AcronymConfig, MatchConfig, NormalizationConfig};
use namematch_core::models::{NormalizedName, WarningCode};
use tracing::trace;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::acronyms::{acronym_from_input, caps_word_acronym, derive_acronym};
use crate::cache::NormalizationCache;
use crate::categories::strip_until_stable;
use crate::designators::{effective_tokens, strip};
use crate::keys::{blocking_keys, KeyInputs};
use crate::lexicon::Lexicon;

/// Minimum run of single-letter tokens collapsed into one token.
const SINGLE_LETTER_RUN: usize = 3;

/// Turns raw names into `NormalizedName`s. Cheap to share across threads.
pub struct Normalizer {
    config: NormalizationConfig,
    acronym: AcronymConfig,
    use_first_token_key: bool,
    lexicon: Arc<Lexicon>,
    cache: NormalizationCache,
}

impl Normalizer {
    pub fn new(config: &MatchConfig, lexicon: Arc<Lexicon>) -> Self {
        Self {
            config: config.normalization.clone(),
            acronym: config.acronym.clone(),
            use_first_token_key: config.candidates.use_first_token_key,
            lexicon,
            cache: NormalizationCache::new(config.normalization.cache_size),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Normalize through the per-run cache.
    pub fn normalize_cached(&self, raw: &str) -> Arc<NormalizedName> {
        self.cache.get_or_insert_with(raw, || self.normalize(raw))
    }

    pub fn cache(&self) -> &NormalizationCache {
        &self.cache
    }

    /// Normalize a raw name. Pure; never fails.
    pub fn normalize(&self, raw: &str) -> NormalizedName {
        let lexicon = &*self.lexicon;
        let mut warnings = Vec::new();

        let normalized_text = self.fold_text(raw);

        let mut text = normalized_text.clone();
        for (from, to) in lexicon.substitutions() {
            if text.contains(from.as_str()) {
                text = text.replace(from.as_str(), to);
            }
        }

        let spaced: String = text
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { ' ' })
            .collect();
        let mut tokens: Vec<String> = spaced.split_whitespace().map(str::to_string).collect();
        if self.config.collapse_single_letters {
            tokens = collapse_single_letters(tokens);
        }
        let raw_tokens: Vec<String> = tokens
            .iter()
            .map(|t| lexicon.canonicalize(t).to_string())
            .collect();

        if raw_tokens.is_empty() {
            warnings.push(WarningCode::EmptyInput);
        }

        let stripped = strip(&raw_tokens, lexicon, self.config.strip_prefix_designators);
        if stripped.reverted {
            warnings.push(WarningCode::DesignatorStripRevertedShortCore);
        }
        let mut removed_designators = stripped.removed;
        let categories = strip_until_stable(
            &stripped.tokens,
            lexicon,
            self.config.strip_prefix_designators,
            self.config.max_category_passes,
        );
        removed_designators.extend(categories.removed_designators);
        let core_tokens = categories.tokens;

        if core_tokens.len() == 1 {
            warnings.push(WarningCode::SingleTokenCore);
        }

        let numeric_tokens: BTreeSet<String> = raw_tokens
            .iter()
            .filter(|t| t.chars().all(|c| c.is_ascii_digit()))
            .cloned()
            .collect();

        let effective = effective_tokens(&core_tokens, lexicon);

        let min_length = self.acronym.min_length;
        let acronym = acronym_from_input(raw, min_length)
            .or_else(|| derive_acronym(&core_tokens, min_length))
            .or_else(|| caps_word_acronym(raw, &effective, min_length));
        let collision_acronym = acronym
            .as_deref()
            .is_some_and(|a| lexicon.is_collision(a));
        if collision_acronym {
            warnings.push(WarningCode::CollisionAcronym);
        }

        let blocking_keys = blocking_keys(
            &KeyInputs {
                core_tokens: &core_tokens,
                acronym: acronym.as_deref(),
                collision_acronym,
                use_first_token_key: self.use_first_token_key,
            },
            lexicon,
        );

        trace!(raw, core = %core_tokens.join(" "), ?acronym, "normalized");

        NormalizedName {
            original: raw.to_string(),
            normalized_text,
            core_key: core_tokens.join(" "),
            effective_key: effective.join(" "),
            raw_tokens,
            core_tokens,
            effective_tokens: effective,
            acronym,
            collision_acronym,
            numeric_tokens,
            blocking_keys,
            removed_designators,
            removed_categories: categories.removed_categories,
            warnings,
        }
    }

    /// NFKC, lower-case, and optionally fold diacritics.
    fn fold_text(&self, raw: &str) -> String {
        let lowered: String = raw.nfkc().flat_map(char::to_lowercase).collect();
        if !self.config.fold_diacritics {
            return lowered.nfc().collect();
        }
        lowered
            .nfkd()
            .filter(|c| !is_combining_mark(*c))
            .nfc()
            .collect()
    }
}

/// Merge runs of at least three single-letter tokens (`i b m` -> `ibm`).
fn collapse_single_letters(tokens: Vec<String>) -> Vec<String> {
    let is_letter = |t: &String| {
        let mut chars = t.chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
    };

    let mut out = Vec::with_capacity(tokens.len());
    let mut run: Vec<String> = Vec::new();
    let flush = |run: &mut Vec<String>, out: &mut Vec<String>| {
        if run.len() >= SINGLE_LETTER_RUN {
            out.push(run.concat());
        } else {
            out.append(run);
        }
        run.clear();
    };

    for token in tokens {
        if is_letter(&token) {
            run.push(token);
        } else {
            flush(&mut run, &mut out);
            out.push(token);
        }
    }
    flush(&mut run, &mut out);
    out
}
