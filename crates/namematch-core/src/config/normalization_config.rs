use serde::{Deserialize, Serialize};

use super::defaults;

/// Name normalization configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationConfig {
    /// Also strip designators at the start of a name ("The", "PT", ...).
    pub strip_prefix_designators: bool,
    /// Drop combining marks after NFKD so "Société" and "Societe" agree.
    pub fold_diacritics: bool,
    /// Collapse runs of 3+ single-letter tokens ("i b m" -> "ibm").
    pub collapse_single_letters: bool,
    /// Word categories to strip from core tokens (e.g. "location").
    /// Each category is loaded from `<lexicon dir>/<category>.txt`.
    pub strip_categories: Vec<String>,
    /// Upper bound on category/designator re-strip passes.
    pub max_category_passes: usize,
    /// Max entries in the per-run normalization cache (keyed by raw string).
    pub cache_size: u64,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            strip_prefix_designators: defaults::DEFAULT_STRIP_PREFIX_DESIGNATORS,
            fold_diacritics: defaults::DEFAULT_FOLD_DIACRITICS,
            collapse_single_letters: defaults::DEFAULT_COLLAPSE_SINGLE_LETTERS,
            strip_categories: Vec::new(),
            max_category_passes: defaults::DEFAULT_MAX_CATEGORY_PASSES,
            cache_size: defaults::DEFAULT_NORMALIZATION_CACHE_SIZE,
        }
    }
}

/// Acronym detection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AcronymConfig {
    /// Minimum acronym length. Shorter initialisms are discarded.
    pub min_length: usize,
}

impl Default for AcronymConfig {
    fn default() -> Self {
        Self {
            min_length: defaults::DEFAULT_ACRONYM_MIN_LENGTH,
        }
    }
}
