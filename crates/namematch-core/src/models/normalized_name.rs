use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::codes::WarningCode;
use super::keys::KeyKind;

/// Canonical structured form of a raw name. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedName {
    pub original: String,
    /// Unicode-normalized, case-folded text before tokenization.
    pub normalized_text: String,
    /// Tokens after substitution, punctuation removal and alias
    /// canonicalization, before any stripping.
    pub raw_tokens: Vec<String>,
    /// Tokens after designator (and category) stripping.
    pub core_tokens: Vec<String>,
    pub core_key: String,
    /// Core tokens minus any designator the revert rule kept. Lexical
    /// features compare these.
    pub effective_tokens: Vec<String>,
    pub effective_key: String,
    pub acronym: Option<String>,
    pub collision_acronym: bool,
    pub numeric_tokens: BTreeSet<String>,
    pub blocking_keys: BTreeMap<KeyKind, String>,
    pub removed_designators: Vec<String>,
    pub removed_categories: Vec<String>,
    pub warnings: Vec<WarningCode>,
}

impl NormalizedName {
    pub fn is_empty(&self) -> bool {
        self.raw_tokens.is_empty()
    }

    pub fn has_warning(&self, code: WarningCode) -> bool {
        self.warnings.contains(&code)
    }

    pub fn blocking_key(&self, kind: KeyKind) -> Option<&str> {
        self.blocking_keys.get(&kind).map(String::as_str)
    }

    /// Initials of the non-numeric effective tokens, regardless of length.
    pub fn initialism(&self) -> String {
        self.effective_tokens
            .iter()
            .filter(|t| !t.chars().all(|c| c.is_ascii_digit()))
            .filter_map(|t| t.chars().next())
            .collect()
    }

    /// True when the effective core is a single token equal to the acronym.
    pub fn is_bare_acronym(&self) -> bool {
        match (&self.acronym, self.effective_tokens.as_slice()) {
            (Some(acronym), [only]) => acronym == only,
            _ => false,
        }
    }
}
