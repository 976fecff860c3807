//! Category word stripping (e.g. location words).
//!
//! Removing a category word can expose a designator at the end of the name
//! ("hsbc europe sa germany" -> "hsbc europe sa"), so category stripping and
//! an aggressive designator re-strip alternate until nothing changes.

use crate::designators::strip_designators;
use crate::lexicon::Lexicon;

/// Tokens left after category stripping, and what was removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryOutcome {
    pub tokens: Vec<String>,
    pub removed_categories: Vec<String>,
    pub removed_designators: Vec<String>,
}

/// Drop every token in a loaded category. Never strips to zero tokens.
pub fn strip_category_words(tokens: &[String], lexicon: &Lexicon) -> (Vec<String>, Vec<String>) {
    let (removed, kept): (Vec<String>, Vec<String>) = tokens
        .iter()
        .cloned()
        .partition(|t| lexicon.in_any_category(t));
    if kept.is_empty() {
        return (tokens.to_vec(), Vec::new());
    }
    (kept, removed)
}

/// Alternate category stripping and designator re-stripping (floor of one
/// token) until stable or `max_passes` is reached.
pub fn strip_until_stable(
    tokens: &[String],
    lexicon: &Lexicon,
    strip_prefix: bool,
    max_passes: usize,
) -> CategoryOutcome {
    let mut outcome = CategoryOutcome {
        tokens: tokens.to_vec(),
        ..Default::default()
    };
    if !lexicon.has_categories() {
        return outcome;
    }

    for _ in 0..max_passes {
        let before = outcome.tokens.clone();

        let (kept, removed) = strip_category_words(&outcome.tokens, lexicon);
        outcome.removed_categories.extend(removed);

        let stripped = strip_designators(&kept, lexicon, strip_prefix, 1);
        outcome.removed_designators.extend(stripped.removed);
        outcome.tokens = stripped.tokens;

        if outcome.tokens == before {
            break;
        }
    }
    outcome
}
