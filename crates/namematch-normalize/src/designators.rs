//! Legal-entity designator stripping.

use crate::lexicon::Lexicon;

/// Minimum core length kept by the default strip.
pub const DEFAULT_MIN_CORE_TOKENS: usize = 2;

/// Result of a strip attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripOutcome {
    pub tokens: Vec<String>,
    pub removed: Vec<String>,
    /// Designators were found but removing them would have left too few
    /// tokens, so the input came back unchanged.
    pub reverted: bool,
}

/// Strip with the default safety floor of two tokens.
pub fn strip(tokens: &[String], lexicon: &Lexicon, strip_prefix: bool) -> StripOutcome {
    strip_designators(tokens, lexicon, strip_prefix, DEFAULT_MIN_CORE_TOKENS)
}

/// Remove designator tokens at the end (and at the start when `strip_prefix`)
/// of `tokens`. Matching is exact per token.
///
/// If fewer than `min(min_tokens, tokens.len())` tokens would remain, the
/// input is returned unchanged with `reverted` set. A non-empty input is
/// never stripped to nothing.
pub fn strip_designators(
    tokens: &[String],
    lexicon: &Lexicon,
    strip_prefix: bool,
    min_tokens: usize,
) -> StripOutcome {
    let suffix_start = tokens
        .iter()
        .rposition(|t| !lexicon.is_designator(t))
        .map_or(0, |i| i + 1);

    let prefix_end = if strip_prefix {
        tokens
            .iter()
            .position(|t| !lexicon.is_designator(t))
            .unwrap_or(tokens.len())
    } else {
        0
    };

    let mut kept = Vec::with_capacity(tokens.len());
    let mut removed = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        if i < prefix_end || i >= suffix_start {
            removed.push(token.clone());
        } else {
            kept.push(token.clone());
        }
    }

    let floor = min_tokens.min(tokens.len()).max(usize::from(!tokens.is_empty()));
    if !removed.is_empty() && kept.len() < floor {
        return StripOutcome {
            tokens: tokens.to_vec(),
            removed: Vec::new(),
            reverted: true,
        };
    }

    StripOutcome {
        tokens: kept,
        removed,
        reverted: false,
    }
}

/// Core tokens with any remaining designator removed. Falls back to the
/// core tokens when every token is a designator.
pub fn effective_tokens(core_tokens: &[String], lexicon: &Lexicon) -> Vec<String> {
    let effective: Vec<String> = core_tokens
        .iter()
        .filter(|t| !lexicon.is_designator(t))
        .cloned()
        .collect();
    if effective.is_empty() {
        core_tokens.to_vec()
    } else {
        effective
    }
}
