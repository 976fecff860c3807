//! Raw pairwise features. Every function here returns a value in [0, 1].

use std::collections::HashSet;

use namematch_core::models::{AcronymRelation, NormalizedName};

/// `|A ∩ B| / min(|A|, |B|)` over token sets; 0 when either side is empty.
pub fn token_overlap(a: &[String], b: &[String]) -> f64 {
    let a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let b: HashSet<&str> = b.iter().map(String::as_str).collect();
    let smaller = a.len().min(b.len());
    if smaller == 0 {
        return 0.0;
    }
    a.intersection(&b).count() as f64 / smaller as f64
}

/// Normalized Levenshtein similarity of the token-sorted keys, so word order
/// does not matter.
pub fn token_sort_similarity(a: &[String], b: &[String]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    strsim::normalized_levenshtein(&sorted_key(a), &sorted_key(b)).clamp(0.0, 1.0)
}

fn sorted_key(tokens: &[String]) -> String {
    let mut sorted: Vec<&str> = tokens.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted.join(" ")
}

/// How the acronyms of two names relate, and whether the matching acronym
/// is on the collision list.
pub fn acronym_relation(query: &NormalizedName, candidate: &NormalizedName) -> AcronymRelation {
    if let (Some(qa), Some(ca)) = (&query.acronym, &candidate.acronym) {
        if qa == ca {
            return if query.collision_acronym || candidate.collision_acronym {
                AcronymRelation::Collision
            } else {
                AcronymRelation::Exact
            };
        }
    }

    for (side, other) in [(query, candidate), (candidate, query)] {
        let Some(acronym) = &side.acronym else {
            continue;
        };
        if other.effective_tokens.len() >= 2 && *acronym == other.initialism() {
            return if side.collision_acronym {
                AcronymRelation::Collision
            } else {
                AcronymRelation::Initialism
            };
        }
    }

    AcronymRelation::None
}

/// Which side, if any, is a bare non-collision acronym of the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expansion {
    None,
    Query,
    Candidate,
}

impl Expansion {
    pub fn is_expanded(self) -> bool {
        self != Self::None
    }
}

/// Detect acronym expansion: one side's whole effective core is a single
/// non-collision acronym equal to the other side's initialism.
pub fn expansion(query: &NormalizedName, candidate: &NormalizedName) -> Expansion {
    let expands = |short: &NormalizedName, long: &NormalizedName| {
        short.is_bare_acronym()
            && !short.collision_acronym
            && long.effective_tokens.len() >= 2
            && short.acronym.as_deref() == Some(long.initialism().as_str())
    };
    if expands(query, candidate) {
        Expansion::Query
    } else if expands(candidate, query) {
        Expansion::Candidate
    } else {
        Expansion::None
    }
}

/// Numeric conflict between two names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericConflict {
    None,
    /// Both sides carry numbers and the sets differ.
    Mismatch,
    /// Only one side carries numbers.
    OneSideOnly,
}

pub fn numeric_conflict(query: &NormalizedName, candidate: &NormalizedName) -> NumericConflict {
    match (query.numeric_tokens.is_empty(), candidate.numeric_tokens.is_empty()) {
        (true, true) => NumericConflict::None,
        (false, false) if query.numeric_tokens == candidate.numeric_tokens => NumericConflict::None,
        (false, false) => NumericConflict::Mismatch,
        _ => NumericConflict::OneSideOnly,
    }
}
