//! Candidate retrieval with caps.
//!
//! Truncation keeps, in order: candidates with more sources, then those
//! whose best source is more specific (`core > acronym > prefix3 > prefix2 >
//! first > ann`), then earlier-seen candidates, then lower reference
//! positions.

use std::collections::HashMap;

use namematch_core::config::CandidateConfig;
use namematch_core::models::{Candidate, CandidateSource, NormalizedName};
use tracing::debug;

use crate::blocking::BlockingIndex;

/// Candidates for one query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Retrieval {
    /// In truncation-priority order.
    pub candidates: Vec<Candidate>,
    /// A cap removed at least one candidate.
    pub truncated: bool,
}

struct Entry {
    candidate: Candidate,
    first_seen: usize,
}

fn priority_sort(entries: &mut [Entry]) {
    entries.sort_by(|a, b| {
        b.candidate
            .sources
            .len()
            .cmp(&a.candidate.sources.len())
            .then_with(|| a.candidate.best_specificity().cmp(&b.candidate.best_specificity()))
            .then_with(|| a.first_seen.cmp(&b.first_seen))
            .then_with(|| a.candidate.ref_idx.cmp(&b.candidate.ref_idx))
    });
}

/// Union blocking hits for every key of `query` with `ann_hits` (reference
/// position and cosine, best first), applying the lexical, ANN and total
/// caps from `caps`.
pub fn retrieve(
    query: &NormalizedName,
    index: &BlockingIndex,
    ann_hits: &[(usize, f64)],
    caps: &CandidateConfig,
) -> Retrieval {
    let mut truncated = false;
    let mut seen = 0usize;

    let mut lexical: Vec<Entry> = Vec::new();
    let mut by_ref: HashMap<usize, usize> = HashMap::new();
    for (kind, value) in &query.blocking_keys {
        for &ref_idx in index.lookup(*kind, value) {
            let slot = *by_ref.entry(ref_idx).or_insert_with(|| {
                lexical.push(Entry {
                    candidate: Candidate::new(ref_idx),
                    first_seen: seen,
                });
                seen += 1;
                lexical.len() - 1
            });
            lexical[slot]
                .candidate
                .sources
                .insert(CandidateSource::Blocking(*kind));
        }
    }
    if lexical.len() > caps.max_candidates_lexical {
        priority_sort(&mut lexical);
        lexical.truncate(caps.max_candidates_lexical);
        truncated = true;
    }

    let ann_kept = if ann_hits.len() > caps.max_candidates_ann {
        truncated = true;
        &ann_hits[..caps.max_candidates_ann]
    } else {
        ann_hits
    };

    let mut merged = lexical;
    let mut by_ref: HashMap<usize, usize> = merged
        .iter()
        .enumerate()
        .map(|(slot, e)| (e.candidate.ref_idx, slot))
        .collect();
    for &(ref_idx, _) in ann_kept {
        let slot = *by_ref.entry(ref_idx).or_insert_with(|| {
            merged.push(Entry {
                candidate: Candidate::new(ref_idx),
                first_seen: seen,
            });
            seen += 1;
            merged.len() - 1
        });
        merged[slot].candidate.sources.insert(CandidateSource::Ann);
    }

    priority_sort(&mut merged);
    if merged.len() > caps.max_candidates_total {
        merged.truncate(caps.max_candidates_total);
        truncated = true;
    }

    debug!(
        query = %query.core_key,
        candidates = merged.len(),
        truncated,
        "candidates retrieved"
    );

    Retrieval {
        candidates: merged.into_iter().map(|e| e.candidate).collect(),
        truncated,
    }
}
