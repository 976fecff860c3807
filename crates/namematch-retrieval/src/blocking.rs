//! Inverted index `(key kind, key value) -> reference positions`.

use std::collections::HashMap;

use namematch_core::models::{KeyKind, NormalizedName};
use tracing::info;

/// Immutable once built. Posting lists are in ascending reference order.
#[derive(Debug, Default)]
pub struct BlockingIndex {
    postings: HashMap<KeyKind, HashMap<String, Vec<usize>>>,
    len: usize,
}

impl BlockingIndex {
    pub fn build<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a NormalizedName>,
    {
        let mut postings: HashMap<KeyKind, HashMap<String, Vec<usize>>> = HashMap::new();
        let mut len = 0;
        for (idx, name) in names.into_iter().enumerate() {
            len = idx + 1;
            for (kind, value) in &name.blocking_keys {
                postings
                    .entry(*kind)
                    .or_default()
                    .entry(value.clone())
                    .or_default()
                    .push(idx);
            }
        }

        let index = Self { postings, len };
        info!(
            references = len,
            keys = index.key_count(),
            "blocking index built"
        );
        index
    }

    /// Reference positions filed under `(kind, value)`.
    pub fn lookup(&self, kind: KeyKind, value: &str) -> &[usize] {
        self.postings
            .get(&kind)
            .and_then(|m| m.get(value))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of references indexed.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct keys across all kinds.
    pub fn key_count(&self) -> usize {
        self.postings.values().map(HashMap::len).sum()
    }
}
