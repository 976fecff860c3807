//! Exact top-k cosine index over reference embeddings.
//!
//! Immutable after construction. Vectors are stored unit-length so cosine
//! is a dot product; references without an embedding never appear.

use std::sync::Arc;

use rayon::prelude::*;

use crate::engine::l2_normalize;

pub struct AnnIndex {
    vectors: Vec<Option<Arc<Vec<f32>>>>,
    dimensions: usize,
}

impl AnnIndex {
    /// Build from per-reference embeddings, indexed by reference position.
    pub fn build(vectors: Vec<Option<Arc<Vec<f32>>>>) -> Self {
        let dimensions = vectors
            .iter()
            .flatten()
            .map(|v| v.len())
            .next()
            .unwrap_or(0);
        let vectors = vectors
            .into_iter()
            .map(|v| {
                v.filter(|v| v.len() == dimensions).map(|v| {
                    let mut owned = Vec::clone(&v);
                    l2_normalize(&mut owned);
                    Arc::new(owned)
                })
            })
            .collect();
        Self {
            vectors,
            dimensions,
        }
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.iter().all(Option::is_none)
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Cosine between `query` and reference `ref_idx`, if it has a vector.
    pub fn similarity(&self, ref_idx: usize, query: &[f32]) -> Option<f64> {
        let v = self.vectors.get(ref_idx)?.as_ref()?;
        (query.len() == v.len()).then(|| dot(query, v))
    }

    /// The `k` nearest references by cosine, best first; ties go to the
    /// lower reference index.
    pub fn query(&self, query: &[f32], k: usize) -> Vec<(usize, f64)> {
        if k == 0 || query.len() != self.dimensions || self.dimensions == 0 {
            return Vec::new();
        }
        let mut scored: Vec<(usize, f64)> = self
            .vectors
            .par_iter()
            .enumerate()
            .filter_map(|(i, v)| v.as_ref().map(|v| (i, dot(query, v))))
            .collect();
        scored.sort_by(|a, b| {
            b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0))
        });
        scored.truncate(k);
        scored
    }
}

fn dot(a: &[f32], b: &[f32]) -> f64 {
    let d: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    f64::from(d).clamp(-1.0, 1.0)
}
