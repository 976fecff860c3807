//! Hashed character n-gram provider.
//!
//! Produces deterministic dense vectors by hashing character trigrams and
//! whole tokens into fixed-dimension buckets. Catches spelling and
//! transliteration variants; has no notion of meaning.

use namematch_core::errors::EmbeddingError;
use namematch_core::traits::EmbeddingProvider;

const NGRAM: usize = 3;
/// Whole tokens count more than any single trigram.
const TOKEN_WEIGHT: f32 = 2.0;

pub struct HashedNgramEmbedder {
    dimensions: usize,
}

impl HashedNgramEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    /// FNV-1a into a bucket index.
    fn bucket(feature: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in feature.as_bytes() {
            h ^= u64::from(*b);
            h = h.wrapping_mul(0x100000001b3);
        }
        (h % dims as u64) as usize
    }

    fn vector(&self, text: &str) -> Vec<f32> {
        let mut vec = vec![0.0f32; self.dimensions];
        for token in text.split_whitespace() {
            vec[Self::bucket(token, self.dimensions)] += TOKEN_WEIGHT;

            let padded: Vec<char> = format!(" {token} ").chars().collect();
            for window in padded.windows(NGRAM) {
                let gram: String = window.iter().collect();
                vec[Self::bucket(&gram, self.dimensions)] += 1.0;
            }
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

impl EmbeddingProvider for HashedNgramEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(self.vector(text))
    }

    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        Ok(texts.iter().map(|t| self.vector(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashed-ngram"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cosine(a: &[f32], b: &[f32]) -> f32 {
        a.iter().zip(b).map(|(x, y)| x * y).sum()
    }

    #[test]
    fn empty_text_returns_zero_vector() {
        let p = HashedNgramEmbedder::new(64);
        let v = p.embed("").unwrap();
        assert_eq!(v.len(), 64);
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn output_is_unit_length() {
        let p = HashedNgramEmbedder::new(256);
        let v = p.embed("acme widget holdings").unwrap();
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5, "expected unit norm, got {norm}");
    }

    #[test]
    fn deterministic() {
        let p = HashedNgramEmbedder::new(128);
        assert_eq!(p.embed("acme").unwrap(), p.embed("acme").unwrap());
    }

    #[test]
    fn batch_matches_individual() {
        let p = HashedNgramEmbedder::new(128);
        let texts = vec!["acme widget".to_string(), "globex".to_string()];
        let batch = p.embed_batch(&texts).unwrap();
        for (i, text) in texts.iter().enumerate() {
            assert_eq!(batch[i], p.embed(text).unwrap());
        }
    }

    #[test]
    fn spelling_variants_are_closer_than_unrelated_names() {
        let p = HashedNgramEmbedder::new(512);
        let a = p.embed("mueller logistics").unwrap();
        let b = p.embed("muller logistics").unwrap();
        let c = p.embed("globex chemicals").unwrap();
        assert!(cosine(&a, &b) > cosine(&a, &c));
    }
}
