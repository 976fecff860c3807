use std::fmt;

use namematch_core::constants::PAIR_KEY_SEPARATOR;
use serde::{Deserialize, Serialize};

/// Order-independent identity of a (query, candidate) pair: the blake3 hex
/// digest of both core keys, sorted, joined by a unit separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairKey(String);

impl PairKey {
    pub fn new(a: &str, b: &str) -> Self {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        let mut buf = [0u8; 4];
        let mut hasher = blake3::Hasher::new();
        hasher.update(first.as_bytes());
        hasher.update(PAIR_KEY_SEPARATOR.encode_utf8(&mut buf).as_bytes());
        hasher.update(second.as_bytes());
        Self(hasher.finalize().to_hex().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
