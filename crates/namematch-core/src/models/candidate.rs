use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::keys::KeyKind;

/// Where a candidate came from. Displays as `blocking:<kind>` or `ann`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum CandidateSource {
    Blocking(KeyKind),
    Ann,
}

impl CandidateSource {
    /// Lower is more specific. ANN-only candidates rank below every key kind.
    pub fn specificity_rank(self) -> u8 {
        match self {
            Self::Blocking(kind) => kind.specificity_rank(),
            Self::Ann => KeyKind::ALL.len() as u8,
        }
    }
}

impl fmt::Display for CandidateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blocking(kind) => write!(f, "blocking:{kind}"),
            Self::Ann => f.write_str("ann"),
        }
    }
}

impl From<CandidateSource> for String {
    fn from(source: CandidateSource) -> Self {
        source.to_string()
    }
}

impl TryFrom<String> for CandidateSource {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == "ann" {
            return Ok(Self::Ann);
        }
        value
            .strip_prefix("blocking:")
            .and_then(KeyKind::parse)
            .map(Self::Blocking)
            .ok_or_else(|| format!("unknown candidate source: {value}"))
    }
}

/// A reference entry surfaced for a query, by index into the reference list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub ref_idx: usize,
    pub sources: BTreeSet<CandidateSource>,
}

impl Candidate {
    pub fn new(ref_idx: usize) -> Self {
        Self {
            ref_idx,
            sources: BTreeSet::new(),
        }
    }

    /// Rank of the most specific source (lower is better).
    pub fn best_specificity(&self) -> u8 {
        self.sources
            .iter()
            .map(|s| s.specificity_rank())
            .min()
            .unwrap_or(u8::MAX)
    }

    pub fn is_lexical(&self) -> bool {
        self.sources
            .iter()
            .any(|s| matches!(s, CandidateSource::Blocking(_)))
    }

    pub fn is_ann(&self) -> bool {
        self.sources.contains(&CandidateSource::Ann)
    }
}
