use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Confidence clamped to [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Confidence(f64);

impl Confidence {
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self(0.0)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArbiterDecision {
    Same,
    Different,
    Unsure,
}

impl ArbiterDecision {
    /// Case-insensitive parse; anything unrecognized is `Unsure`.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "SAME" => Self::Same,
            "DIFFERENT" => Self::Different,
            _ => Self::Unsure,
        }
    }
}

/// What an arbiter said about a pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArbiterVerdict {
    pub decision: ArbiterDecision,
    pub confidence: Confidence,
    #[serde(default)]
    pub reason: String,
}

impl ArbiterVerdict {
    pub fn new(decision: ArbiterDecision, confidence: f64, reason: impl Into<String>) -> Self {
        Self {
            decision,
            confidence: Confidence::new(confidence),
            reason: reason.into(),
        }
    }

    pub fn unsure(reason: impl Into<String>) -> Self {
        Self::new(ArbiterDecision::Unsure, 0.0, reason)
    }
}

/// A cached verdict with the time it was recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerdictCacheEntry {
    pub verdict: ArbiterVerdict,
    pub recorded_at: DateTime<Utc>,
}
