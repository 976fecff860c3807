use serde::{Deserialize, Serialize};

use super::codes::{ReasonCode, WarningCode};
use super::decision::Decision;

/// A ranked candidate kept on the result for audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopCandidate {
    pub ref_id: String,
    pub ref_name: String,
    pub score: f64,
    pub reason_codes: Vec<ReasonCode>,
}

/// The externally visible outcome for one query name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub query_id: usize,
    pub query_name: String,
    /// Set only when `decision` is MATCH.
    pub matched_id: Option<String>,
    pub matched_name: Option<String>,
    pub decision: Decision,
    pub score: f64,
    pub runner_up_score: Option<f64>,
    pub margin: Option<f64>,
    pub arbiter_used: bool,
    pub reason_codes: Vec<ReasonCode>,
    pub warnings: Vec<WarningCode>,
    pub candidate_count: usize,
    pub top_candidates: Vec<TopCandidate>,
}

impl MatchResult {
    /// A NO_MATCH result with no candidate information.
    pub fn no_match(query_id: usize, query_name: impl Into<String>) -> Self {
        Self {
            query_id,
            query_name: query_name.into(),
            matched_id: None,
            matched_name: None,
            decision: Decision::NoMatch,
            score: 0.0,
            runner_up_score: None,
            margin: None,
            arbiter_used: false,
            reason_codes: Vec::new(),
            warnings: Vec::new(),
            candidate_count: 0,
            top_candidates: Vec::new(),
        }
    }

    pub fn has_reason(&self, code: ReasonCode) -> bool {
        self.reason_codes.contains(&code)
    }

    pub fn has_warning(&self, code: WarningCode) -> bool {
        self.warnings.contains(&code)
    }
}
