//! Precision / recall / F1 over labeled data.
//!
//! Only MATCH counts as a positive prediction; REVIEW is tallied separately
//! and otherwise treated as a negative.

use std::collections::{BTreeMap, HashMap};

use namematch_core::errors::NameMatchResult;
use namematch_core::models::{Decision, MatchResult};
use serde::{Deserialize, Serialize};

use crate::matcher::Matcher;

/// A query/reference pair with its ground truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledPair {
    pub query: String,
    pub reference: String,
    pub is_match: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvalMetrics {
    pub total: usize,
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    pub true_negatives: usize,
    pub reviews: usize,
    pub arbiter_used: usize,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Reason codes seen on false positives, by count.
    pub false_positive_reasons: BTreeMap<String, usize>,
}

impl EvalMetrics {
    fn tally(&mut self, result: &MatchResult, predicted_correct: bool, actual_match: bool) {
        self.total += 1;
        if result.decision == Decision::Review {
            self.reviews += 1;
        }
        if result.arbiter_used {
            self.arbiter_used += 1;
        }

        let predicted_match = result.decision == Decision::Match;
        match (predicted_match, actual_match) {
            (true, true) if predicted_correct => self.true_positives += 1,
            (true, _) => {
                self.false_positives += 1;
                for reason in &result.reason_codes {
                    *self
                        .false_positive_reasons
                        .entry(reason.as_str().to_string())
                        .or_default() += 1;
                }
            }
            (false, true) => self.false_negatives += 1,
            (false, false) => self.true_negatives += 1,
        }
    }

    fn finish(mut self) -> Self {
        let tp = self.true_positives as f64;
        if self.true_positives + self.false_positives > 0 {
            self.precision = tp / (self.true_positives + self.false_positives) as f64;
        }
        if self.true_positives + self.false_negatives > 0 {
            self.recall = tp / (self.true_positives + self.false_negatives) as f64;
        }
        if self.precision + self.recall > 0.0 {
            self.f1 = 2.0 * self.precision * self.recall / (self.precision + self.recall);
        }
        self
    }
}

/// Score each pair in isolation: the reference list is just that pair's
/// reference.
pub fn evaluate_pairs(matcher: &Matcher, pairs: &[LabeledPair]) -> NameMatchResult<EvalMetrics> {
    let mut metrics = EvalMetrics::default();
    for pair in pairs {
        let index = matcher.load_reference(&[("0".to_string(), pair.reference.clone())])?;
        let result = matcher.match_one(&index, &pair.query);
        metrics.tally(&result, true, pair.is_match);
    }
    Ok(metrics.finish())
}

/// Match `queries` against `references` and compare with `expected`, which
/// maps a query position to the reference id it should match. Queries
/// absent from `expected` should not match anything.
pub fn evaluate_batch(
    matcher: &Matcher,
    queries: &[String],
    references: &[(String, String)],
    expected: &HashMap<usize, String>,
) -> NameMatchResult<(EvalMetrics, Vec<MatchResult>)> {
    let index = matcher.load_reference(references)?;
    let results = matcher.match_batch(&index, queries);

    let mut metrics = EvalMetrics::default();
    for result in &results {
        let want = expected.get(&result.query_id);
        let correct = want.is_some() && result.matched_id.as_ref() == want;
        metrics.tally(result, correct, want.is_some());
    }
    Ok((metrics.finish(), results))
}
