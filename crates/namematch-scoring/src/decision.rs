//! Ranking and the threshold/margin decision.

use namematch_core::config::Thresholds;
use namematch_core::models::{Decision, ScoredCandidate};

/// Absorbs float noise in `best - second` comparisons.
const MARGIN_EPSILON: f64 = 1e-9;

/// Sort by score descending; ties go to the lower reference position.
pub fn rank(mut scored: Vec<ScoredCandidate>) -> Vec<ScoredCandidate> {
    scored.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.ref_idx.cmp(&b.ref_idx))
    });
    scored
}

/// Decision over a ranked candidate list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranking {
    pub decision: Decision,
    pub best: f64,
    /// `None` with a single candidate.
    pub runner_up: Option<f64>,
    /// `None` with a single candidate.
    pub margin: Option<f64>,
}

/// MATCH iff best >= t_high and best - second >= margin; NO_MATCH iff
/// best <= t_low; REVIEW otherwise. A missing second scores 0.
pub fn decide_scores(best: f64, second: f64, thresholds: &Thresholds) -> Decision {
    if best >= thresholds.t_high && best - second + MARGIN_EPSILON >= thresholds.margin {
        Decision::Match
    } else if best <= thresholds.t_low {
        Decision::NoMatch
    } else {
        Decision::Review
    }
}

/// Decide over candidates already sorted by [`rank`]. An empty list is
/// NO_MATCH.
pub fn decide(ranked: &[ScoredCandidate], thresholds: &Thresholds) -> Ranking {
    let Some(best) = ranked.first().map(|c| c.score) else {
        return Ranking {
            decision: Decision::NoMatch,
            best: 0.0,
            runner_up: None,
            margin: None,
        };
    };
    let runner_up = ranked.get(1).map(|c| c.score);
    Ranking {
        decision: decide_scores(best, runner_up.unwrap_or(0.0), thresholds),
        best,
        runner_up,
        margin: runner_up.map(|second| best - second),
    }
}
