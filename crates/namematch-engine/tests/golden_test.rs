use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use namematch_core::config::MatchConfig;
use namematch_core::errors::ArbiterError;
use namematch_core::models::{ArbiterDecision, ArbiterEvidence, ArbiterVerdict};
use namematch_core::traits::ArbiterProvider;
use namematch_engine::Matcher;
use test_fixtures::load_scenarios;

struct CountingArbiter(AtomicUsize);

impl ArbiterProvider for CountingArbiter {
    fn arbitrate(&self, _e: &ArbiterEvidence) -> Result<ArbiterVerdict, ArbiterError> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(ArbiterVerdict::new(ArbiterDecision::Same, 1.0, "golden"))
    }

    fn name(&self) -> &str {
        "counting"
    }
}

#[test]
fn golden_scenarios() {
    for scenario in load_scenarios() {
        let arbiter = Arc::new(CountingArbiter(AtomicUsize::new(0)));
        let mut matcher = Matcher::new(MatchConfig::default()).unwrap();
        if scenario.arbiter_calls.is_some() {
            let provider: Arc<dyn ArbiterProvider> = arbiter.clone();
            matcher = matcher.with_arbiter_provider(provider);
        }

        let index = matcher.load_reference(&scenario.references).unwrap();
        let result = matcher.match_one(&index, &scenario.query);

        assert_eq!(
            result.decision.as_str(),
            scenario.expected_decision,
            "{}: decision (score {})",
            scenario.name,
            result.score
        );
        assert_eq!(
            result.matched_id, scenario.expected_matched_id,
            "{}: matched id",
            scenario.name
        );
        for reason in &scenario.expected_reasons {
            assert!(
                result.reason_codes.iter().any(|r| r.as_str() == reason),
                "{}: missing reason {} in {:?}",
                scenario.name,
                reason,
                result.reason_codes
            );
        }
        for warning in &scenario.expected_warnings {
            assert!(
                result.warnings.iter().any(|w| w.as_str() == warning),
                "{}: missing warning {} in {:?}",
                scenario.name,
                warning,
                result.warnings
            );
        }
        if let Some(calls) = scenario.arbiter_calls {
            assert_eq!(arbiter.0.load(Ordering::SeqCst), calls, "{}: arbiter calls", scenario.name);
            assert_eq!(result.arbiter_used, calls > 0, "{}: arbiter used", scenario.name);
        }
    }
}
