use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use namematch_arbiter::ArbiterGate;
use namematch_core::config::MatchConfig;
use namematch_core::errors::ArbiterError;
use namematch_core::models::{ArbiterDecision, ArbiterEvidence, ArbiterVerdict, NormalizedName};
use namematch_core::traits::ArbiterProvider;
use namematch_normalize::{Lexicon, Normalizer};
use namematch_scoring::{decide, rank, Scorer};
use proptest::prelude::*;

/// Run `f(thread_index)` on `n` scoped threads.
fn on_threads<F: Fn(usize) + Send + Sync>(n: usize, f: F) {
    std::thread::scope(|s| {
        for i in 0..n {
            let f = &f;
            s.spawn(move || f(i));
        }
    });
}

struct CountingUnsure(AtomicUsize);

impl ArbiterProvider for CountingUnsure {
    fn arbitrate(&self, _e: &ArbiterEvidence) -> Result<ArbiterVerdict, ArbiterError> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(ArbiterVerdict::new(ArbiterDecision::Unsure, 0.0, ""))
    }

    fn name(&self) -> &str {
        "counting"
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn calls_never_exceed_cap(cap in 0usize..6, queries in 1usize..10, threads in 1usize..4) {
        let mut config = MatchConfig::default();
        config.arbiter.global_call_cap = cap;
        let n = Normalizer::new(&config, Arc::new(Lexicon::builtin(&[]).unwrap()));
        let scorer = Scorer::new(&config);
        let provider = Arc::new(CountingUnsure(AtomicUsize::new(0)));
        let dyn_provider: Arc<dyn ArbiterProvider> = provider.clone();
        let gate = ArbiterGate::new(&config, Some(dyn_provider));

        let cases: Vec<(NormalizedName, Vec<NormalizedName>)> = (0..queries)
            .map(|i| {
                let q = n.normalize(&format!("Acme Widget {}", "x".repeat(i + 1)));
                let refs = vec![
                    n.normalize(&format!("Acme Widget {} Holdings", "x".repeat(i + 1))),
                    n.normalize(&format!("Acme Widget {} Partners", "x".repeat(i + 1))),
                ];
                (q, refs)
            })
            .collect();

        on_threads(threads, |t| {
            for (i, (q, refs)) in cases.iter().enumerate() {
                if i % threads != t {
                    continue;
                }
                let ranked = rank(
                    refs.iter()
                        .enumerate()
                        .map(|(j, r)| scorer.score(q, r, j, vec![], None))
                        .collect(),
                );
                let decision = decide(&ranked, &config.thresholds).decision;
                gate.maybe_arbitrate(q, &ranked, refs, decision);
            }
        });

        prop_assert!(provider.0.load(Ordering::SeqCst) <= cap);
        prop_assert_eq!(provider.0.load(Ordering::SeqCst), gate.budget().used());
    }
}
