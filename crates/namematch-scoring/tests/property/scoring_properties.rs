use std::sync::Arc;

use namematch_core::config::{MatchConfig, Thresholds};
use namematch_core::models::{AcronymRelation, Decision};
use namematch_normalize::{Lexicon, Normalizer};
use namematch_scoring::{decide_scores, Scorer};
use proptest::prelude::*;

fn name() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof!["Acme", "Widget", "Inc", "Holdings", "IBM", "[0-9]{2,4}", "[A-Za-z]{2,7}"],
        1..5,
    )
    .prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn scores_stay_in_unit_interval(q in name(), c in name(), sem in proptest::option::of(-1.0f64..1.0)) {
        let n = Normalizer::new(&MatchConfig::default(), Arc::new(Lexicon::builtin(&[]).unwrap()));
        let scorer = Scorer::new(&MatchConfig::default());
        let s = scorer.score(&n.normalize(&q), &n.normalize(&c), 0, vec![], sem);
        prop_assert!((0.0..=1.0).contains(&s.score));
        prop_assert!((0.0..=1.0).contains(&s.features.token_overlap));
        prop_assert!((0.0..=1.0).contains(&s.features.fuzzy_similarity));
    }

    #[test]
    fn acronym_without_lexical_support_stays_below_match(q in name(), c in name(), sem in proptest::option::of(0.0f64..=1.0)) {
        let config = MatchConfig::default();
        let n = Normalizer::new(&config, Arc::new(Lexicon::builtin(&[]).unwrap()));
        let s = Scorer::new(&config).score(&n.normalize(&q), &n.normalize(&c), 0, vec![], sem);
        let floor = config.penalties.lexical_floor;
        let acronym_only = matches!(
            s.features.acronym_relation,
            AcronymRelation::Exact | AcronymRelation::Initialism
        ) && s.features.token_overlap < floor
            && s.features.fuzzy_similarity < floor;
        if acronym_only {
            prop_assert!(s.score < config.thresholds.t_high);
        }
    }

    #[test]
    fn widening_the_margin_never_demotes_a_match(
        best in 0.0f64..=1.0,
        second in 0.0f64..=1.0,
        lower in 0.0f64..=1.0,
    ) {
        let t = Thresholds::default();
        let second = second.min(best);
        let lower = lower.min(second);
        if decide_scores(best, second, &t) == Decision::Match {
            prop_assert_eq!(decide_scores(best, lower, &t), Decision::Match);
        }
    }

    #[test]
    fn match_requires_high_score_and_margin(best in 0.0f64..=1.0, second in 0.0f64..=1.0) {
        let t = Thresholds::default();
        let second = second.min(best);
        if decide_scores(best, second, &t) == Decision::Match {
            prop_assert!(best >= t.t_high);
            prop_assert!(best - second >= t.margin - 1e-6);
        }
    }
}
