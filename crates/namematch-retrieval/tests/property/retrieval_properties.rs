use std::sync::Arc;

use namematch_core::config::{CandidateConfig, MatchConfig};
use namematch_core::models::NormalizedName;
use namematch_normalize::{Lexicon, Normalizer};
use namematch_retrieval::{retrieve, BlockingIndex};
use proptest::prelude::*;

fn normalizer() -> Normalizer {
    Normalizer::new(&MatchConfig::default(), Arc::new(Lexicon::builtin(&[]).unwrap()))
}

fn name() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof!["acme", "widget", "global", "tools", "inc", "[a-z]{3,6}"], 1..4)
        .prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn caps_are_never_exceeded(
        names in prop::collection::vec(name(), 1..40),
        query in name(),
        total in 1usize..10,
        lexical in 1usize..10,
        ann in 0usize..10,
        ann_len in 0usize..20,
    ) {
        let n = normalizer();
        let refs: Vec<NormalizedName> = names.iter().map(|s| n.normalize(s)).collect();
        let index = BlockingIndex::build(&refs);
        let hits: Vec<(usize, f64)> = (0..ann_len.min(refs.len()))
            .map(|i| (i, 1.0 - i as f64 * 0.01))
            .collect();
        let caps = CandidateConfig {
            max_candidates_total: total,
            max_candidates_lexical: lexical,
            max_candidates_ann: ann,
            use_first_token_key: true,
        };

        let out = retrieve(&n.normalize(&query), &index, &hits, &caps);
        prop_assert!(out.candidates.len() <= total);
        prop_assert!(out.candidates.iter().filter(|c| c.is_lexical()).count() <= lexical);
        prop_assert!(out.candidates.iter().filter(|c| c.is_ann()).count() <= ann);

        let mut seen: Vec<usize> = out.candidates.iter().map(|c| c.ref_idx).collect();
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), out.candidates.len());
    }

    #[test]
    fn retrieval_is_deterministic(names in prop::collection::vec(name(), 1..30), query in name()) {
        let n = normalizer();
        let refs: Vec<NormalizedName> = names.iter().map(|s| n.normalize(s)).collect();
        let index = BlockingIndex::build(&refs);
        let q = n.normalize(&query);
        let caps = CandidateConfig::default();
        prop_assert_eq!(retrieve(&q, &index, &[], &caps), retrieve(&q, &index, &[], &caps));
    }
}
