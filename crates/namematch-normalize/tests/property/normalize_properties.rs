use std::sync::Arc;

use namematch_core::config::MatchConfig;
use namematch_normalize::{Lexicon, Normalizer};
use proptest::prelude::*;

fn normalizer() -> Normalizer {
    Normalizer::new(&MatchConfig::default(), Arc::new(Lexicon::builtin(&[]).unwrap()))
}

fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z]{1,8}",
        "[0-9]{1,4}",
        Just("Inc.".to_string()),
        Just("Corp".to_string()),
        Just("LLC".to_string()),
        Just("Limited".to_string()),
        Just("&".to_string()),
        Just("Société".to_string()),
        Just("O'Brien".to_string()),
    ]
}

fn raw_name() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 0..7).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn prop_normalize_is_deterministic(raw in raw_name()) {
        let n = normalizer();
        let first = n.normalize(&raw);
        prop_assert_eq!(&n.normalize(&first.original), &first);
    }

    #[test]
    fn prop_raw_tokens_are_stable_under_renormalization(raw in raw_name()) {
        let n = normalizer();
        let first = n.normalize(&raw);
        let again = n.normalize(&first.raw_tokens.join(" "));
        prop_assert_eq!(again.raw_tokens, first.raw_tokens);
    }

    #[test]
    fn prop_stripping_never_drops_below_two(raw in raw_name()) {
        let n = normalizer();
        let name = n.normalize(&raw);
        let floor = name.raw_tokens.len().min(2);
        prop_assert!(name.core_tokens.len() >= floor);
        prop_assert_eq!(name.core_tokens.is_empty(), name.raw_tokens.is_empty());
        prop_assert!(!name.effective_tokens.is_empty() || name.core_tokens.is_empty());
    }

    #[test]
    fn prop_acronym_respects_min_length(raw in raw_name()) {
        let n = normalizer();
        let name = n.normalize(&raw);
        if let Some(acronym) = &name.acronym {
            prop_assert!(acronym.chars().count() >= 3);
        }
    }
}
