//! Property tests for batch matching.

use namematch_core::config::MatchConfig;
use namematch_engine::Matcher;
use proptest::prelude::*;

const REFERENCES: &[(&str, &str)] = &[
    ("r1", "International Business Machines"),
    ("r2", "Globex Holdings"),
    ("r3", "Acme Widget Holdings"),
    ("r4", "Acme Widget Partners"),
    ("r5", "Initech Software"),
    ("r6", "Acme 2024 Fund"),
];

fn name_strategy() -> impl Strategy<Value = String> {
    let words = prop::sample::select(vec![
        "acme", "widget", "holdings", "partners", "globex", "ibm", "initech", "software", "inc",
        "llc", "2024", "2023", "fund", "",
    ]);
    prop::collection::vec(words, 0..5).prop_map(|w| w.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn batch_agrees_with_single_queries(queries in prop::collection::vec(name_strategy(), 0..12)) {
        let matcher = Matcher::new(MatchConfig::default()).unwrap();
        let entries: Vec<(String, String)> = REFERENCES
            .iter()
            .map(|(id, name)| (id.to_string(), name.to_string()))
            .collect();
        let index = matcher.load_reference(&entries).unwrap();

        let batch = matcher.match_batch(&index, &queries);
        prop_assert_eq!(batch.len(), queries.len());

        for (i, result) in batch.iter().enumerate() {
            prop_assert_eq!(result.query_id, i);
            let mut single = matcher.match_one(&index, &queries[i]);
            single.query_id = i;
            prop_assert_eq!(result, &single);
        }
    }

    #[test]
    fn matched_id_only_on_match(query in name_strategy()) {
        let matcher = Matcher::new(MatchConfig::default()).unwrap();
        let entries: Vec<(String, String)> = REFERENCES
            .iter()
            .map(|(id, name)| (id.to_string(), name.to_string()))
            .collect();
        let index = matcher.load_reference(&entries).unwrap();

        let result = matcher.match_one(&index, &query);
        prop_assert_eq!(
            result.matched_id.is_some(),
            result.decision == namematch_core::models::Decision::Match
        );
        prop_assert!((0.0..=1.0).contains(&result.score));
        prop_assert!(result.top_candidates.len() <= 5);
    }
}
