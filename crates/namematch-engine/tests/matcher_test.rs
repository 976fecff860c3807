use std::collections::HashMap;
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use namematch_core::config::MatchConfig;
use namematch_core::errors::{ArbiterError, EmbeddingError, LexiconError, NameMatchError};
use namematch_core::models::{
    ArbiterDecision, ArbiterEvidence, ArbiterVerdict, Decision, ReasonCode, WarningCode,
};
use namematch_core::traits::{ArbiterProvider, EmbeddingProvider};
use namematch_embeddings::HashedNgramEmbedder;
use namematch_engine::{evaluate_batch, evaluate_pairs, LabeledPair, Matcher};
use test_fixtures::load_fixture;

fn refs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(id, name)| (id.to_string(), name.to_string()))
        .collect()
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

struct SameArbiter {
    confidence: f64,
    calls: AtomicUsize,
}

impl SameArbiter {
    fn new(confidence: f64) -> Arc<Self> {
        Arc::new(Self {
            confidence,
            calls: AtomicUsize::new(0),
        })
    }
}

impl ArbiterProvider for SameArbiter {
    fn arbitrate(&self, _e: &ArbiterEvidence) -> Result<ArbiterVerdict, ArbiterError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(ArbiterVerdict::new(ArbiterDecision::Same, self.confidence, "same_entity"))
    }

    fn name(&self) -> &str {
        "same"
    }
}

#[test]
fn batch_preserves_input_order() {
    let matcher = Matcher::new(MatchConfig::default()).unwrap();
    let index = matcher
        .load_reference(&refs(&[
            ("r1", "International Business Machines"),
            ("r2", "Globex Holdings"),
        ]))
        .unwrap();

    let queries = names(&["Umbrella", "Globex Holdings Ltd", "IBM", ""]);
    let results = matcher.match_batch(&index, &queries);

    assert_eq!(results.len(), 4);
    for (i, r) in results.iter().enumerate() {
        assert_eq!(r.query_id, i);
        assert_eq!(r.query_name, queries[i]);
    }
    assert_eq!(results[0].decision, Decision::NoMatch);
    assert_eq!(results[1].matched_id.as_deref(), Some("r2"));
    assert_eq!(results[2].decision, Decision::Review);
    assert!(results[2].matched_id.is_none());
    assert!(results[3].has_warning(WarningCode::EmptyInput));
}

#[test]
fn match_only_sets_matched_fields_on_match() {
    let matcher = Matcher::new(MatchConfig::default()).unwrap();
    let index = matcher
        .load_reference(&refs(&[("r1", "Acme Inc"), ("r2", "Acme Corp")]))
        .unwrap();

    let result = matcher.match_one(&index, "Acme Inc");
    assert_eq!(result.decision, Decision::Review);
    assert!(result.matched_id.is_none());
    assert!(result.matched_name.is_none());
    assert_eq!(result.candidate_count, 2);
    assert_eq!(result.margin, Some(0.0));
    assert_eq!(result.top_candidates[0].ref_id, "r1");
}

#[test]
fn single_candidate_has_no_runner_up() {
    let matcher = Matcher::new(MatchConfig::default()).unwrap();
    let index = matcher
        .load_reference(&refs(&[("r1", "Globex Holdings")]))
        .unwrap();
    let result = matcher.match_one(&index, "Globex Holdings LLC");
    assert_eq!(result.decision, Decision::Match);
    assert_eq!(result.matched_name.as_deref(), Some("Globex Holdings"));
    assert_eq!(result.runner_up_score, None);
    assert_eq!(result.margin, None);
}

#[test]
fn audit_keeps_top_five() {
    let matcher = Matcher::new(MatchConfig::default()).unwrap();
    let entries: Vec<(String, String)> = ["Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Eta"]
        .iter()
        .enumerate()
        .map(|(i, w)| (format!("r{i}"), format!("Acme {w}")))
        .collect();
    let index = matcher.load_reference(&entries).unwrap();

    let result = matcher.match_one(&index, "Acme Omega");
    assert_eq!(result.candidate_count, 7);
    assert_eq!(result.top_candidates.len(), 5);
}

#[test]
fn duplicate_reference_ids_are_rejected() {
    let matcher = Matcher::new(MatchConfig::default()).unwrap();
    let err = matcher
        .load_reference(&refs(&[("r1", "Acme"), ("r1", "Globex")]))
        .err()
        .unwrap();
    assert!(matches!(err, NameMatchError::DuplicateReferenceId { id } if id == "r1"));
}

#[test]
fn invalid_config_is_rejected() {
    let mut config = MatchConfig::default();
    config.thresholds.t_low = 0.95;
    assert!(matches!(Matcher::new(config), Err(NameMatchError::Config(_))));
}

#[test]
fn lexicon_directory_is_used() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("designators_global.txt"), "# legal forms\nzrt\nkft\n").unwrap();
    fs::write(dir.path().join("location.txt"), "hungary\n").unwrap();

    let mut config = MatchConfig::default();
    config.lexicon.dir = Some(dir.path().display().to_string());
    config.normalization.strip_categories = vec!["location".to_string()];
    let matcher = Matcher::new(config).unwrap();

    let n = matcher.normalizer().normalize("Duna Hungary Kft");
    assert_eq!(n.core_key, "duna");
    assert_eq!(n.removed_designators, vec!["kft".to_string()]);
    assert_eq!(n.removed_categories, vec!["hungary".to_string()]);
}

#[test]
fn missing_designator_list_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = MatchConfig::default();
    config.lexicon.dir = Some(dir.path().display().to_string());
    assert!(matches!(
        Matcher::new(config),
        Err(NameMatchError::Lexicon(LexiconError::MissingFile { .. }))
    ));
}

#[test]
fn arbiter_resolves_close_race() {
    let arbiter = SameArbiter::new(0.9);
    let provider: Arc<dyn ArbiterProvider> = arbiter.clone();
    let matcher = Matcher::new(MatchConfig::default())
        .unwrap()
        .with_arbiter_provider(provider);
    let index = matcher
        .load_reference(&refs(&[("h", "Acme Widget Holdings"), ("p", "Acme Widget Partners")]))
        .unwrap();

    let result = matcher.match_one(&index, "Acme Widget");
    assert_eq!(result.decision, Decision::Match);
    assert_eq!(result.matched_id.as_deref(), Some("h"));
    assert!(result.arbiter_used);
    assert!(result.has_reason(ReasonCode::ArbiterSame));

    let stats = matcher.stats();
    assert_eq!(stats.arbiter_calls, 1);
    assert_eq!(stats.arbiter_overrides, 1);
    assert_eq!(stats.matches, 1);
}

#[test]
fn low_confidence_verdict_keeps_review() {
    let arbiter = SameArbiter::new(0.5);
    let provider: Arc<dyn ArbiterProvider> = arbiter.clone();
    let matcher = Matcher::new(MatchConfig::default())
        .unwrap()
        .with_arbiter_provider(provider);
    let index = matcher
        .load_reference(&refs(&[("h", "Acme Widget Holdings"), ("p", "Acme Widget Partners")]))
        .unwrap();

    let result = matcher.match_one(&index, "Acme Widget");
    assert_eq!(result.decision, Decision::Review);
    assert!(result.arbiter_used);
    assert!(result.matched_id.is_none());
}

#[test]
fn restored_verdicts_skip_the_provider() {
    let first = SameArbiter::new(0.9);
    let provider: Arc<dyn ArbiterProvider> = first.clone();
    let matcher = Matcher::new(MatchConfig::default())
        .unwrap()
        .with_arbiter_provider(provider);
    let entries = refs(&[("h", "Acme Widget Holdings"), ("p", "Acme Widget Partners")]);
    let index = matcher.load_reference(&entries).unwrap();
    matcher.match_one(&index, "Acme Widget");
    let saved = serde_json::to_string(&matcher.verdict_cache().snapshot()).unwrap();
    let snapshot = serde_json::from_str(&saved).unwrap();

    let second = SameArbiter::new(0.9);
    let provider: Arc<dyn ArbiterProvider> = second.clone();
    let rerun = Matcher::new(MatchConfig::default())
        .unwrap()
        .with_arbiter_provider(provider)
        .with_verdicts(snapshot);
    let index = rerun.load_reference(&entries).unwrap();
    let result = rerun.match_one(&index, "Acme Widget");

    assert_eq!(result.decision, Decision::Match);
    assert_eq!(second.calls.load(Ordering::SeqCst), 0);
    assert_eq!(rerun.stats().arbiter_cache_hits, 1);
}

#[test]
fn embeddings_surface_reordered_names() {
    let matcher = Matcher::new(MatchConfig::default())
        .unwrap()
        .with_embedding_provider(Arc::new(HashedNgramEmbedder::new(128)))
        .unwrap();
    let index = matcher
        .load_reference(&refs(&[("a", "Acme Widget Holdings"), ("g", "Globex")]))
        .unwrap();
    assert!(index.ann().is_some());

    let result = matcher.match_one(&index, "Widget Acme Holdings");
    assert_eq!(result.top_candidates[0].ref_id, "a");
    assert_eq!(result.decision, Decision::Match);
    assert!(matcher.stats().embedding_calls >= 2);
}

struct PickyEmbedder;

impl EmbeddingProvider for PickyEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        if text.contains("initech") {
            return Err(EmbeddingError::InferenceFailed {
                reason: "refused".to_string(),
            });
        }
        Ok(vec![1.0, 0.0, 0.0, 0.0])
    }

    fn dimensions(&self) -> usize {
        4
    }

    fn name(&self) -> &str {
        "picky"
    }
}

#[test]
fn embedding_failure_is_a_warning() {
    let matcher = Matcher::new(MatchConfig::default())
        .unwrap()
        .with_embedding_provider(Arc::new(PickyEmbedder))
        .unwrap();
    let index = matcher
        .load_reference(&refs(&[("g", "Globex"), ("i", "Initrode")]))
        .unwrap();
    assert!(index.ann().is_some());

    let result = matcher.match_one(&index, "Initech");
    assert!(result.has_warning(WarningCode::EmbeddingUnavailable));
    assert_eq!(result.decision, Decision::NoMatch);
}

/// Finite vectors for references, NaN for one query key.
struct NanForQueryEmbedder;

impl EmbeddingProvider for NanForQueryEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        if text == "globex group holdings" {
            return Ok(vec![f32::NAN; 4]);
        }
        Ok(vec![0.5, 0.5, 0.5, 0.5])
    }

    fn dimensions(&self) -> usize {
        4
    }

    fn name(&self) -> &str {
        "nan-for-query"
    }
}

#[test]
fn non_finite_query_embedding_is_unavailable() {
    let matcher = Matcher::new(MatchConfig::default())
        .unwrap()
        .with_embedding_provider(Arc::new(NanForQueryEmbedder))
        .unwrap();
    let index = matcher
        .load_reference(&refs(&[("g", "Globex Holdings Group")]))
        .unwrap();
    assert!(index.ann().is_some());

    let result = matcher.match_one(&index, "Globex Group Holdings");
    assert!(result.has_warning(WarningCode::EmbeddingUnavailable));
    assert!(result.score.is_finite());
    assert_eq!(result.decision, Decision::Match);
    assert_eq!(result.matched_id.as_deref(), Some("g"));
}

#[test]
fn candidate_cap_is_reported() {
    let mut config = MatchConfig::default();
    config.candidates.max_candidates_total = 2;
    let matcher = Matcher::new(config).unwrap();
    let index = matcher
        .load_reference(&refs(&[("1", "Acme Alpha"), ("2", "Acme Beta"), ("3", "Acme Gamma")]))
        .unwrap();

    let result = matcher.match_one(&index, "Acme Delta");
    assert_eq!(result.candidate_count, 2);
    assert!(result.has_warning(WarningCode::CandidateCapTruncated));
    assert_eq!(matcher.stats().truncated, 1);
}

#[test]
fn stats_count_every_band() {
    let matcher = Matcher::new(MatchConfig::default()).unwrap();
    let index = matcher
        .load_reference(&refs(&[("r1", "Globex Holdings"), ("r2", "ACME Corporation")]))
        .unwrap();
    matcher.match_batch(&index, &names(&["Globex Holdings", "Acme Corp", "Umbrella"]));

    let stats = matcher.stats();
    assert_eq!(stats.references, 2);
    assert_eq!(stats.queries, 3);
    assert_eq!((stats.matches, stats.reviews, stats.no_matches), (1, 1, 1));
    assert_eq!(stats.no_candidates, 1);
}

#[test]
fn labeled_pairs_evaluation() {
    let pairs: Vec<LabeledPair> = load_fixture("golden/labeled_pairs.json");
    let matcher = Matcher::new(MatchConfig::default()).unwrap();
    let metrics = evaluate_pairs(&matcher, &pairs).unwrap();

    assert_eq!(metrics.total, 5);
    assert_eq!(metrics.true_positives, 1);
    assert_eq!(metrics.false_positives, 0);
    assert_eq!(metrics.false_negatives, 2);
    assert_eq!(metrics.true_negatives, 2);
    assert_eq!(metrics.reviews, 2);
    assert_eq!(metrics.precision, 1.0);
    assert!((metrics.recall - 1.0 / 3.0).abs() < 1e-9);
    assert!((metrics.f1 - 0.5).abs() < 1e-9);
}

#[derive(serde::Deserialize)]
struct BatchFixture {
    references: Vec<(String, String)>,
    queries: Vec<String>,
    expected: HashMap<usize, String>,
}

#[test]
fn batch_evaluation() {
    let fixture: BatchFixture = load_fixture("golden/batch.json");
    let matcher = Matcher::new(MatchConfig::default()).unwrap();
    let (metrics, results) =
        evaluate_batch(&matcher, &fixture.queries, &fixture.references, &fixture.expected).unwrap();

    assert_eq!(results.len(), fixture.queries.len());
    assert_eq!(metrics.true_positives, 2);
    assert_eq!(metrics.false_positives, 0);
    assert_eq!(metrics.false_negatives, 1);
    assert_eq!(metrics.true_negatives, 2);
    assert_eq!(metrics.reviews, 1);
    assert!((metrics.f1 - 0.8).abs() < 1e-9);
}

#[test]
fn false_positive_reasons_are_tallied() {
    let pairs = vec![LabeledPair {
        query: "Globex Holdings".to_string(),
        reference: "Globex Holdings Ltd".to_string(),
        is_match: false,
    }];
    let matcher = Matcher::new(MatchConfig::default()).unwrap();
    let metrics = evaluate_pairs(&matcher, &pairs).unwrap();
    assert_eq!(metrics.false_positives, 1);
    assert_eq!(metrics.false_positive_reasons.get("core_overlap_high"), Some(&1));
    assert_eq!(metrics.precision, 0.0);
}
