//! Matcher: the per-query pipeline.
//!
//! normalize -> retrieve (blocking + ANN) -> score -> rank -> decide ->
//! arbitrate (REVIEW only) -> result.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use namematch_arbiter::{ArbiterGate, VerdictCache, VerdictSnapshot};
use namematch_core::config::MatchConfig;
use namematch_core::constants::AUDIT_TOP_CANDIDATES;
use namematch_core::errors::{NameMatchError, NameMatchResult};
use namematch_core::models::{
    Decision, MatchResult, NormalizedName, ReasonCode, ScoredCandidate, TopCandidate, WarningCode,
};
use namematch_core::traits::{ArbiterProvider, EmbeddingProvider};
use namematch_embeddings::{AnnIndex, DegradationChain, EmbeddingEngine};
use namematch_normalize::{Lexicon, Normalizer};
use namematch_observability::{batch_span, load_span, query_span, RunStats, RunStatsSnapshot};
use namematch_retrieval::{retrieve, BlockingIndex};
use namematch_scoring::{decide, rank, Scorer};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::reference::ReferenceIndex;

/// Embedding state for one query.
#[derive(Clone)]
enum QueryVector {
    /// No embedding index to query.
    NotNeeded,
    /// The capability failed for this query.
    Unavailable,
    Ready(Arc<Vec<f32>>),
}

pub struct Matcher {
    config: MatchConfig,
    normalizer: Normalizer,
    scorer: Scorer,
    chain: DegradationChain,
    embeddings: Option<EmbeddingEngine>,
    gate: ArbiterGate,
    stats: RunStats,
}

impl Matcher {
    /// Validate `config` and load the lexicon. No capabilities are attached.
    pub fn new(config: MatchConfig) -> NameMatchResult<Self> {
        config.validate()?;
        let categories = &config.normalization.strip_categories;
        let lexicon = match config.lexicon.dir.as_deref() {
            Some(dir) => Lexicon::load_dir(Path::new(dir), categories)?,
            None => Lexicon::builtin(categories)?,
        };

        info!(
            version = namematch_core::constants::VERSION,
            t_high = config.thresholds.t_high,
            t_low = config.thresholds.t_low,
            margin = config.thresholds.margin,
            "matcher initialized"
        );

        Ok(Self {
            normalizer: Normalizer::new(&config, Arc::new(lexicon)),
            scorer: Scorer::new(&config),
            chain: DegradationChain::new(),
            embeddings: None,
            gate: ArbiterGate::new(&config, None),
            stats: RunStats::new(),
            config,
        })
    }

    /// Append an embedding provider to the fallback chain.
    pub fn with_embedding_provider(
        mut self,
        provider: Arc<dyn EmbeddingProvider>,
    ) -> NameMatchResult<Self> {
        self.chain.push(provider);
        self.embeddings = Some(EmbeddingEngine::new(
            self.config.embedding.clone(),
            self.chain.clone(),
        )?);
        Ok(self)
    }

    /// Attach the arbiter. Verdicts already cached are kept.
    pub fn with_arbiter_provider(mut self, provider: Arc<dyn ArbiterProvider>) -> Self {
        self.gate = ArbiterGate::with_cache(
            &self.config,
            Some(provider),
            Arc::clone(self.gate.cache()),
        );
        self
    }

    /// Seed the verdict cache, e.g. from a previous run's snapshot.
    pub fn with_verdicts(self, snapshot: VerdictSnapshot) -> Self {
        self.gate.cache().restore(snapshot);
        self
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn verdict_cache(&self) -> &Arc<VerdictCache> {
        self.gate.cache()
    }

    fn active_embeddings(&self) -> Option<&EmbeddingEngine> {
        self.embeddings.as_ref().filter(|e| e.is_active())
    }

    /// Normalize and index a reference list of `(id, name)` pairs. Ids must be
    /// unique. When an embedding provider is active the core keys are embedded
    /// in chunks; if that fails the index is built without ANN.
    pub fn load_reference(&self, entries: &[(String, String)]) -> NameMatchResult<ReferenceIndex> {
        let span = load_span!(entries.len());
        let _guard = span.enter();

        let mut seen = HashSet::with_capacity(entries.len());
        for (id, _) in entries {
            if !seen.insert(id.as_str()) {
                return Err(NameMatchError::DuplicateReferenceId { id: id.clone() });
            }
        }

        let names: Vec<NormalizedName> = entries
            .par_iter()
            .map(|(_, name)| self.normalizer.normalize(name))
            .collect();
        let blocking = BlockingIndex::build(&names);
        let ann = self.build_ann(&names);

        self.stats.record_references(entries.len());
        info!(
            references = entries.len(),
            blocking_keys = blocking.key_count(),
            ann = ann.is_some(),
            "reference list loaded"
        );

        Ok(ReferenceIndex {
            ids: entries.iter().map(|(id, _)| id.clone()).collect(),
            names,
            blocking,
            ann,
        })
    }

    fn build_ann(&self, names: &[NormalizedName]) -> Option<AnnIndex> {
        let engine = self.active_embeddings()?;
        let keys: Vec<String> = names.iter().map(|n| n.core_key.clone()).collect();
        match engine.embed_keys(&keys) {
            Ok(vectors) => {
                let index = AnnIndex::build(vectors);
                debug!(dims = index.dimensions(), "reference embeddings indexed");
                Some(index)
            }
            Err(e) => {
                warn!(error = %e, "reference embedding failed, continuing without ANN");
                None
            }
        }
    }

    /// Match one name.
    pub fn match_one(&self, index: &ReferenceIndex, name: &str) -> MatchResult {
        let query = self.normalizer.normalize_cached(name);
        let vector = self.query_vector(index, &query);
        self.run_query(index, 0, name, &query, vector)
    }

    /// Match many names in parallel. Results are in input order and
    /// `query_id` is the input position. Query embeddings are computed in
    /// one batched pass before matching.
    pub fn match_batch(&self, index: &ReferenceIndex, names: &[String]) -> Vec<MatchResult> {
        let span = batch_span!(names.len());
        let _guard = span.enter();

        let queries: Vec<Arc<NormalizedName>> = names
            .par_iter()
            .map(|n| self.normalizer.normalize_cached(n))
            .collect();
        let vectors = self.query_vectors(index, &queries);

        let results: Vec<MatchResult> = names
            .par_iter()
            .zip(queries.par_iter())
            .zip(vectors.into_par_iter())
            .enumerate()
            .map(|(query_id, ((name, query), vector))| {
                self.run_query(index, query_id, name, query, vector)
            })
            .collect();

        info!(
            queries = names.len(),
            matches = results.iter().filter(|r| r.decision == Decision::Match).count(),
            reviews = results.iter().filter(|r| r.decision == Decision::Review).count(),
            "batch matched"
        );
        results
    }

    fn query_vector(&self, index: &ReferenceIndex, query: &NormalizedName) -> QueryVector {
        let Some(engine) = self.active_embeddings().filter(|_| index.ann.is_some()) else {
            return QueryVector::NotNeeded;
        };
        match engine.embed_key(&query.core_key) {
            Ok(Some(v)) => QueryVector::Ready(v),
            Ok(None) => QueryVector::NotNeeded,
            Err(e) => {
                warn!(error = %e, "query embedding failed");
                QueryVector::Unavailable
            }
        }
    }

    fn query_vectors(&self, index: &ReferenceIndex, queries: &[Arc<NormalizedName>]) -> Vec<QueryVector> {
        let Some(engine) = self.active_embeddings().filter(|_| index.ann.is_some()) else {
            return vec![QueryVector::NotNeeded; queries.len()];
        };
        let keys: Vec<String> = queries.iter().map(|q| q.core_key.clone()).collect();
        match engine.embed_keys(&keys) {
            Ok(vectors) => vectors
                .into_iter()
                .map(|v| v.map_or(QueryVector::NotNeeded, QueryVector::Ready))
                .collect(),
            Err(e) => {
                warn!(error = %e, "query embedding failed for batch");
                vec![QueryVector::Unavailable; queries.len()]
            }
        }
    }

    fn run_query(
        &self,
        index: &ReferenceIndex,
        query_id: usize,
        name: &str,
        query: &NormalizedName,
        vector: QueryVector,
    ) -> MatchResult {
        let span = query_span!(query_id, name);
        let _guard = span.enter();

        let mut result = MatchResult::no_match(query_id, name);
        result.warnings = query.warnings.clone();
        if query.is_empty() {
            self.stats.record_query(Decision::NoMatch, 0, false);
            return result;
        }

        // Stage 1: candidates.
        let ann_hits = match (&vector, index.ann.as_ref()) {
            (QueryVector::Ready(v), Some(ann)) => ann.query(v, self.config.embedding.ann_neighbors),
            _ => Vec::new(),
        };
        if matches!(vector, QueryVector::Unavailable) {
            push_warning(&mut result.warnings, WarningCode::EmbeddingUnavailable);
        }
        let retrieval = retrieve(query, &index.blocking, &ann_hits, &self.config.candidates);
        if retrieval.truncated {
            push_warning(&mut result.warnings, WarningCode::CandidateCapTruncated);
        }
        if retrieval.candidates.is_empty() {
            result.reason_codes.push(ReasonCode::NoCandidates);
            self.stats.record_no_candidates();
            self.stats.record_query(Decision::NoMatch, 0, retrieval.truncated);
            debug!(query_id, "no candidates");
            return result;
        }

        // Stage 2: score and rank.
        let scored: Vec<ScoredCandidate> = retrieval
            .candidates
            .into_iter()
            .filter_map(|c| {
                let reference = index.names.get(c.ref_idx)?;
                let semantic = match (&vector, index.ann.as_ref()) {
                    (QueryVector::Ready(v), Some(ann)) => ann.similarity(c.ref_idx, v),
                    _ => None,
                };
                let sources = c.sources.into_iter().collect();
                Some(self.scorer.score(query, reference, c.ref_idx, sources, semantic))
            })
            .collect();
        let ranked = rank(scored);
        let ranking = decide(&ranked, &self.config.thresholds);

        // Stage 3: arbitration for REVIEW.
        let outcome = self
            .gate
            .maybe_arbitrate(query, &ranked, &index.names, ranking.decision);
        for w in &outcome.warnings {
            push_warning(&mut result.warnings, *w);
        }

        let (decision, chosen, arbiter_reason) = match &outcome.revision {
            Some(rev) => {
                let reason = match rev.decision {
                    Decision::Match => ReasonCode::ArbiterSame,
                    _ => ReasonCode::ArbiterDifferent,
                };
                let chosen = ranked.iter().find(|c| c.ref_idx == rev.ref_idx);
                (rev.decision, chosen, Some(reason))
            }
            None => (ranking.decision, ranked.first(), None),
        };

        result.decision = decision;
        result.score = chosen.map_or(ranking.best, |c| c.score);
        result.runner_up_score = ranking.runner_up;
        result.margin = ranking.margin;
        result.arbiter_used = outcome.arbiter_used;
        result.candidate_count = ranked.len();
        if let Some(c) = chosen {
            result.reason_codes = c.reason_codes.clone();
        }
        if let Some(reason) = arbiter_reason {
            result.reason_codes.push(reason);
        }
        if decision == Decision::Match {
            if let Some(c) = chosen {
                result.matched_id = index.id(c.ref_idx).map(str::to_string);
                result.matched_name = index.name(c.ref_idx).map(str::to_string);
            }
        }
        result.top_candidates = ranked
            .iter()
            .take(AUDIT_TOP_CANDIDATES)
            .map(|c| TopCandidate {
                ref_id: index.id(c.ref_idx).unwrap_or_default().to_string(),
                ref_name: index.name(c.ref_idx).unwrap_or_default().to_string(),
                score: c.score,
                reason_codes: c.reason_codes.clone(),
            })
            .collect();

        self.stats
            .record_query(decision, ranked.len(), retrieval.truncated);
        self.stats
            .record_arbiter(outcome.arbiter_used, outcome.revision.is_some());

        debug!(
            query_id,
            decision = %decision,
            score = result.score,
            candidates = ranked.len(),
            arbiter = outcome.arbiter_used,
            "query matched"
        );
        result
    }

    /// Run statistics so far, including capability counters.
    pub fn stats(&self) -> RunStatsSnapshot {
        let mut snapshot = self.stats.snapshot();
        let arbiter = self.gate.stats();
        snapshot.arbiter_calls = arbiter.calls;
        snapshot.arbiter_cache_hits = arbiter.cache_hits;
        if let Some(engine) = &self.embeddings {
            let embedding = engine.stats();
            snapshot.embedding_calls = embedding.provider_calls;
            snapshot.embedding_cache_hits = embedding.cache_hits;
        }
        snapshot
    }
}

fn push_warning(warnings: &mut Vec<WarningCode>, code: WarningCode) {
    if !warnings.contains(&code) {
        warnings.push(code);
    }
}
