//! ArbiterGate: when, and how often, the external judge is consulted.
//!
//! Only REVIEW queries reach the gate. Candidates are walked in rank order
//! up to `top_k`; each must pass the numeric and token-count rules. Cached
//! verdicts are free; fresh calls take a budget slot whether they succeed
//! or not.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use namematch_core::capability::{CapabilityRunner, Deadline};
use namematch_core::config::{ArbiterConfig, MatchConfig};
use namematch_core::models::{
    ArbiterDecision, ArbiterEvidence, ArbiterVerdict, Decision, NormalizedName, ScoredCandidate,
    WarningCode,
};
use namematch_core::traits::ArbiterProvider;
use tracing::{debug, info, warn};

use crate::budget::CallBudget;
use crate::cache::VerdictCache;
use crate::evidence::build_evidence;
use crate::pair_key::PairKey;

/// A decision change made on the arbiter's word.
#[derive(Debug, Clone, PartialEq)]
pub struct Revision {
    pub decision: Decision,
    /// Candidate the verdict was about.
    pub ref_idx: usize,
    pub verdict: ArbiterVerdict,
}

/// What the gate did for one query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GateOutcome {
    pub revision: Option<Revision>,
    /// At least one verdict (cached or fresh) was consulted.
    pub arbiter_used: bool,
    /// Fresh provider calls made for this query.
    pub calls: usize,
    pub warnings: Vec<WarningCode>,
}

impl GateOutcome {
    fn warn(&mut self, code: WarningCode) {
        if !self.warnings.contains(&code) {
            self.warnings.push(code);
        }
    }
}

/// Point-in-time arbiter counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArbiterStatsSnapshot {
    pub calls: u64,
    pub cache_hits: u64,
    pub overrides: u64,
    pub failures: u64,
    pub timeouts: u64,
}

#[derive(Default)]
struct ArbiterStats {
    calls: AtomicU64,
    cache_hits: AtomicU64,
    overrides: AtomicU64,
    failures: AtomicU64,
    timeouts: AtomicU64,
}

pub struct ArbiterGate {
    config: ArbiterConfig,
    margin: f64,
    provider: Option<Arc<dyn ArbiterProvider>>,
    cache: Arc<VerdictCache>,
    budget: CallBudget,
    runner: CapabilityRunner,
    stats: ArbiterStats,
}

impl ArbiterGate {
    pub fn new(config: &MatchConfig, provider: Option<Arc<dyn ArbiterProvider>>) -> Self {
        Self::with_cache(config, provider, Arc::new(VerdictCache::new()))
    }

    /// Build a gate over an existing (possibly restored) verdict cache.
    pub fn with_cache(
        config: &MatchConfig,
        provider: Option<Arc<dyn ArbiterProvider>>,
        cache: Arc<VerdictCache>,
    ) -> Self {
        if let Some(p) = &provider {
            info!(
                provider = p.name(),
                available = p.is_available(),
                cap = config.arbiter.global_call_cap,
                "arbiter configured"
            );
        }
        Self {
            budget: CallBudget::new(config.arbiter.global_call_cap),
            runner: CapabilityRunner::new(
                "arbiter",
                Duration::from_millis(config.arbiter.timeout_ms),
            ),
            config: config.arbiter.clone(),
            margin: config.thresholds.margin,
            provider,
            cache,
            stats: ArbiterStats::default(),
        }
    }

    /// The gate will consult a provider at all.
    pub fn is_active(&self) -> bool {
        self.config.enabled && self.provider.as_ref().is_some_and(|p| p.is_available())
    }

    pub fn cache(&self) -> &Arc<VerdictCache> {
        &self.cache
    }

    pub fn budget(&self) -> &CallBudget {
        &self.budget
    }

    /// Consult the arbiter for a query whose deterministic decision is
    /// `decision`. `ranked` is sorted best first; `references` resolves a
    /// candidate's `ref_idx` to its normalized name.
    ///
    /// The single-token rule counts effective tokens, not core tokens: a
    /// designator kept only because stripping would have emptied the name
    /// (`acme corp`) does not make it a two-token name. This is stricter than
    /// counting core tokens.
    pub fn maybe_arbitrate(
        &self,
        query: &NormalizedName,
        ranked: &[ScoredCandidate],
        references: &[NormalizedName],
        decision: Decision,
    ) -> GateOutcome {
        let mut outcome = GateOutcome::default();
        if decision != Decision::Review || !self.is_active() {
            return outcome;
        }
        let Some(provider) = self.provider.as_ref() else {
            return outcome;
        };
        let Some(best) = ranked.first() else {
            return outcome;
        };

        // A clear winner is never a close race.
        let second = ranked.get(1).map(|c| c.score);
        if second.is_some_and(|s| best.score - s >= self.margin) {
            return outcome;
        }
        let margin = best.score - second.unwrap_or(0.0);

        for scored in ranked.iter().take(self.config.top_k) {
            let Some(candidate) = references.get(scored.ref_idx) else {
                continue;
            };
            if has_numeric_conflict(query, candidate) {
                continue;
            }
            if query.effective_tokens.len() < 2 && candidate.effective_tokens.len() < 2 {
                continue;
            }

            let key = PairKey::new(&query.core_key, &candidate.core_key);
            let verdict = match self.cache.get(&key) {
                Some(cached) => {
                    self.stats.cache_hits.fetch_add(1, Ordering::Relaxed);
                    cached
                }
                None => {
                    if !self.budget.try_acquire() {
                        outcome.warn(WarningCode::ArbiterBudgetExhausted);
                        break;
                    }
                    outcome.calls += 1;
                    self.stats.calls.fetch_add(1, Ordering::Relaxed);
                    let evidence = build_evidence(query, candidate, scored, margin);
                    match self.call(provider, evidence) {
                        Ok(verdict) => {
                            self.cache.insert(key, verdict.clone());
                            verdict
                        }
                        Err(warning) => {
                            outcome.warn(warning);
                            continue;
                        }
                    }
                }
            };
            outcome.arbiter_used = true;

            debug!(
                query = %query.core_key,
                candidate = %candidate.core_key,
                decision = ?verdict.decision,
                confidence = %verdict.confidence,
                "arbiter verdict"
            );

            let confident = verdict.confidence.value() >= self.config.min_confidence;
            let revised = match verdict.decision {
                ArbiterDecision::Same if confident => Some(Decision::Match),
                ArbiterDecision::Different if confident => Some(Decision::NoMatch),
                _ => None,
            };
            if let Some(decision) = revised {
                self.stats.overrides.fetch_add(1, Ordering::Relaxed);
                outcome.revision = Some(Revision {
                    decision,
                    ref_idx: scored.ref_idx,
                    verdict,
                });
                break;
            }
        }

        outcome
    }

    fn call(
        &self,
        provider: &Arc<dyn ArbiterProvider>,
        evidence: ArbiterEvidence,
    ) -> Result<ArbiterVerdict, WarningCode> {
        let provider = Arc::clone(provider);
        match self.runner.run(move || provider.arbitrate(&evidence)) {
            Deadline::Completed(Ok(verdict)) => Ok(verdict),
            Deadline::Completed(Err(e)) => {
                self.stats.failures.fetch_add(1, Ordering::Relaxed);
                warn!(error = %e, "arbiter call failed");
                Err(WarningCode::ArbiterFailed)
            }
            Deadline::TimedOut => {
                self.stats.timeouts.fetch_add(1, Ordering::Relaxed);
                warn!(after_ms = self.config.timeout_ms, "arbiter call timed out");
                Err(WarningCode::ArbiterTimeout)
            }
            Deadline::Saturated => {
                self.stats.timeouts.fetch_add(1, Ordering::Relaxed);
                warn!(
                    in_flight = self.runner.in_flight(),
                    "arbiter call skipped: earlier calls still running"
                );
                Err(WarningCode::ArbiterTimeout)
            }
        }
    }

    pub fn stats(&self) -> ArbiterStatsSnapshot {
        ArbiterStatsSnapshot {
            calls: self.stats.calls.load(Ordering::Relaxed),
            cache_hits: self.stats.cache_hits.load(Ordering::Relaxed),
            overrides: self.stats.overrides.load(Ordering::Relaxed),
            failures: self.stats.failures.load(Ordering::Relaxed),
            timeouts: self.stats.timeouts.load(Ordering::Relaxed),
        }
    }
}

fn has_numeric_conflict(a: &NormalizedName, b: &NormalizedName) -> bool {
    !a.numeric_tokens.is_empty()
        && !b.numeric_tokens.is_empty()
        && a.numeric_tokens != b.numeric_tokens
}
