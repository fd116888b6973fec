//! Top-level BeliefEngine: evidence in, immutable `SkillBelief` out.
//!
//! Pipeline per call: sort → update → decay/trend → interval → assemble.
//! The engine holds configuration only. Nothing survives a call, so one
//! instance can be shared across threads without locking.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use skillbelief_core::config::BeliefConfig;
use skillbelief_core::types::{EvidenceSignal, Posterior, SkillBelief, SkillId, Trend};

use crate::temporal::{self, TemporalDecay, TrendClassifier};
use crate::uncertainty::{self, CredibleInterval};
use crate::updater::{self, EvidenceUpdater};

/// Every intermediate quantity behind one belief.
///
/// `SkillBelief` is built from this, so what it reports is exactly what the
/// belief was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeliefBreakdown {
    pub skill_id: SkillId,
    pub as_of: DateTime<Utc>,
    pub signal_count: usize,
    /// Posterior straight out of the updater.
    pub posterior: Posterior,
    /// Posterior after staleness decay; equal to `posterior` inside the grace period.
    pub decayed_posterior: Posterior,
    pub days_since_last_evidence: f64,
    /// 1.0 when no decay was applied.
    pub decay_factor: f64,
    /// Mean raw score of the trend window, `None` when no signal in it has a usable score.
    pub recent_average: Option<f64>,
    /// Pre-decay posterior mean on the 0–100 scale, the trend's reference.
    pub pre_decay_mean: f64,
    /// Interval of the decayed posterior.
    pub interval: CredibleInterval,
    pub trend: Trend,
}

/// Stateless skill-belief engine.
#[derive(Debug, Clone)]
pub struct BeliefEngine {
    config: BeliefConfig,
    updater: EvidenceUpdater,
    decay: TemporalDecay,
    trend: TrendClassifier,
    z_score: f64,
}

impl BeliefEngine {
    /// Create an engine with the default policy.
    pub fn new() -> Self {
        Self::with_config(BeliefConfig::default())
    }

    /// Create an engine from a loaded configuration.
    pub fn with_config(config: BeliefConfig) -> Self {
        Self {
            updater: EvidenceUpdater::with_config(config.updater.clone()),
            decay: TemporalDecay::with_config(&config.decay),
            trend: TrendClassifier::with_config(&config.trend),
            z_score: config.uncertainty.effective_z_score(),
            config,
        }
    }

    pub fn config(&self) -> &BeliefConfig {
        &self.config
    }

    pub fn updater(&self) -> &EvidenceUpdater {
        &self.updater
    }

    /// The raw updater posterior for a set of signals, before any decay.
    pub fn posterior_for(&self, signals: &[EvidenceSignal]) -> Posterior {
        self.updater.update(signals)
    }

    /// Infer a belief as of the current wall-clock time.
    ///
    /// This is the only place the engine reads the system clock.
    pub fn infer_belief(&self, skill_id: impl Into<SkillId>, signals: &[EvidenceSignal]) -> SkillBelief {
        self.infer_belief_at(skill_id, signals, Utc::now())
    }

    /// Infer a belief as of an explicit instant.
    ///
    /// Deterministic: identical inputs produce identical beliefs.
    pub fn infer_belief_at(
        &self,
        skill_id: impl Into<SkillId>,
        signals: &[EvidenceSignal],
        as_of: DateTime<Utc>,
    ) -> SkillBelief {
        let sorted = updater::sort_chronologically(signals);
        let breakdown = self.evaluate(skill_id.into(), &sorted, as_of);

        let mut evidence_chain = sorted;
        evidence_chain.reverse();

        SkillBelief {
            skill_id: breakdown.skill_id,
            proficiency_mean: breakdown.interval.mean_points(),
            confidence_interval: breakdown.interval.half_width_points(),
            last_updated: as_of,
            evidence_chain,
            trend: breakdown.trend,
        }
    }

    /// The intermediate quantities behind `infer_belief_at`.
    pub fn explain_at(
        &self,
        skill_id: impl Into<SkillId>,
        signals: &[EvidenceSignal],
        as_of: DateTime<Utc>,
    ) -> BeliefBreakdown {
        let sorted = updater::sort_chronologically(signals);
        self.evaluate(skill_id.into(), &sorted, as_of)
    }

    /// Infer one belief per skill from a mixed evidence list, as of now.
    pub fn infer_beliefs(&self, signals: &[EvidenceSignal]) -> Vec<SkillBelief> {
        self.infer_beliefs_at(signals, Utc::now())
    }

    /// Infer one belief per skill from a mixed evidence list.
    ///
    /// Signals are grouped by `skill_id`; groups are inferred in parallel and
    /// returned sorted by skill id.
    pub fn infer_beliefs_at(&self, signals: &[EvidenceSignal], as_of: DateTime<Utc>) -> Vec<SkillBelief> {
        let mut groups: BTreeMap<SkillId, Vec<EvidenceSignal>> = BTreeMap::new();
        for signal in signals {
            groups
                .entry(signal.skill_id.clone())
                .or_default()
                .push(signal.clone());
        }
        let groups: Vec<(SkillId, Vec<EvidenceSignal>)> = groups.into_iter().collect();

        groups
            .par_iter()
            .map(|(skill_id, group)| self.infer_belief_at(skill_id.clone(), group, as_of))
            .collect()
    }

    /// Samples requested when a caller does not choose a count.
    pub fn default_sample_count(&self) -> usize {
        self.config.sampling.effective_default_samples()
    }

    /// Draw `n` posterior samples (0–100) from the thread-local entropy source.
    pub fn sample_posterior(&self, posterior: &Posterior, n: usize) -> Vec<f64> {
        tracing::debug!(sample_count = n, "sampling posterior");
        uncertainty::sample_posterior(posterior, n)
    }

    /// Draw `n` posterior samples (0–100) from a caller-supplied generator.
    pub fn sample_posterior_with<R: Rng + ?Sized>(
        &self,
        posterior: &Posterior,
        n: usize,
        rng: &mut R,
    ) -> Vec<f64> {
        uncertainty::sample_posterior_with(posterior, n, rng)
    }

    /// Draw samples honouring `sampling.seed`: reproducible when a seed is
    /// configured, entropy-seeded otherwise.
    pub fn sample_posterior_seeded(&self, posterior: &Posterior, n: usize) -> Vec<f64> {
        match self.config.sampling.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                self.sample_posterior_with(posterior, n, &mut rng)
            }
            None => self.sample_posterior(posterior, n),
        }
    }

    /// Core pipeline over chronologically sorted signals.
    fn evaluate(&self, skill_id: SkillId, sorted: &[EvidenceSignal], as_of: DateTime<Utc>) -> BeliefBreakdown {
        let span = tracing::debug_span!("infer_belief", skill_id = %skill_id, signal_count = sorted.len());
        let _guard = span.enter();

        let foreign = sorted.iter().filter(|s| s.skill_id != skill_id).count();
        if foreign > 0 {
            tracing::warn!(foreign, "evidence for other skills included in inference");
        }

        let posterior = self.updater.update(sorted);
        debug_assert!(posterior.alpha >= 1.0 && posterior.beta >= 1.0);

        let evidence_age = sorted
            .last()
            .map(|latest| temporal::days_between(latest.timestamp, as_of));
        let days_since_last_evidence = evidence_age.unwrap_or(0.0);
        let (decayed_posterior, decay_factor) = self.decay.apply(&posterior, days_since_last_evidence);

        let pre_decay_mean = posterior.mean() * 100.0;
        let recent_average = temporal::recent_average(sorted, self.trend.window());
        let trend = self
            .trend
            .classify(recent_average, pre_decay_mean, evidence_age);

        let interval = CredibleInterval::normal_approximation(&decayed_posterior, self.z_score);

        tracing::debug!(
            posterior_alpha = posterior.alpha,
            posterior_beta = posterior.beta,
            days_since_evidence = days_since_last_evidence,
            decay_factor,
            trend = %trend,
            "belief computed"
        );

        BeliefBreakdown {
            skill_id,
            as_of,
            signal_count: sorted.len(),
            posterior,
            decayed_posterior,
            days_since_last_evidence,
            decay_factor,
            recent_average,
            pre_decay_mean,
            interval,
            trend,
        }
    }
}

impl Default for BeliefEngine {
    fn default() -> Self {
        Self::new()
    }
}
