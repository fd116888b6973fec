//! Evidence-to-belief updater: conjugate Beta updating over evidence signals.
//!
//! Prior: Beta(1, 1). Each signal contributes
//! `effective = reliability * scale` pseudo-observations, split between
//! alpha and beta by its normalized score:
//!
//! ```text
//! alpha += score * effective
//! beta  += (1 - score) * effective
//! ```
//!
//! Addition commutes, so the posterior is the same in any order. Signals are
//! still sorted chronologically because the temporal stage needs "most
//! recent" semantics.

use skillbelief_core::config::UpdaterConfig;
use skillbelief_core::types::{EvidenceSignal, Posterior, SourceType};

/// Folds evidence signals into a Beta posterior.
#[derive(Debug, Clone)]
pub struct EvidenceUpdater {
    config: UpdaterConfig,
}

impl EvidenceUpdater {
    /// Create an updater with the built-in reliability table and scale.
    pub fn new() -> Self {
        Self::with_config(UpdaterConfig::default())
    }

    /// Create an updater with configured scale and reliability overrides.
    pub fn with_config(config: UpdaterConfig) -> Self {
        Self { config }
    }

    /// Unit observations contributed by one fully reliable signal.
    pub fn observation_scale(&self) -> f64 {
        let scale = self.config.effective_observation_scale();
        if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            skillbelief_core::constants::OBSERVATION_SCALE
        }
    }

    /// Reliability of a source type under this updater's table.
    pub fn source_reliability(&self, source_type: SourceType) -> f64 {
        self.config.reliability_for(source_type)
    }

    /// Reliability used for a signal: the per-signal override when present,
    /// the source-type table otherwise.
    pub fn resolve_reliability(&self, signal: &EvidenceSignal) -> f64 {
        signal
            .explicit_reliability()
            .unwrap_or_else(|| self.source_reliability(signal.source_type))
    }

    /// Pseudo-counts `(alpha_delta, beta_delta)` contributed by one signal.
    ///
    /// Both are non-negative. A NaN score contributes nothing.
    pub fn contribution(&self, signal: &EvidenceSignal) -> (f64, f64) {
        let Some(score) = signal.normalized_score() else {
            tracing::warn!(
                skill_id = %signal.skill_id,
                source_type = %signal.source_type,
                "discarding evidence signal with NaN score"
            );
            return (0.0, 0.0);
        };

        let effective = self.resolve_reliability(signal) * self.observation_scale();
        (score * effective, (1.0 - score) * effective)
    }

    /// Fold signals into a posterior, starting from the uniform prior.
    ///
    /// An empty slice returns Beta(1, 1) unchanged.
    pub fn update(&self, signals: &[EvidenceSignal]) -> Posterior {
        let mut posterior = Posterior::uniform();
        for signal in signals {
            let (alpha_delta, beta_delta) = self.contribution(signal);
            posterior.observe(alpha_delta, beta_delta);
        }
        posterior
    }
}

impl Default for EvidenceUpdater {
    fn default() -> Self {
        Self::new()
    }
}

/// Signals sorted ascending by timestamp. Stable: ties keep input order.
pub fn sort_chronologically(signals: &[EvidenceSignal]) -> Vec<EvidenceSignal> {
    let mut sorted = signals.to_vec();
    sorted.sort_by_key(|s| s.timestamp);
    sorted
}
