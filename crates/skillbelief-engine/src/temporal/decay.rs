//! Half-life erosion of stale posteriors toward the uniform prior.
//!
//! ```text
//! factor = 0.5 ^ (days / half_life)
//! alpha' = 1 + (alpha - 1) * factor
//! beta'  = 1 + (beta  - 1) * factor
//! ```
//!
//! Applied only once the most recent evidence is older than the grace period.

use chrono::{DateTime, Utc};
use skillbelief_core::config::DecayConfig;
use skillbelief_core::constants::{DECAY_HALF_LIFE_DAYS, SECONDS_PER_DAY};
use skillbelief_core::types::Posterior;

/// Fractional days from `earlier` to `later`, clamped at zero.
///
/// Evidence stamped after the as-of instant counts as fresh, not negative.
pub fn days_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> f64 {
    let millis = (later - earlier).num_milliseconds().max(0) as f64;
    millis / 1000.0 / SECONDS_PER_DAY
}

/// Exponential half-life factor in [0.0, 1.0].
///
/// Non-positive or non-finite half-lives disable decay (factor 1.0).
pub fn decay_factor(days: f64, half_life_days: f64) -> f64 {
    if !half_life_days.is_finite() || half_life_days <= 0.0 || !days.is_finite() || days <= 0.0 {
        return 1.0;
    }
    0.5_f64.powf(days / half_life_days).clamp(0.0, 1.0)
}

/// Staleness decay policy: grace period plus half-life.
#[derive(Debug, Clone)]
pub struct TemporalDecay {
    grace_days: f64,
    half_life_days: f64,
}

impl TemporalDecay {
    /// Default policy: 30-day grace, 365-day half-life.
    pub fn new() -> Self {
        Self::with_config(&DecayConfig::default())
    }

    pub fn with_config(config: &DecayConfig) -> Self {
        let half_life = config.effective_half_life_days();
        Self {
            grace_days: config.effective_grace_days().max(0.0),
            half_life_days: if half_life.is_finite() && half_life > 0.0 {
                half_life
            } else {
                DECAY_HALF_LIFE_DAYS
            },
        }
    }

    pub fn grace_days(&self) -> f64 {
        self.grace_days
    }

    pub fn half_life_days(&self) -> f64 {
        self.half_life_days
    }

    /// Factor applied for a given staleness: 1.0 inside the grace period.
    pub fn factor_for(&self, days_since_last_evidence: f64) -> f64 {
        if days_since_last_evidence > self.grace_days {
            decay_factor(days_since_last_evidence, self.half_life_days)
        } else {
            1.0
        }
    }

    /// Decay a posterior for the given staleness.
    ///
    /// Returns the (possibly unchanged) posterior and the factor applied.
    pub fn apply(&self, posterior: &Posterior, days_since_last_evidence: f64) -> (Posterior, f64) {
        let factor = self.factor_for(days_since_last_evidence);
        if factor < 1.0 {
            (posterior.decayed_toward_prior(factor), factor)
        } else {
            (*posterior, 1.0)
        }
    }
}

impl Default for TemporalDecay {
    fn default() -> Self {
        Self::new()
    }
}
