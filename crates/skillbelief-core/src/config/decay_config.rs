//! Temporal decay configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DECAY_GRACE_DAYS, DECAY_HALF_LIFE_DAYS};

/// Configuration for the post-hoc erosion of stale posteriors.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DecayConfig {
    /// Days without evidence before decay starts. Default: 30.
    pub grace_days: Option<f64>,
    /// Half-life of the erosion toward the prior, in days. Default: 365.
    pub half_life_days: Option<f64>,
}

impl DecayConfig {
    /// Returns the effective grace period, defaulting to 30 days.
    pub fn effective_grace_days(&self) -> f64 {
        self.grace_days.unwrap_or(DECAY_GRACE_DAYS)
    }

    /// Returns the effective half-life, defaulting to 365 days.
    pub fn effective_half_life_days(&self) -> f64 {
        self.half_life_days.unwrap_or(DECAY_HALF_LIFE_DAYS)
    }
}
