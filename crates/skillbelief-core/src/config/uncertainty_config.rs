//! Uncertainty estimator configuration.

use serde::{Deserialize, Serialize};

use crate::constants::Z_95;

/// Configuration for the analytic credible interval.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UncertaintyConfig {
    /// Normal quantile for the two-sided interval. Default: 1.96 (95%).
    pub z_score: Option<f64>,
}

impl UncertaintyConfig {
    /// Returns the effective z-score, defaulting to 1.96.
    pub fn effective_z_score(&self) -> f64 {
        self.z_score.unwrap_or(Z_95)
    }
}
