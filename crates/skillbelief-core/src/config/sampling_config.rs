//! Posterior sampling configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_POSTERIOR_SAMPLES;

/// Configuration for Monte-Carlo posterior sampling.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SamplingConfig {
    /// Samples drawn when the caller does not ask for a count. Default: 1000.
    pub default_samples: Option<usize>,
    /// Fixed seed for reproducible sampling. Default: none (entropy source).
    pub seed: Option<u64>,
}

impl SamplingConfig {
    pub fn effective_default_samples(&self) -> usize {
        self.default_samples.unwrap_or(DEFAULT_POSTERIOR_SAMPLES)
    }
}
