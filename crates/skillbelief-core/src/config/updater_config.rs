//! Evidence updater configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::OBSERVATION_SCALE;
use crate::types::SourceType;

/// Configuration for the evidence-to-belief updater.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UpdaterConfig {
    /// Unit observations contributed by one fully reliable signal. Default: 10.
    pub observation_scale: Option<f64>,
    /// Per-source-type reliability overrides. Key is the source type name
    /// (`self_reported`, `proctored_exam`, ..., or `unknown` for the fallback).
    pub reliability_overrides: HashMap<String, f64>,
}

impl UpdaterConfig {
    /// Returns the effective observation scale, defaulting to 10.
    pub fn effective_observation_scale(&self) -> f64 {
        self.observation_scale.unwrap_or(OBSERVATION_SCALE)
    }

    /// Returns the reliability for a source type: the configured override
    /// if present, the built-in table otherwise. Always in [0.0, 1.0].
    pub fn reliability_for(&self, source_type: SourceType) -> f64 {
        self.reliability_overrides
            .get(source_type.name())
            .copied()
            .filter(|r| r.is_finite())
            .map(|r| r.clamp(0.0, 1.0))
            .unwrap_or_else(|| source_type.default_reliability())
    }
}
