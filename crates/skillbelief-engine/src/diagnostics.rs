//! Aggregate diagnostics over a batch of inferred beliefs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use skillbelief_core::types::{SkillBelief, Trend};

/// Interval half-width (points) above which a belief counts as wide.
const WIDE_INTERVAL_POINTS: u8 = 25;

/// Summary of a set of skill beliefs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeliefDiagnostics {
    /// Total beliefs summarized.
    pub total_beliefs: usize,
    /// Beliefs per trend label.
    pub per_trend: HashMap<Trend, usize>,
    /// Average proficiency mean (0–100).
    pub avg_proficiency: f64,
    /// Average interval half-width (points).
    pub avg_interval: f64,
    /// Beliefs with no evidence behind them.
    pub uninformed_count: usize,
    /// Beliefs whose half-width exceeds 25 points.
    pub wide_interval_count: usize,
}

impl BeliefDiagnostics {
    /// Compute diagnostics from a set of beliefs.
    pub fn from_beliefs(beliefs: &[SkillBelief]) -> Self {
        let mut per_trend: HashMap<Trend, usize> = HashMap::new();
        let mut total_proficiency = 0.0;
        let mut total_interval = 0.0;
        let mut uninformed_count = 0;
        let mut wide_interval_count = 0;

        for b in beliefs {
            *per_trend.entry(b.trend).or_insert(0) += 1;
            total_proficiency += f64::from(b.proficiency_mean);
            total_interval += f64::from(b.confidence_interval);
            if b.is_uninformed() {
                uninformed_count += 1;
            }
            if b.confidence_interval > WIDE_INTERVAL_POINTS {
                wide_interval_count += 1;
            }
        }

        let (avg_proficiency, avg_interval) = if beliefs.is_empty() {
            (0.0, 0.0)
        } else {
            let n = beliefs.len() as f64;
            (total_proficiency / n, total_interval / n)
        };

        Self {
            total_beliefs: beliefs.len(),
            per_trend,
            avg_proficiency,
            avg_interval,
            uninformed_count,
            wide_interval_count,
        }
    }

    /// Number of beliefs carrying the given trend.
    pub fn trend_count(&self, trend: Trend) -> usize {
        self.per_trend.get(&trend).copied().unwrap_or(0)
    }

    /// True when more than half the beliefs have no evidence.
    pub fn is_evidence_starved(&self) -> bool {
        self.total_beliefs > 0 && self.uninformed_count * 2 > self.total_beliefs
    }
}
