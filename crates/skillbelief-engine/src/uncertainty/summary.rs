//! Percentile summary of posterior samples for visualization callers.

use serde::{Deserialize, Serialize};

/// Mean and P10/P50/P90 of a sample set, all on the 0–100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleSummary {
    pub count: usize,
    pub mean: f64,
    pub p10: f64,
    pub p50: f64,
    pub p90: f64,
}

impl SampleSummary {
    /// Summarize a sample set. NaN samples are ignored; `None` when nothing remains.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        let mut sorted: Vec<f64> = samples.iter().copied().filter(|v| !v.is_nan()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);

        let mean = sorted.iter().sum::<f64>() / sorted.len() as f64;
        Some(Self {
            count: sorted.len(),
            mean,
            p10: percentile(&sorted, 10),
            p50: percentile(&sorted, 50),
            p90: percentile(&sorted, 90),
        })
    }

    /// P90 - P10 spread, in percentage points.
    pub fn spread(&self) -> f64 {
        self.p90 - self.p10
    }
}

/// k-th percentile of a non-empty sorted slice (nearest rank).
fn percentile(sorted: &[f64], k: u32) -> f64 {
    let idx = (k as f64 / 100.0 * (sorted.len() - 1) as f64).round() as usize;
    sorted[idx.min(sorted.len() - 1)]
}
