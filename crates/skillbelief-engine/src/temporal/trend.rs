//! Trend classification: recent evidence against the overall estimate.
//!
//! Rising: recent average > mean + band, Decaying: recent average < mean - band
//! or the evidence is stale, Stable: otherwise. Staleness wins over any
//! score trajectory.

use skillbelief_core::config::TrendConfig;
use skillbelief_core::types::{EvidenceSignal, Trend};

/// Mean clamped raw score (0–100) of the last `window` signals.
///
/// `sorted` must be chronological. Signals with NaN scores are skipped.
/// Returns `None` when no usable signal remains.
pub fn recent_average(sorted: &[EvidenceSignal], window: usize) -> Option<f64> {
    let start = sorted.len().saturating_sub(window.max(1));
    let scores: Vec<f64> = sorted[start..]
        .iter()
        .filter_map(EvidenceSignal::clamped_score)
        .collect();
    if scores.is_empty() {
        return None;
    }
    Some(scores.iter().sum::<f64>() / scores.len() as f64)
}

/// Rising/stable/decaying classifier.
#[derive(Debug, Clone)]
pub struct TrendClassifier {
    window: usize,
    band_points: f64,
    stale_days: f64,
}

impl TrendClassifier {
    /// Default policy: 3-signal window, 5-point band, 180-day staleness.
    pub fn new() -> Self {
        Self::with_config(&TrendConfig::default())
    }

    pub fn with_config(config: &TrendConfig) -> Self {
        Self {
            window: config.effective_window().max(1),
            band_points: config.effective_band_points().max(0.0),
            stale_days: config.effective_stale_days(),
        }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Classify a trajectory.
    ///
    /// `recent_average`: mean raw score of the recent window, `None` when no
    /// signal in it has a usable score.
    /// `mean_points`: pre-decay posterior mean on the 0–100 scale.
    /// `days_since_last_evidence`: `None` when there is no evidence at all.
    pub fn classify(
        &self,
        recent_average: Option<f64>,
        mean_points: f64,
        days_since_last_evidence: Option<f64>,
    ) -> Trend {
        let Some(days) = days_since_last_evidence else {
            return Trend::Stable;
        };

        if days > self.stale_days {
            return Trend::Decaying;
        }

        match recent_average {
            Some(recent) if recent > mean_points + self.band_points => Trend::Rising,
            Some(recent) if recent < mean_points - self.band_points => Trend::Decaying,
            _ => Trend::Stable,
        }
    }

    /// Classify straight from chronologically sorted signals.
    pub fn classify_signals(
        &self,
        sorted: &[EvidenceSignal],
        mean_points: f64,
        days_since_last_evidence: f64,
    ) -> Trend {
        let days = (!sorted.is_empty()).then_some(days_since_last_evidence);
        self.classify(recent_average(sorted, self.window), mean_points, days)
    }
}

impl Default for TrendClassifier {
    fn default() -> Self {
        Self::new()
    }
}
