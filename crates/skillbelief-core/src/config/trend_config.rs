//! Trend classification configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{STALE_TREND_DAYS, TREND_BAND_POINTS, TREND_WINDOW};

/// Configuration for the rising/stable/decaying classifier.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TrendConfig {
    /// Number of most recent signals averaged. Default: 3.
    pub window: Option<usize>,
    /// Half-width of the stable band in percentage points. Default: 5.
    pub band_points: Option<f64>,
    /// Days without evidence after which the trend is decaying. Default: 180.
    pub stale_days: Option<f64>,
}

impl TrendConfig {
    pub fn effective_window(&self) -> usize {
        self.window.unwrap_or(TREND_WINDOW)
    }

    pub fn effective_band_points(&self) -> f64 {
        self.band_points.unwrap_or(TREND_BAND_POINTS)
    }

    pub fn effective_stale_days(&self) -> f64 {
        self.stale_days.unwrap_or(STALE_TREND_DAYS)
    }
}
