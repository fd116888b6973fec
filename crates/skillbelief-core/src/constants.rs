//! Policy constants for the skill-belief engine.
//!
//! These values are behavioral contracts: tests pin them, and changing one
//! is a policy decision rather than a bug fix.

/// skillbelief version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---- Prior ----

/// Alpha of the uninformative Beta(1, 1) prior.
pub const PRIOR_ALPHA: f64 = 1.0;

/// Beta of the uninformative Beta(1, 1) prior.
pub const PRIOR_BETA: f64 = 1.0;

/// Smallest shape parameter a `Posterior` will hold.
pub const MIN_SHAPE: f64 = 0.01;

// ---- Updater ----

/// One maximally reliable signal counts as this many unit observations.
pub const OBSERVATION_SCALE: f64 = 10.0;

/// Reliability used for source types outside the known table.
pub const UNKNOWN_SOURCE_RELIABILITY: f64 = 0.5;

// ---- Temporal decay ----

/// Evidence younger than this (days) is never decayed.
pub const DECAY_GRACE_DAYS: f64 = 30.0;

/// Half-life (days) of the erosion toward the prior.
pub const DECAY_HALF_LIFE_DAYS: f64 = 365.0;

// ---- Trend ----

/// Number of most recent signals averaged for the trend.
pub const TREND_WINDOW: usize = 3;

/// Width (percentage points) of the band around the mean that reads as stable.
pub const TREND_BAND_POINTS: f64 = 5.0;

/// Staleness (days) after which the trend is decaying regardless of scores.
pub const STALE_TREND_DAYS: f64 = 180.0;

// ---- Uncertainty ----

/// Two-sided 95% normal quantile.
pub const Z_95: f64 = 1.96;

/// Default number of posterior samples for visualization callers.
pub const DEFAULT_POSTERIOR_SAMPLES: usize = 1000;

/// Seconds per day, for fractional day arithmetic.
pub const SECONDS_PER_DAY: f64 = 86_400.0;
