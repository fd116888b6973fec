//! Temporal stage: staleness decay and trend classification.
//!
//! Decay is a single post-hoc erosion of the whole posterior, driven by the
//! age of the most recent signal. It never reweights individual signals.

pub mod decay;
pub mod trend;

pub use decay::{days_between, decay_factor, TemporalDecay};
pub use trend::{recent_average, TrendClassifier};
