//! # skillbelief-engine
//!
//! Converts a stream of unreliable evidence signals about a person's
//! proficiency in one skill into a calibrated belief: a point estimate, a
//! 95% credible interval, and a trend label.
//!
//! Three stages share one Beta posterior:
//! 1. [`updater`] folds the signals into `(alpha, beta)`.
//! 2. [`temporal`] erodes stale posteriors toward the prior and labels the trend.
//! 3. [`uncertainty`] turns the posterior into a mean and an interval, and
//!    draws Monte-Carlo samples for callers that want the full distribution.
//!
//! [`BeliefEngine`] wires the stages together. It holds configuration only,
//! so one instance can serve any number of threads.

pub mod diagnostics;
pub mod engine;
pub mod temporal;
pub mod uncertainty;
pub mod updater;

pub use diagnostics::BeliefDiagnostics;
pub use engine::{BeliefBreakdown, BeliefEngine};
pub use temporal::{TemporalDecay, TrendClassifier};
pub use uncertainty::{BetaSampler, CredibleInterval, GammaSampler, SampleSummary};
pub use updater::EvidenceUpdater;
