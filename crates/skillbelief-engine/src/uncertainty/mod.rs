//! Uncertainty estimator: analytic credible interval and posterior sampling.

pub mod interval;
pub mod sampler;
pub mod summary;

pub use interval::CredibleInterval;
pub use sampler::{
    sample_posterior, sample_posterior_with, standard_normal, BetaSampler, GammaSampler,
};
pub use summary::SampleSummary;
