//! Beta(alpha, beta) posterior over the true proficiency fraction.
//!
//! Prior: Beta(1, 1), uniform, no prior bias.
//! Each evidence signal adds non-negative pseudo-counts, so both shapes stay
//! at or above 1 during inference. The sanitising constructor keeps
//! caller-supplied posteriors strictly positive as well.

use serde::{Deserialize, Serialize};

use crate::constants::{MIN_SHAPE, PRIOR_ALPHA, PRIOR_BETA};

/// Beta distribution parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Posterior {
    /// Pseudo-count of successes (prior included).
    pub alpha: f64,
    /// Pseudo-count of failures (prior included).
    pub beta: f64,
}

impl Posterior {
    /// Create a posterior, flooring non-finite or non-positive shapes to a
    /// small positive minimum.
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self {
            alpha: sanitize_shape(alpha),
            beta: sanitize_shape(beta),
        }
    }

    /// The uninformative Beta(1, 1) prior.
    pub fn uniform() -> Self {
        Self {
            alpha: PRIOR_ALPHA,
            beta: PRIOR_BETA,
        }
    }

    /// Add pseudo-observations. Negative or non-finite deltas are ignored.
    pub fn observe(&mut self, alpha_delta: f64, beta_delta: f64) {
        if alpha_delta.is_finite() && alpha_delta > 0.0 {
            self.alpha += alpha_delta;
        }
        if beta_delta.is_finite() && beta_delta > 0.0 {
            self.beta += beta_delta;
        }
    }

    /// Posterior mean: alpha / (alpha + beta), in [0.0, 1.0].
    pub fn mean(&self) -> f64 {
        mean(self.alpha, self.beta)
    }

    /// Posterior variance: alpha*beta / ((alpha+beta)^2 * (alpha+beta+1)).
    pub fn variance(&self) -> f64 {
        variance(self.alpha, self.beta)
    }

    /// Posterior standard deviation.
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Evidence carried beyond the prior, in unit observations.
    pub fn effective_sample_size(&self) -> f64 {
        (self.alpha + self.beta - PRIOR_ALPHA - PRIOR_BETA).max(0.0)
    }

    /// True when the posterior still equals the uniform prior.
    pub fn is_uninformative(&self) -> bool {
        self.effective_sample_size() < f64::EPSILON
    }

    /// Shrink the evidence toward the uniform prior.
    ///
    /// `factor` 1.0 keeps the posterior, 0.0 returns the prior:
    /// `alpha' = 1 + (alpha - 1) * factor`, likewise for beta.
    pub fn decayed_toward_prior(&self, factor: f64) -> Self {
        let factor = if factor.is_finite() {
            factor.clamp(0.0, 1.0)
        } else {
            1.0
        };
        Self::new(
            PRIOR_ALPHA + (self.alpha - PRIOR_ALPHA) * factor,
            PRIOR_BETA + (self.beta - PRIOR_BETA) * factor,
        )
    }
}

impl Default for Posterior {
    fn default() -> Self {
        Self::uniform()
    }
}

fn sanitize_shape(shape: f64) -> f64 {
    if shape.is_finite() {
        shape.max(MIN_SHAPE)
    } else if shape == f64::INFINITY {
        f64::MAX
    } else {
        MIN_SHAPE
    }
}

/// Beta mean with a uniform fallback for degenerate parameters.
pub fn mean(alpha: f64, beta: f64) -> f64 {
    let sum = alpha + beta;
    if sum <= 0.0 || !sum.is_finite() {
        return 0.5;
    }
    let mean = alpha / sum;
    if mean.is_finite() {
        mean.clamp(0.0, 1.0)
    } else {
        0.5
    }
}

/// Beta variance with a guarded denominator.
///
/// Degenerate parameters fall back to 0.25, the largest variance any
/// distribution on [0, 1] can have.
pub fn variance(alpha: f64, beta: f64) -> f64 {
    let sum = alpha + beta;
    let denom = sum * sum * (sum + 1.0);
    if sum <= 0.0 || denom <= 0.0 || !denom.is_finite() {
        return 0.25;
    }
    let var = (alpha * beta) / denom;
    if var.is_finite() {
        var.clamp(0.0, 0.25)
    } else {
        0.25
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_prior() {
        let p = Posterior::uniform();
        assert_eq!(p.alpha, 1.0);
        assert_eq!(p.beta, 1.0);
        assert!((p.mean() - 0.5).abs() < 1e-12);
        assert!((p.variance() - 1.0 / 12.0).abs() < 1e-12);
        assert!(p.is_uninformative());
    }

    #[test]
    fn test_new_sanitizes_shapes() {
        let p = Posterior::new(-3.0, f64::NAN);
        assert!(p.alpha > 0.0);
        assert!(p.beta > 0.0);
        assert!(p.mean().is_finite());
    }

    #[test]
    fn test_observe_ignores_negative_and_nan() {
        let mut p = Posterior::uniform();
        p.observe(-5.0, f64::NAN);
        assert_eq!(p, Posterior::uniform());
        p.observe(3.0, 1.0);
        assert_eq!(p, Posterior::new(4.0, 2.0));
    }

    #[test]
    fn test_variance_guard_zero_denominator() {
        assert_eq!(variance(0.0, 0.0), 0.25);
        assert_eq!(variance(-1.0, 0.0), 0.25);
        assert_eq!(variance(f64::INFINITY, 1.0), 0.25);
    }

    #[test]
    fn test_mean_guard() {
        assert_eq!(mean(0.0, 0.0), 0.5);
        assert_eq!(mean(f64::NAN, 1.0), 0.5);
        assert!(mean(100_000.0, 1.0) > 0.99);
    }

    #[test]
    fn test_decay_factor_bounds() {
        let p = Posterior::new(21.0, 5.0);
        assert_eq!(p.decayed_toward_prior(1.0), p);
        assert_eq!(p.decayed_toward_prior(0.0), Posterior::uniform());

        let half = p.decayed_toward_prior(0.5);
        assert!((half.alpha - 11.0).abs() < 1e-12);
        assert!((half.beta - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_decay_moves_mean_toward_half() {
        let p = Posterior::new(30.0, 4.0);
        let decayed = p.decayed_toward_prior(0.2);
        assert!((decayed.mean() - 0.5).abs() < (p.mean() - 0.5).abs());
        assert!(decayed.variance() > p.variance());
    }
}
