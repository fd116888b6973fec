//! Analytic 95% credible interval via the normal approximation.
//!
//! ```text
//! mean  = alpha / (alpha + beta)
//! std   = sqrt(alpha*beta / ((alpha+beta)^2 * (alpha+beta+1)))
//! lower = clamp(mean - z*std, 0, 1) * 100
//! upper = clamp(mean + z*std, 0, 1) * 100
//! ```
//!
//! This is an approximation, not an exact Beta quantile: exact quantiles
//! need a numerical inverse CDF the engine does not carry. The error is small
//! once realistic evidence has grown alpha and beta, and largest near the
//! prior, where the clamp to [0, 100] absorbs it.

use serde::{Deserialize, Serialize};
use skillbelief_core::constants::Z_95;
use skillbelief_core::types::Posterior;

/// Mean and interval bounds on the 0–100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CredibleInterval {
    pub mean: f64,
    pub lower: f64,
    pub upper: f64,
}

impl CredibleInterval {
    /// Normal approximation to the two-sided interval at quantile `z`.
    pub fn normal_approximation(posterior: &Posterior, z: f64) -> Self {
        let z = if z.is_finite() && z > 0.0 { z } else { Z_95 };
        let mean = posterior.mean();
        let std = posterior.std_dev();
        Self {
            mean: mean * 100.0,
            lower: (mean - z * std).clamp(0.0, 1.0) * 100.0,
            upper: (mean + z * std).clamp(0.0, 1.0) * 100.0,
        }
    }

    /// The 95% interval.
    pub fn ninety_five(posterior: &Posterior) -> Self {
        Self::normal_approximation(posterior, Z_95)
    }

    /// Full width in percentage points.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Rounded half-width in percentage points, in [0, 50].
    pub fn half_width_points(&self) -> u8 {
        (self.width() / 2.0).round().clamp(0.0, 50.0) as u8
    }

    /// Rounded mean in percentage points, in [0, 100].
    pub fn mean_points(&self) -> u8 {
        self.mean.round().clamp(0.0, 100.0) as u8
    }

    /// True when `value` (0–100) lies inside the interval.
    pub fn contains(&self, value: f64) -> bool {
        (self.lower..=self.upper).contains(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_prior_is_wide() {
        let ci = CredibleInterval::ninety_five(&Posterior::uniform());
        assert_eq!(ci.mean_points(), 50);
        assert_eq!(ci.lower, 0.0);
        assert_eq!(ci.upper, 100.0);
        assert_eq!(ci.half_width_points(), 50);
    }

    #[test]
    fn test_bounds_stay_in_range() {
        for (a, b) in [(1.0, 1.0), (1.5, 40.0), (40.0, 1.5), (500.0, 2.0), (0.01, 0.01)] {
            let ci = CredibleInterval::ninety_five(&Posterior::new(a, b));
            assert!(ci.lower >= 0.0 && ci.upper <= 100.0, "({a}, {b}) -> {ci:?}");
            assert!(ci.lower <= ci.mean && ci.mean <= ci.upper, "({a}, {b}) -> {ci:?}");
        }
    }

    #[test]
    fn test_narrows_with_evidence() {
        let wide = CredibleInterval::ninety_five(&Posterior::new(2.0, 2.0));
        let narrow = CredibleInterval::ninety_five(&Posterior::new(20.0, 20.0));
        assert!(narrow.width() < wide.width());
    }

    #[test]
    fn test_known_value() {
        // Beta(9, 3): mean 0.75, var = 27 / (144 * 13).
        let ci = CredibleInterval::ninety_five(&Posterior::new(9.0, 3.0));
        let std = (27.0_f64 / (144.0 * 13.0)).sqrt();
        assert!((ci.lower - (0.75 - 1.96 * std) * 100.0).abs() < 1e-9);
        assert!((ci.upper - (0.75 + 1.96 * std) * 100.0).abs() < 1e-9);
        assert_eq!(ci.half_width_points(), 24);
    }

    #[test]
    fn test_invalid_z_falls_back() {
        let p = Posterior::new(9.0, 3.0);
        assert_eq!(
            CredibleInterval::normal_approximation(&p, f64::NAN),
            CredibleInterval::ninety_five(&p)
        );
    }
}
