//! Monte-Carlo posterior sampling via Gamma ratios.
//!
//! `X ~ Gamma(alpha)`, `Y ~ Gamma(beta)` => `X / (X + Y) ~ Beta(alpha, beta)`.
//! Gamma deviates come from Marsaglia and Tsang's rejection method, which
//! draws standard normals by Box-Muller. This is the only stochastic code in
//! the engine; every entry point takes the generator explicitly except
//! [`sample_posterior`], which uses the thread-local entropy source.

use rand::distr::{Distribution, Open01};
use rand::Rng;
use skillbelief_core::constants::MIN_SHAPE;
use skillbelief_core::types::Posterior;

/// Standard normal deviate by the Box-Muller transform.
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let u1: f64 = Open01.sample(rng);
    let u2: f64 = Open01.sample(rng);
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// Gamma(shape, 1) sampler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GammaSampler {
    shape: f64,
}

impl GammaSampler {
    /// Non-finite or non-positive shapes are floored to the minimum shape.
    pub fn new(shape: f64) -> Self {
        let shape = if shape.is_finite() {
            shape.max(MIN_SHAPE)
        } else {
            MIN_SHAPE
        };
        Self { shape }
    }

    pub fn shape(&self) -> f64 {
        self.shape
    }
}

impl Distribution<f64> for GammaSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        marsaglia_tsang(self.shape, rng)
    }
}

/// Marsaglia and Tsang's method. Shapes below 1 are boosted:
/// `Gamma(a) = Gamma(a + 1) * U^(1/a)`.
fn marsaglia_tsang<R: Rng + ?Sized>(shape: f64, rng: &mut R) -> f64 {
    if shape < 1.0 {
        let u: f64 = Open01.sample(rng);
        return marsaglia_tsang(shape + 1.0, rng) * u.powf(1.0 / shape);
    }

    let d = shape - 1.0 / 3.0;
    let c = 1.0 / (9.0 * d).sqrt();
    loop {
        let x = standard_normal(rng);
        let v = (1.0 + c * x).powi(3);
        if v <= 0.0 {
            continue;
        }
        let u: f64 = Open01.sample(rng);
        if u < 1.0 - 0.0331 * x.powi(4) || u.ln() < 0.5 * x * x + d * (1.0 - v + v.ln()) {
            return d * v;
        }
    }
}

/// Beta(alpha, beta) sampler reporting values on the 0–100 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetaSampler {
    alpha: GammaSampler,
    beta: GammaSampler,
}

impl BetaSampler {
    pub fn new(posterior: &Posterior) -> Self {
        Self {
            alpha: GammaSampler::new(posterior.alpha),
            beta: GammaSampler::new(posterior.beta),
        }
    }
}

impl Distribution<f64> for BetaSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let x = self.alpha.sample(rng);
        let y = self.beta.sample(rng);
        let sum = x + y;
        // Tiny shapes can underflow both deviates; 0/0 would be NaN.
        if sum <= 0.0 || !sum.is_finite() {
            return 50.0;
        }
        (x / sum * 100.0).clamp(0.0, 100.0)
    }
}

/// Draw `n` posterior samples on the 0–100 scale from the given generator.
pub fn sample_posterior_with<R: Rng + ?Sized>(
    posterior: &Posterior,
    n: usize,
    rng: &mut R,
) -> Vec<f64> {
    let sampler = BetaSampler::new(posterior);
    (0..n).map(|_| sampler.sample(rng)).collect()
}

/// Draw `n` posterior samples using the thread-local entropy source.
pub fn sample_posterior(posterior: &Posterior, n: usize) -> Vec<f64> {
    let mut rng = rand::rng();
    sample_posterior_with(posterior, n, &mut rng)
}
