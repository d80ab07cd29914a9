//! Deterministic random sampling for the transport engine.
//!
//! # Determinism strategy
//!
//! A run owns exactly one `SimRng`, seeded from `SimConfig::seed`, and threads
//! it by `&mut` through every sampling call.  There is no global generator, so
//! two runs with the same seed and the same sequence of calls produce
//! bit-identical results.

use std::f64::consts::TAU;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Direction;

/// Simulation-level RNG.  Single-threaded by construction: the engine never
/// shares it, and `step` holds the only `&mut`.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform variate in `[0, 1)`.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    ///
    /// Consumes exactly one draw for any `p < 1`.
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Unit vector uniformly distributed over the sphere.
    ///
    /// Samples μ = cos θ uniformly on [-1, 1) and φ uniformly on [0, 2π).
    /// The 2-D engine only uses x and y, which gives the projected (not
    /// uniform-in-plane) speed distribution of a 3-D neutron gas.
    pub fn isotropic_direction(&mut self) -> Direction {
        let mu = 2.0 * self.uniform() - 1.0;
        let phi = TAU * self.uniform();
        let sin_theta = (1.0 - mu * mu).max(0.0).sqrt();
        Direction::new(sin_theta * phi.cos(), sin_theta * phi.sin(), mu)
    }

    /// Distance to the next collision: exponential with rate `total_xs`.
    ///
    /// A draw of exactly 0 would give `ln(0) = -inf`; it is rejected and
    /// redrawn, so the result is always finite and non-negative.
    pub fn flight_distance(&mut self, total_xs: f64) -> f64 {
        sample_flight_distance(|| self.uniform(), total_xs)
    }
}

/// Inverse-CDF transform −ln(ξ)/Σt, or `None` for the degenerate ξ = 0.
#[inline]
pub(crate) fn exponential(xi: f64, total_xs: f64) -> Option<f64> {
    if xi > 0.0 { Some(-xi.ln() / total_xs) } else { None }
}

/// Pull variates from `draw` until one gives a finite flight distance.
pub(crate) fn sample_flight_distance<F>(mut draw: F, total_xs: f64) -> f64
where
    F: FnMut() -> f64,
{
    loop {
        if let Some(d) = exponential(draw(), total_xs) {
            return d;
        }
    }
}
