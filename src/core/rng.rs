//! Injectable random source for the simulation
//!
//! Every stochastic term in the engine (gdp jitter, AI adjustment noise,
//! regional event rolls) draws through this trait, so a session can be
//! replayed from a seed and tests can pin the randomness.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub trait SimRng {
    /// Uniform draw in [0, 1)
    fn roll(&mut self) -> f64;

    /// Symmetric draw in [-limit, +limit]
    fn jitter(&mut self, limit: f64) -> f64 {
        (self.roll() * 2.0 - 1.0) * limit
    }
}

/// The default source: a seeded ChaCha8 stream
pub struct SeededRng(ChaCha8Rng);

impl SeededRng {
    pub fn seed_from_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl SimRng for SeededRng {
    fn roll(&mut self) -> f64 {
        self.0.gen_range(0.0..1.0)
    }
}

/// Test source: `roll` always returns the same value. `FixedRoll(0.5)`
/// yields zero jitter.
pub struct FixedRoll(pub f64);

impl SimRng for FixedRoll {
    fn roll(&mut self) -> f64 {
        self.0
    }
}
