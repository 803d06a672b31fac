//! Seeded 2D coherent noise over simplex.

use noise::{NoiseFn, Simplex};
use rand::Rng;

/// A continuous 2D noise function with output in `[-1, 1]`.
///
/// Each field owns its own simplex permutation table, so two fields built
/// from different seeds are unrelated even at identical coordinates.
pub struct NoiseField {
    simplex: Simplex,
    seed: u32,
}

impl NoiseField {
    pub fn new(seed: u32) -> Self {
        Self {
            simplex: Simplex::new(seed),
            seed,
        }
    }

    /// Field seeded from the caller's RNG.
    pub fn from_rng<R: Rng>(rng: &mut R) -> Self {
        Self::new(rng.random::<u32>())
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Sample the field at `(x, y)`.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        self.simplex.get([x, y]).clamp(-1.0, 1.0)
    }
}
