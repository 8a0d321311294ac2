//! Deterministic random number generation for decorative output.
//!
//! The matching logic is fully deterministic and never draws randomness.
//! The only consumer is the circuit-pattern generator, which wants stable
//! patterns for a given seed so hosts can re-render without flicker.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG used by the presentation tier.
///
/// ChaCha8 for speed with a deterministic, platform-independent stream.
#[derive(Clone, Debug)]
pub struct PuzzleRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl PuzzleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random f32 in the given range.
    pub fn gen_f32(&mut self, range: std::ops::Range<f32>) -> f32 {
        self.inner.gen_range(range)
    }
}
