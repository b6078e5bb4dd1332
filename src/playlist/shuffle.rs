//! Random permutations of the active order.
//!
//! The playlist takes its randomness through the [`Shuffler`] trait so tests
//! can pin the permutation with a seed or a plain closure.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::library::Track;

/// Permutes tracks in place when shuffle is switched on.
pub trait Shuffler: Send {
    fn shuffle(&mut self, tracks: &mut [Track]);
}

impl<F> Shuffler for F
where
    F: FnMut(&mut [Track]) + Send,
{
    fn shuffle(&mut self, tracks: &mut [Track]) {
        self(tracks)
    }
}

/// Uniform Fisher-Yates shuffle.
pub struct RandomShuffler {
    rng: StdRng,
}

impl RandomShuffler {
    /// Seed from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible permutations for a given `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomShuffler {
    fn default() -> Self {
        Self::new()
    }
}

impl Shuffler for RandomShuffler {
    fn shuffle(&mut self, tracks: &mut [Track]) {
        SliceRandom::shuffle(tracks, &mut self.rng);
    }
}
