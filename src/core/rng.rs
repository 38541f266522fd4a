//! Deterministic random number generation with forking.
//!
//! Each AI strategy gets its own forked stream, so a session replays
//! identically for a given seed regardless of which strategies are paired.
//!
//! ```
//! use santorini_engine::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut white = rng.fork();
//! let mut blue = rng.fork();
//!
//! // Forks are independent streams
//! let faces: Vec<u32> = (0..1000).collect();
//! let a: Vec<_> = (0..8).map(|_| white.choose(&faces).copied()).collect();
//! let b: Vec<_> = (0..8).map(|_| blue.choose(&faces).copied()).collect();
//! assert_ne!(a, b);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent, deterministic branch.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Choose a random element from a slice, uniformly.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}
