//! Deterministic dice rolling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical roll sequence
//! - **Isolated**: The only place randomness enters the crate
//!
//! Movement resolution (`GameEngine::move_player`) accepts the roll as a
//! plain value, so everything downstream of this module is pure and
//! testable without entropy.
//!
//! ```
//! use rust_snl::core::DiceRng;
//!
//! let mut dice = DiceRng::new(42);
//! let roll = dice.roll();
//! assert!((1..=6).contains(&roll));
//!
//! // Same seed, same sequence.
//! let mut replay = DiceRng::new(42);
//! assert_eq!(replay.roll(), roll);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A deterministic six-sided die.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
/// Construct with [`DiceRng::new`] for reproducible games or
/// [`DiceRng::from_entropy`] for casual play.
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DiceRng {
    /// Create a new die with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new die seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().gen();
        Self::new(seed)
    }

    /// The seed this die was constructed with.
    ///
    /// Reporting the seed lets a driver offer "replay this game".
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Roll once: a uniform value in `[1, 6]`, each call independent.
    pub fn roll(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }
}
