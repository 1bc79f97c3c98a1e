//! Deterministic random number generation for deck shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: same seed produces the identical shuffle order
//! - **Caller-owned**: the deck never hides a random source; tests pass a
//!   fixed seed and replay the exact same deal
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use rust_set::core::DeckRng;
//!
//! let mut a = DeckRng::new(42);
//! let mut b = DeckRng::new(42);
//!
//! let mut left = vec![1, 2, 3, 4, 5];
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//! assert_eq!(left, right);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seedable deterministic RNG used for deck shuffling.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DeckRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// For play, where the shuffle order only has to be unpredictable.
    /// Tests use [`DeckRng::new`] with a fixed seed instead.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> DeckRngState {
        DeckRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &DeckRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position for O(1) serialization regardless of
/// how many values have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shuffled(rng: &mut DeckRng) -> Vec<u32> {
        let mut data: Vec<u32> = (0..52).collect();
        rng.shuffle(&mut data);
        data
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = DeckRng::new(42);
        let mut rng2 = DeckRng::new(42);

        for _ in 0..10 {
            assert_eq!(shuffled(&mut rng1), shuffled(&mut rng2));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = DeckRng::new(1);
        let mut rng2 = DeckRng::new(2);

        assert_ne!(shuffled(&mut rng1), shuffled(&mut rng2));
    }

    #[test]
    fn test_shuffle_preserves_elements() {
        let mut rng = DeckRng::new(42);
        let mut data: Vec<u32> = (0..52).collect();
        rng.shuffle(&mut data);

        assert_ne!(data, (0..52).collect::<Vec<_>>());

        data.sort_unstable();
        assert_eq!(data, (0..52).collect::<Vec<_>>());
    }

    #[test]
    fn test_state_restore_resumes_sequence() {
        let mut rng = DeckRng::new(42);

        // Advance past the first shuffle before capturing.
        let _ = shuffled(&mut rng);
        let state = rng.state();

        let expected = shuffled(&mut rng);

        let mut restored = DeckRng::from_state(&state);
        assert_eq!(shuffled(&mut restored), expected);
    }

    #[test]
    fn test_state_serde() {
        let state = DeckRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let back: DeckRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, back);
    }
}
