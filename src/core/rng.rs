//! Deterministic random number generation.
//!
//! Every random decision in the crate (random board setup, knight placement,
//! the computer's fallback move) draws from a `GameRng` owned by the caller,
//! so a game replays exactly from its seed.
//!
//! ```
//! use poker_nim::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//!
//! // Fork for a what-if line
//! let mut branch = rng.fork();
//!
//! assert_ne!(rng.gen_range_usize(0..1000), branch.gen_range_usize(0..1000));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

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

    /// Seed used to create this RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice, uniformly.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Draw `amount` distinct indices from `0..len`, in draw order.
    ///
    /// # Panics
    ///
    /// Panics if `amount > len`.
    pub fn sample_distinct(&mut self, len: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.inner, len, amount).into_vec()
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG state for snapshots.
///
/// Uses the ChaCha8 word position, so capture and restore cost the same no
/// matter how many numbers were drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range_usize(0..1000), rng2.gen_range_usize(0..1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let forked1 = rng1.fork();
        let forked2 = rng2.fork();

        assert_eq!(forked1.seed(), forked2.seed());
        assert_ne!(forked1.seed(), 42);
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_sample_distinct() {
        let mut rng = GameRng::new(3);
        for _ in 0..100 {
            let picked = rng.sample_distinct(8, 2);
            assert_eq!(picked.len(), 2);
            assert_ne!(picked[0], picked[1]);
            assert!(picked.iter().all(|&i| i < 8));
        }
    }

    #[test]
    fn test_state_restore() {
        let mut rng = GameRng::new(42);
        for _ in 0..100 {
            rng.gen_range_usize(0..1000);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.gen_range_usize(0..1000)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.gen_range_usize(0..1000)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
            fork_counter: 5,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
