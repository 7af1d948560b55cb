use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::error::Result;

/// Policy for choosing the pivot of one partition step.
///
/// Implementations are called with a non-empty slice and must return an index
/// within it. The slice is the current recursion range; strategies read it but
/// never reorder it.
pub trait PivotStrategy<T: Ord> {
    fn pivot_index(&mut self, arr: &[T]) -> Result<usize>;
}

/// Uniform random pivot choice backed by an owned ChaCha generator.
///
/// Each driver call owns its generator, so reproducible runs only need a fixed
/// seed and concurrent callers never share random state.
///
/// # Examples
/// ```
/// use dac_algos::cs::sort::RandomPivot;
///
/// let mut a = RandomPivot::with_seed(41);
/// let mut b = RandomPivot::with_seed(41);
/// assert_eq!(a.pick(100), b.pick(100));
/// ```
pub struct RandomPivot {
    rng: ChaCha20Rng,
}

impl RandomPivot {
    /// Creates a generator seeded from entropy.
    pub fn new() -> Self {
        RandomPivot {
            rng: ChaCha20Rng::seed_from_u64(rand::thread_rng().gen()),
        }
    }

    /// Creates a deterministic generator for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        RandomPivot {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Draws an index uniformly from `0..len`.
    pub fn pick(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        self.rng.gen_range(0..len)
    }
}

impl Default for RandomPivot {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> PivotStrategy<T> for RandomPivot {
    fn pivot_index(&mut self, arr: &[T]) -> Result<usize> {
        Ok(self.pick(arr.len()))
    }
}
