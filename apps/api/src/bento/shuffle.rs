//! Randomizer — Fisher–Yates over a copy, driven by an injectable random source.
//!
//! Production callers pass `rand::thread_rng()`; tests pass a seeded `StdRng`
//! or a scripted source to pin exact permutations.

use rand::{Rng, RngCore};

/// Supplies the next swap index for the shuffle.
pub trait RandomSource {
    /// Returns an index in `0..bound`. `bound` is always at least 1.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: RngCore> RandomSource for R {
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Returns a uniformly shuffled copy of `items`. The input slice is untouched.
pub fn shuffle<T: Clone>(items: &[T], rng: &mut dyn RandomSource) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.next_index(i + 1);
        shuffled.swap(i, j);
    }
    shuffled
}
