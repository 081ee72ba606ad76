//! Uniform random sampling without replacement.

use rand::{Rng, seq::SliceRandom};

/// Picks `min(count, values.len())` elements uniformly at random without
/// replacement, using the thread-local generator.
pub fn sample<T: Clone>(values: &[T], count: usize) -> Vec<T> {
    sample_with(values, count, &mut rand::rng())
}

/// Same as [`sample`] with a caller supplied generator.
///
/// Works on a copy of `values` with a partial Fisher–Yates shuffle, so only
/// the first `count` positions are shuffled and the input is left untouched.
pub fn sample_with<T, R>(values: &[T], count: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut pool = values.to_vec();
    let amount = count.min(pool.len());
    let (picked, _) = pool.partial_shuffle(rng, amount);
    picked.to_vec()
}
