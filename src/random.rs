//! Random permutation helpers.
//!
//! Every function takes the random source explicitly so callers (and tests)
//! control seeding. Any `rand::Rng`, including `&mut dyn RngCore`, works.
//!
//! # Reference
//! Knuth (1997), "The Art of Computer Programming", Vol. 2, §3.4.2 (Algorithm P)

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

/// Returns a uniformly shuffled copy of `items` (Fisher-Yates).
///
/// The input slice is left untouched.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}

/// Picks one element uniformly. `None` for an empty slice.
pub fn pick<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    items.choose(rng)
}

/// Uniform draw from the inclusive range `[low, high]`.
///
/// Returns `low` when the range is empty or degenerate.
pub fn between<R: Rng + ?Sized>(low: usize, high: usize, rng: &mut R) -> usize {
    if high <= low {
        low
    } else {
        rng.random_range(low..=high)
    }
}
