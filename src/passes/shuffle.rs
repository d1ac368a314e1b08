//! In-place Fisher-Yates shuffle.

use crate::random::RandomSource;

/// Uniformly permutes `chars`, walking from the last index down to 1 and
/// swapping each position with a random position at or before it.
pub fn shuffle<R: RandomSource + ?Sized>(chars: &mut [char], rng: &mut R) {
    for i in (1..chars.len()).rev() {
        let j = rng.next_below(i + 1);
        chars.swap(i, j);
    }
}
