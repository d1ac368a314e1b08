//! Random source used by the generator.
//!
//! The generator only needs uniform integers in `[0, n)`. Any [`rand::Rng`]
//! works as a source; tests can plug in a seeded or instrumented one.
//!
//! # Security
//!
//! [`default_source`] is a fast, non-cryptographic PRNG. Passwords guarding
//! high-value secrets should be generated with a cryptographically secure
//! source instead, e.g. `rand::rngs::OsRng` or `rand::rng()`.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed indices.
pub trait RandomSource {
    /// Returns a uniformly distributed integer in `[0, n)`.
    ///
    /// Callers never pass `n == 0`.
    fn next_below(&mut self, n: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_below(&mut self, n: usize) -> usize {
        self.random_range(0..n)
    }
}

/// Returns a fresh fast PRNG seeded from the thread-local generator.
pub fn default_source() -> SmallRng {
    SmallRng::from_rng(&mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    #[test]
    fn test_next_below_in_range() {
        let mut rng = default_source();
        for n in [1, 2, 7, 200] {
            for _ in 0..100 {
                assert!(rng.next_below(n) < n);
            }
        }
    }

    #[test]
    fn test_next_below_one_is_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(rng.next_below(1), 0);
    }

    #[test]
    fn test_seeded_sources_agree() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let xs: Vec<_> = (0..32).map(|_| a.next_below(1000)).collect();
        let ys: Vec<_> = (0..32).map(|_| b.next_below(1000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_trait_object_through_reference() {
        let mut rng = StdRng::seed_from_u64(3);
        let source: &mut dyn RandomSource = &mut rng;
        assert!(source.next_below(10) < 10);
    }
}
