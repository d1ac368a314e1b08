//! Readability heuristic - rejects repeated separator characters.

use super::shuffle;
use crate::charset::SEPARATORS;
use crate::random::RandomSource;

/// Shuffle passes allowed, counting the first one.
pub const MAX_SHUFFLE_ATTEMPTS: usize = 5;

/// Returns `true` if two adjacent characters are the same separator.
pub fn is_difficult_to_read(chars: &[char]) -> bool {
    chars
        .windows(2)
        .any(|w| w[0] == w[1] && SEPARATORS.contains(&w[0]))
}

/// Shuffles `chars`, then reshuffles while it stays difficult to read, for
/// at most [`MAX_SHUFFLE_ATTEMPTS`] passes in total.
///
/// Returns the number of passes made. The heuristic is best-effort: after
/// the last pass `chars` is left as is, readable or not.
pub fn shuffle_until_readable<R: RandomSource + ?Sized>(chars: &mut [char], rng: &mut R) -> usize {
    shuffle(chars, rng);
    let mut attempts = 1;

    while is_difficult_to_read(chars) && attempts < MAX_SHUFFLE_ATTEMPTS {
        shuffle(chars, rng);
        attempts += 1;
    }

    if attempts == MAX_SHUFFLE_ATTEMPTS && is_difficult_to_read(chars) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Password still hard to read after {} shuffles, keeping it",
            MAX_SHUFFLE_ATTEMPTS
        );
    }

    attempts
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    struct ZeroSource;

    impl RandomSource for ZeroSource {
        fn next_below(&mut self, _n: usize) -> usize {
            0
        }
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_repeated_separators_are_difficult() {
        assert!(is_difficult_to_read(&chars("ab--cd")));
        assert!(is_difficult_to_read(&chars("__")));
        assert!(is_difficult_to_read(&chars("x7___")));
    }

    #[test]
    fn test_other_repeats_are_fine() {
        assert!(!is_difficult_to_read(&chars("aa..::!!77")));
        assert!(!is_difficult_to_read(&chars("-_-_-_")));
        assert!(!is_difficult_to_read(&chars("")));
        assert!(!is_difficult_to_read(&chars("-")));
    }

    #[test]
    fn test_readable_input_shuffled_once() {
        let mut rng = StdRng::seed_from_u64(30);
        let mut buffer = chars("abcdefgh");
        assert_eq!(shuffle_until_readable(&mut buffer, &mut rng), 1);
    }

    #[test]
    fn test_recovers_after_reshuffles() {
        // with a zero source: "aa--" -> "a--a" -> "--aa" -> "-aa-"
        let mut buffer = chars("aa--");
        let attempts = shuffle_until_readable(&mut buffer, &mut ZeroSource);
        assert_eq!(attempts, 3);
        assert_eq!(buffer.iter().collect::<String>(), "-aa-");
    }

    #[test]
    fn test_gives_up_after_max_attempts() {
        let mut rng = StdRng::seed_from_u64(31);
        let mut buffer = chars("--------");
        let attempts = shuffle_until_readable(&mut buffer, &mut rng);
        assert_eq!(attempts, MAX_SHUFFLE_ATTEMPTS);
        assert!(is_difficult_to_read(&buffer));
    }
}
