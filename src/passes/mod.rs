//! Generator passes
//!
//! Each pass performs one step of password generation on the shared
//! scratch buffer.

mod length;
mod minimum;
mod readability;
mod remainder;
mod shuffle;

pub use length::resolve_target_length;
pub use minimum::fill_minimums;
pub use readability::{MAX_SHUFFLE_ATTEMPTS, is_difficult_to_read, shuffle_until_readable};
pub use remainder::fill_remainder;
pub use shuffle::shuffle;

use crate::random::RandomSource;
use crate::spec::{CharacterClass, PasswordSpec};

/// A character class prepared for drawing: its bounds and its symbols as
/// Unicode scalar values.
#[derive(Debug, Clone)]
pub struct ClassPool {
    pub class: CharacterClass,
    pub min: usize,
    pub max: usize,
    pub symbols: Vec<char>,
}

impl ClassPool {
    /// Builds one pool per class, in priority order.
    pub fn from_spec(spec: &PasswordSpec) -> Vec<ClassPool> {
        spec.rules()
            .map(|(class, rule)| ClassPool {
                class,
                min: rule.min,
                max: rule.max,
                symbols: rule.symbol_set.chars().collect(),
            })
            .collect()
    }

    /// Longest password the fill passes can build from `pools` for `target`.
    ///
    /// Minimum-fill adds at most the sum of the drawable minimums, and
    /// remainder-fill stops once the position reaches the largest drawable
    /// `max`, whatever the length bounds ask for.
    pub fn reachable_len(pools: &[ClassPool], target: usize) -> usize {
        let drawable = pools
            .iter()
            .filter(|pool| pool.max > 0 && !pool.symbols.is_empty());

        let minimums = drawable
            .clone()
            .fold(0usize, |acc, pool| acc.saturating_add(pool.min));
        let remainder = drawable.map(|pool| pool.max).max().unwrap_or(0);

        target.min(minimums.max(remainder))
    }

    /// Picks one symbol uniformly at random. The pool must not be empty.
    pub fn draw<R: RandomSource + ?Sized>(&self, rng: &mut R) -> char {
        self.symbols[rng.next_below(self.symbols.len())]
    }
}
