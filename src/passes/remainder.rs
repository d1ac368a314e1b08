//! Remainder-fill pass - fills free positions from any eligible class.

use super::ClassPool;
use crate::random::RandomSource;

/// Appends random symbols until `buffer` reaches `target`.
///
/// At each position a class is eligible while its `max` is greater than the
/// current buffer length; `max` gates how far into the password a class may
/// still be drawn from, not how many of its symbols were used. One eligible
/// class is chosen uniformly, then one of its symbols.
///
/// # Arguments
/// * `pools` - The character classes, in priority order
/// * `buffer` - The scratch buffer, appended to
/// * `target` - Length to fill the buffer up to
/// * `rng` - Source of the class and symbol choices
///
/// # Returns
/// `false` if no class was eligible before `target` was reached, leaving
/// the buffer short; `true` otherwise.
pub fn fill_remainder<R: RandomSource + ?Sized>(
    pools: &[ClassPool],
    buffer: &mut Vec<char>,
    target: usize,
    rng: &mut R,
) -> bool {
    let mut eligible: Vec<&ClassPool> = Vec::with_capacity(pools.len());

    while buffer.len() < target {
        let position = buffer.len();
        eligible.clear();
        eligible.extend(
            pools
                .iter()
                .filter(|pool| pool.max > position && !pool.symbols.is_empty()),
        );

        if eligible.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                "No eligible class at position {}, stopping short of {}",
                position,
                target
            );
            return false;
        }

        let pool = eligible[rng.next_below(eligible.len())];
        buffer.push(pool.draw(rng));
    }

    true
}
