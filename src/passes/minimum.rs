//! Minimum-fill pass - guarantees each enabled class its minimum count.

use super::ClassPool;
use crate::random::RandomSource;

/// Appends `min` random symbols of every enabled class, in priority order,
/// without growing `buffer` past `target`.
///
/// A class is enabled when its `max` is positive; with `max == 0` its `min`
/// is dropped. Classes without symbols are skipped as well.
///
/// # Arguments
/// * `pools` - The character classes, in priority order
/// * `buffer` - The scratch buffer, appended to
/// * `target` - Length the buffer must not exceed
/// * `rng` - Source of the symbol choices
pub fn fill_minimums<R: RandomSource + ?Sized>(
    pools: &[ClassPool],
    buffer: &mut Vec<char>,
    target: usize,
    rng: &mut R,
) {
    for pool in pools {
        if pool.max == 0 {
            continue;
        }
        if pool.symbols.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::warn!("Skipping minimum of class {}: empty symbol set", pool.class);
            continue;
        }

        let mut added = 0;
        while added < pool.min && buffer.len() < target {
            buffer.push(pool.draw(rng));
            added += 1;
        }

        if added < pool.min {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                "Minimum of class {} truncated: {} of {} at target length {}",
                pool.class,
                added,
                pool.min,
                target
            );
        }
    }
}
