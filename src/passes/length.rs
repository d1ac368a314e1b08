//! Target length resolution.

use crate::charset::{DEFAULT_LENGTH, MAX_LENGTH_CEILING};

/// Resolves the length the generator aims for.
///
/// `min_length` never lowers the target below [`DEFAULT_LENGTH`], while
/// `max_length` always caps it, even below the default.
pub fn resolve_target_length(min_length: Option<usize>, max_length: Option<usize>) -> usize {
    let lower = DEFAULT_LENGTH.max(min_length.unwrap_or(DEFAULT_LENGTH));
    lower.min(max_length.unwrap_or(MAX_LENGTH_CEILING))
}
