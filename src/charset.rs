//! Default character sets and length constants.
//!
//! The sets leave out characters that are easy to confuse with each other
//! (`l`, `o`, `I`, `O`, `0`, `1`).

/// Lower-case letters without `l` and `o`.
pub const LOWER_CASE_CHARS: &str = "abcdefghijkmnpqrstuvwxyz";

/// Upper-case letters without `I` and `O`.
pub const UPPER_CASE_CHARS: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ";

/// Lower-case followed by upper-case letters.
pub const ALPHABETIC_CHARS: &str = "abcdefghijkmnpqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ";

/// Digits without `0` and `1`.
pub const DIGITS: &str = "23456789";

/// Punctuation that reads unambiguously, including the separators `-` and `_`.
pub const SYMBOL_CHARS: &str = "-_.:!";

/// Length used when the spec does not ask for more.
pub const DEFAULT_LENGTH: usize = 15;

/// Length used when the spec has no `max_length`.
pub const MAX_LENGTH_CEILING: usize = 200;

/// Characters that must not appear twice in a row in a readable password.
pub const SEPARATORS: [char; 2] = ['-', '_'];
