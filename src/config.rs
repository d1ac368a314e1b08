//! Environment configuration
//!
//! Builds a [`PasswordSpec`] from environment variables, layered on the
//! default specification.

use thiserror::Error;

use crate::spec::{CharacterClass, CharacterClassRule, PasswordSpec, SpecError};

pub const MIN_LENGTH_VAR: &str = "PWD_GEN_MIN_LENGTH";
pub const MAX_LENGTH_VAR: &str = "PWD_GEN_MAX_LENGTH";
pub const SYMBOLS_VAR: &str = "PWD_GEN_SYMBOLS";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?} is not a length")]
    InvalidNumber { var: &'static str, value: String },
    #[error("Invalid password specification: {0}")]
    Spec(#[from] SpecError),
}

/// Reads an optional length from `var`. Unset or blank means `None`.
fn length_from_env(var: &'static str) -> Result<Option<usize>, ConfigError> {
    let Ok(value) = std::env::var(var) else {
        return Ok(None);
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse::<usize>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidNumber { var, value })
}

/// Returns the password specification configured by the environment.
///
/// # Environment Variables
///
/// - `PWD_GEN_MIN_LENGTH`: overall minimum length
/// - `PWD_GEN_MAX_LENGTH`: overall maximum length
/// - `PWD_GEN_SYMBOLS`: enables the symbolic class with this symbol set
///   (at least one symbol per password)
///
/// Anything not set keeps its value from [`PasswordSpec::DEFAULT`].
///
/// # Errors
///
/// Returns error if:
/// - A length variable is not a non-negative integer
/// - The resulting spec has `min_length > max_length`
pub fn spec_from_env() -> Result<PasswordSpec, ConfigError> {
    let mut spec = PasswordSpec::default();

    spec.min_length = length_from_env(MIN_LENGTH_VAR)?;
    spec.max_length = length_from_env(MAX_LENGTH_VAR)?;

    if let Ok(symbols) = std::env::var(SYMBOLS_VAR) {
        if !symbols.is_empty() {
            spec = spec.with_rule(
                CharacterClass::Symbols,
                CharacterClassRule::new(symbols, 1, CharacterClassRule::UNBOUNDED),
            );
        }
    }

    spec.validate()?;

    #[cfg(feature = "tracing")]
    tracing::info!(
        "Password spec loaded from environment: min_length={:?} max_length={:?}",
        spec.min_length,
        spec.max_length
    );

    Ok(spec)
}
