//! Password generation library
//!
//! This library generates passwords from per-class character requirements:
//! an overall length range plus, for lower-case, upper-case, alphabetic,
//! numeric and symbolic characters, a symbol set and minimum/maximum counts.
//! Generation never fails; impossible constraints are relaxed instead.
//!
//! The default random source is a fast, non-cryptographic PRNG. Use
//! [`generate_password_with_rng`] with a cryptographically secure source
//! for high-value secrets.
//!
//! # Features
//!
//! - `async` (default): Enables sending generated passwords over a channel
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_GEN_MIN_LENGTH`, `PWD_GEN_MAX_LENGTH`: overall length bounds
//! - `PWD_GEN_SYMBOLS`: enables symbols with the given set
//!
//! # Example
//!
//! ```rust
//! use pwd_gen::{CharacterClass, CharacterClassRule, PasswordSpec, generate_password_with};
//!
//! // Default spec: 15 characters, at least one lower, upper and digit
//! let password = pwd_gen::generate_password();
//! assert_eq!(password.len(), 15);
//!
//! // 20 characters, with at least two symbols
//! let spec = PasswordSpec::default()
//!     .with_length(Some(20), Some(20))
//!     .with_rule(
//!         CharacterClass::Symbols,
//!         CharacterClassRule::new("-_.:!", 2, CharacterClassRule::UNBOUNDED),
//!     );
//! let password = generate_password_with(&spec);
//! assert_eq!(password.len(), 20);
//! ```

// Internal modules
mod config;
mod generator;
mod passes;
mod random;
mod spec;

pub mod charset;

// Public API
pub use config::{ConfigError, spec_from_env};
pub use generator::{
    generate_password, generate_password_with, generate_password_with_rng,
    generate_secret_password,
};
pub use passes::is_difficult_to_read;
pub use random::{RandomSource, default_source};
pub use spec::{CharacterClass, CharacterClassRule, DEFAULT_SPEC, PasswordSpec, SpecError};

#[cfg(feature = "async")]
pub use generator::generate_password_tx;
