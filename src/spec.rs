//! Password specification types.
//!
//! A [`PasswordSpec`] holds one [`CharacterClassRule`] per [`CharacterClass`]
//! plus optional overall length bounds. Both are plain values: the generator
//! only reads them.

use std::borrow::Cow;
use std::fmt;

use thiserror::Error;

use crate::charset::{
    ALPHABETIC_CHARS, DIGITS, LOWER_CASE_CHARS, SYMBOL_CHARS, UPPER_CASE_CHARS,
};

/// Character class identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    LowerCase,
    UpperCase,
    Alphabetic,
    Numeric,
    Symbols,
}

impl CharacterClass {
    /// All classes in priority order.
    ///
    /// Minimums are filled in this order, so when the combined minimums do
    /// not fit in the target length, the later classes are the ones cut short.
    pub const ALL: [CharacterClass; 5] = [
        CharacterClass::LowerCase,
        CharacterClass::UpperCase,
        CharacterClass::Alphabetic,
        CharacterClass::Numeric,
        CharacterClass::Symbols,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::LowerCase => "lower-case",
            CharacterClass::UpperCase => "upper-case",
            CharacterClass::Alphabetic => "alphabetic",
            CharacterClass::Numeric => "numeric",
            CharacterClass::Symbols => "symbols",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SpecError {
    #[error("Character class {0} is active but has an empty symbol set")]
    EmptySymbolSet(CharacterClass),
    #[error("Minimum length {min} is greater than maximum length {max}")]
    LengthRange { min: usize, max: usize },
}

/// Symbol set and participation bounds for one character class.
///
/// `max` is read twice by the generator: a rule with `max == 0` is skipped by
/// minimum-fill, and during remainder-fill a rule may only be drawn from while
/// `max` is greater than the current password length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterClassRule {
    pub symbol_set: Cow<'static, str>,
    pub min: usize,
    pub max: usize,
}

impl CharacterClassRule {
    pub const UNBOUNDED: usize = usize::MAX;

    pub fn new(symbol_set: impl Into<Cow<'static, str>>, min: usize, max: usize) -> Self {
        Self {
            symbol_set: symbol_set.into(),
            min,
            max,
        }
    }

    /// A rule that never contributes characters.
    pub const fn disabled() -> Self {
        Self {
            symbol_set: Cow::Borrowed(""),
            min: 0,
            max: 0,
        }
    }

    const fn borrowed(symbol_set: &'static str, min: usize, max: usize) -> Self {
        Self {
            symbol_set: Cow::Borrowed(symbol_set),
            min,
            max,
        }
    }

    /// Whether minimum-fill draws from this rule at all.
    pub fn is_enabled(&self) -> bool {
        self.max > 0
    }
}

impl Default for CharacterClassRule {
    fn default() -> Self {
        Self::disabled()
    }
}

/// Requirements for a generated password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordSpec {
    pub lower_case: CharacterClassRule,
    pub upper_case: CharacterClassRule,
    pub alphabetic: CharacterClassRule,
    pub numeric: CharacterClassRule,
    pub symbols: CharacterClassRule,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

/// The default specification, shared by the whole process.
pub static DEFAULT_SPEC: PasswordSpec = PasswordSpec::DEFAULT;

impl PasswordSpec {
    /// At least one lower-case letter, one upper-case letter and one digit;
    /// the alphabetic and symbolic classes are off.
    pub const DEFAULT: PasswordSpec = PasswordSpec {
        lower_case: CharacterClassRule::borrowed(
            LOWER_CASE_CHARS,
            1,
            CharacterClassRule::UNBOUNDED,
        ),
        upper_case: CharacterClassRule::borrowed(
            UPPER_CASE_CHARS,
            1,
            CharacterClassRule::UNBOUNDED,
        ),
        alphabetic: CharacterClassRule::borrowed(ALPHABETIC_CHARS, 0, 0),
        numeric: CharacterClassRule::borrowed(DIGITS, 1, CharacterClassRule::UNBOUNDED),
        symbols: CharacterClassRule::borrowed(SYMBOL_CHARS, 0, 0),
        min_length: None,
        max_length: None,
    };

    /// A spec with every class disabled and no length bounds.
    pub const fn empty() -> Self {
        Self {
            lower_case: CharacterClassRule::disabled(),
            upper_case: CharacterClassRule::disabled(),
            alphabetic: CharacterClassRule::disabled(),
            numeric: CharacterClassRule::disabled(),
            symbols: CharacterClassRule::disabled(),
            min_length: None,
            max_length: None,
        }
    }

    /// A spec where only `class` is active.
    pub fn only(class: CharacterClass, rule: CharacterClassRule) -> Self {
        Self::empty().with_rule(class, rule)
    }

    pub fn rule(&self, class: CharacterClass) -> &CharacterClassRule {
        match class {
            CharacterClass::LowerCase => &self.lower_case,
            CharacterClass::UpperCase => &self.upper_case,
            CharacterClass::Alphabetic => &self.alphabetic,
            CharacterClass::Numeric => &self.numeric,
            CharacterClass::Symbols => &self.symbols,
        }
    }

    pub fn rule_mut(&mut self, class: CharacterClass) -> &mut CharacterClassRule {
        match class {
            CharacterClass::LowerCase => &mut self.lower_case,
            CharacterClass::UpperCase => &mut self.upper_case,
            CharacterClass::Alphabetic => &mut self.alphabetic,
            CharacterClass::Numeric => &mut self.numeric,
            CharacterClass::Symbols => &mut self.symbols,
        }
    }

    /// Rules paired with their class, in priority order.
    pub fn rules(&self) -> impl Iterator<Item = (CharacterClass, &CharacterClassRule)> {
        CharacterClass::ALL
            .into_iter()
            .map(move |class| (class, self.rule(class)))
    }

    pub fn with_rule(mut self, class: CharacterClass, rule: CharacterClassRule) -> Self {
        *self.rule_mut(class) = rule;
        self
    }

    pub fn with_length(mut self, min_length: Option<usize>, max_length: Option<usize>) -> Self {
        self.min_length = min_length;
        self.max_length = max_length;
        self
    }

    /// Checks the spec for values the generator cannot honour.
    ///
    /// Generation never fails on an invalid spec; this is for callers that
    /// build specs from user input and want to reject them early.
    ///
    /// # Errors
    ///
    /// - [`SpecError::EmptySymbolSet`] if an active class has no symbols
    /// - [`SpecError::LengthRange`] if `min_length > max_length`
    pub fn validate(&self) -> Result<(), SpecError> {
        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(SpecError::LengthRange { min, max });
            }
        }

        for (class, rule) in self.rules() {
            if rule.min > 0 && rule.is_enabled() && rule.symbol_set.is_empty() {
                return Err(SpecError::EmptySymbolSet(class));
            }
        }

        Ok(())
    }
}

impl Default for PasswordSpec {
    fn default() -> Self {
        Self::DEFAULT
    }
}
