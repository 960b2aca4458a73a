//! Definition of digits: the named bit positions of a [crate::configuration::Configuration].

use std::fmt;

use crate::errors::ConfigurationError;

/// Enabled character used when a digit has no display spec.
pub const UNNAMED_ENABLED: char = '1';
/// Disabled character used when a digit has no display spec.
pub const UNNAMED_DISABLED: char = '0';
/// Disabled character used when only an enabled character is given.
pub const NAMED_DISABLED: char = '-';

/// A single configured digit: its name, bit weight and display characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digit {
    /// Name used for symbolic access.
    pub name: String,
    /// Power-of-two value this digit contributes when enabled.
    pub weight: u64,
    /// Character rendered when the digit is on.
    pub enabled: char,
    /// Character rendered when the digit is off.
    pub disabled: char,
}

/// How a digit is rendered, as given in a configuration descriptor.
///
/// Every textual token must be exactly one character long; this is checked when
/// the spec is resolved into characters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DisplaySpec {
    /// Render as `1` when on and `0` when off.
    #[default]
    Default,
    /// Render with the given character when on and `-` when off.
    Enabled(String),
    /// Render with the first token when on and the second when off.
    Pair(String, String),
}

impl DisplaySpec {
    /// Resolves the spec into `(enabled, disabled)` characters for `digit`.
    pub fn characters(&self, digit: &str) -> Result<(char, char), ConfigurationError> {
        match self {
            DisplaySpec::Default => Ok((UNNAMED_ENABLED, UNNAMED_DISABLED)),
            DisplaySpec::Enabled(enabled) => Ok((single_char(digit, enabled)?, NAMED_DISABLED)),
            DisplaySpec::Pair(enabled, disabled) => Ok((
                single_char(digit, enabled)?,
                single_char(digit, disabled)?,
            )),
        }
    }
}

fn single_char(digit: &str, token: &str) -> Result<char, ConfigurationError> {
    let mut chars = token.chars();

    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigurationError::InvalidCharacter {
            digit: digit.to_string(),
            token: token.to_string(),
        }),
    }
}

impl From<()> for DisplaySpec {
    fn from(_: ()) -> Self {
        DisplaySpec::Default
    }
}

impl From<&str> for DisplaySpec {
    fn from(value: &str) -> Self {
        DisplaySpec::Enabled(value.to_string())
    }
}

impl From<String> for DisplaySpec {
    fn from(value: String) -> Self {
        DisplaySpec::Enabled(value)
    }
}

impl From<char> for DisplaySpec {
    fn from(value: char) -> Self {
        DisplaySpec::Enabled(value.to_string())
    }
}

impl From<(&str, &str)> for DisplaySpec {
    fn from((enabled, disabled): (&str, &str)) -> Self {
        DisplaySpec::Pair(enabled.to_string(), disabled.to_string())
    }
}

impl From<(char, char)> for DisplaySpec {
    fn from((enabled, disabled): (char, char)) -> Self {
        DisplaySpec::Pair(enabled.to_string(), disabled.to_string())
    }
}

impl<T: Into<DisplaySpec>> From<Option<T>> for DisplaySpec {
    fn from(value: Option<T>) -> Self {
        value.map_or(DisplaySpec::Default, Into::into)
    }
}

/// Selects a digit either by name or by zero-based position in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigitRef<'a> {
    Name(&'a str),
    Index(usize),
}

impl fmt::Display for DigitRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigitRef::Name(name) => f.write_str(name),
            DigitRef::Index(index) => write!(f, "{index}"),
        }
    }
}

impl<'a> From<&'a str> for DigitRef<'a> {
    fn from(value: &'a str) -> Self {
        DigitRef::Name(value)
    }
}

impl<'a> From<&'a String> for DigitRef<'a> {
    fn from(value: &'a String) -> Self {
        DigitRef::Name(value)
    }
}

impl<'a> From<&'a Digit> for DigitRef<'a> {
    fn from(value: &'a Digit) -> Self {
        DigitRef::Name(&value.name)
    }
}

impl From<usize> for DigitRef<'_> {
    fn from(value: usize) -> Self {
        DigitRef::Index(value)
    }
}

impl From<u32> for DigitRef<'_> {
    fn from(value: u32) -> Self {
        DigitRef::Index(usize::try_from(value).unwrap_or(usize::MAX))
    }
}

// Negative indices never resolve, so they map past any valid position.
impl From<i32> for DigitRef<'_> {
    fn from(value: i32) -> Self {
        DigitRef::Index(usize::try_from(value).unwrap_or(usize::MAX))
    }
}
