//! Error types for configuration building, digit lookup, bit set construction and rendering.

use thiserror::Error;

/// Errors produced when building a [crate::configuration::Configuration] from a digit list or display map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// No digits were configured.
    #[error("At least one digit must be configured")]
    EmptyDigits,
    /// More digits than the integer representation can hold.
    #[error("Too many digits ({0}), at most {max} are supported", max = crate::configuration::MAX_DIGITS)]
    TooManyDigits(usize),
    /// The same digit name was declared twice.
    #[error("Duplicate digit name ({0})")]
    DuplicateDigit(String),
    /// A digit name is empty.
    #[error("Invalid digit name ({0:?})")]
    InvalidDigitName(String),
    /// A display token is not exactly one character long.
    #[error("Invalid configuration: display token {token:?} of digit {digit} must be one character")]
    InvalidCharacter { digit: String, token: String },
}

/// Errors produced when a digit name or index does not resolve against a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigitError {
    /// No digit with this name is configured.
    #[error("Invalid digit name ({0})")]
    UnknownDigit(String),
    /// Positional index is not in `0..len`.
    #[error("Invalid index or digit ({index}), configuration has {len} digits")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors produced when constructing a [crate::bit_set::BitSet].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// One or more names in a symbolic state are not configured. Lists every offending name.
    #[error("Invalid digit(s): {}", .0.join(", "))]
    InvalidDigits(Vec<String>),
    /// Integer state lies outside `0..=max`.
    #[error("Invalid state ({state}), must be between 0 and {max}")]
    InvalidState { state: i128, max: u64 },
    /// The configuration descriptor passed alongside the state was invalid.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Errors produced when rendering a [crate::bit_set::BitSet] as a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format selector is neither `long` nor `short`.
    #[error("Invalid format: {0:?}")]
    InvalidFormat(String),
    /// Short format needs a distinct enabled character for every digit.
    #[error("Short format only available for configurations with unique characters for each digit")]
    ShortFormatUnavailable,
}
