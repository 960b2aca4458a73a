//! Configuration: the immutable schema of digit names, bit weights and display characters.
//!
//! Weights are assigned in reverse declaration order: the last declared digit is
//! worth `1`, the one before it `2`, and the first declared digit `2^(n-1)`.

use std::{
    collections::HashSet,
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use crate::{
    bit_set::BitSet,
    digit::{Digit, DigitRef, DisplaySpec},
    errors::{ConfigurationError, DigitError, StateError},
    state::State,
};

/// Number of digits the `u64` integer representation can hold.
pub const MAX_DIGITS: usize = u64::BITS as usize;

/// An immutable digit schema shared by any number of [BitSet]s.
///
/// Cloning is cheap: clones share the same underlying digit table. Equality and
/// hashing only consider the sequence of digit names, never the display characters.
#[derive(Clone)]
pub struct Configuration {
    inner: Arc<Inner>,
}

struct Inner {
    digits: Vec<Digit>,
    max: u64,
    unique_characters: bool,
}

impl Configuration {
    /// Normalizes `input` into a configuration.
    ///
    /// A configuration is returned as is (sharing the same table); raw digit lists
    /// and display maps are compiled into a new one.
    pub fn build(input: impl IntoConfiguration) -> Result<Self, ConfigurationError> {
        input.into_configuration()
    }

    /// Builds a configuration from digit names, rendering every digit as `1`/`0`.
    pub fn from_digits<I, S>(digits: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_display(
            digits
                .into_iter()
                .map(|digit| (digit, DisplaySpec::Default)),
        )
    }

    /// Builds a configuration from `(name, display spec)` pairs in declaration order.
    pub fn from_display<I, N, D>(entries: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (N, D)>,
        N: AsRef<str>,
        D: Into<DisplaySpec>,
    {
        let mut declared: Vec<(String, char, char)> = Vec::new();

        for (name, display) in entries {
            let name = name.as_ref();

            if name.is_empty() {
                return Err(ConfigurationError::InvalidDigitName(name.to_string()));
            }

            if declared.iter().any(|(existing, _, _)| existing == name) {
                return Err(ConfigurationError::DuplicateDigit(name.to_string()));
            }

            let (enabled, disabled) = display.into().characters(name)?;
            declared.push((name.to_string(), enabled, disabled));
        }

        let count = declared.len();

        if count == 0 {
            return Err(ConfigurationError::EmptyDigits);
        } else if count > MAX_DIGITS {
            return Err(ConfigurationError::TooManyDigits(count));
        }

        let digits: Vec<Digit> = declared
            .into_iter()
            .enumerate()
            .map(|(position, (name, enabled, disabled))| Digit {
                name,
                weight: 1 << (count - 1 - position),
                enabled,
                disabled,
            })
            .collect();

        let mut seen = HashSet::with_capacity(count);
        let unique_characters = digits.iter().all(|digit| seen.insert(digit.enabled));

        log::debug!(
            "built configuration with {} digits (unique characters: {})",
            count,
            unique_characters
        );

        Ok(Self {
            inner: Arc::new(Inner {
                digits,
                max: u64::MAX >> (MAX_DIGITS - count),
                unique_characters,
            }),
        })
    }

    /// Digit names in declaration order.
    pub fn digits(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.inner.digits.iter().map(|digit| digit.name.as_str())
    }

    /// Full digit records in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Digit> {
        self.inner.digits.iter()
    }

    pub fn len(&self) -> usize {
        self.inner.digits.len()
    }

    /// Always false: a configuration has at least one digit.
    pub fn is_empty(&self) -> bool {
        self.inner.digits.is_empty()
    }

    /// Resolves a name or index to the digit record.
    pub fn digit<'a>(&self, digit: impl Into<DigitRef<'a>>) -> Result<&Digit, DigitError> {
        match digit.into() {
            DigitRef::Name(name) => self
                .inner
                .digits
                .iter()
                .find(|digit| digit.name == name)
                .ok_or_else(|| DigitError::UnknownDigit(name.to_string())),
            DigitRef::Index(index) => {
                self.inner
                    .digits
                    .get(index)
                    .ok_or(DigitError::IndexOutOfRange {
                        index,
                        len: self.len(),
                    })
            }
        }
    }

    /// Resolves a name or index to the canonical digit name.
    pub fn find_digit<'a>(&self, digit: impl Into<DigitRef<'a>>) -> Result<&str, DigitError> {
        self.digit(digit).map(|digit| digit.name.as_str())
    }

    /// Bit weight of the digit.
    pub fn binary_position<'a>(&self, digit: impl Into<DigitRef<'a>>) -> Result<u64, DigitError> {
        self.digit(digit).map(|digit| digit.weight)
    }

    pub fn enabled_character<'a>(
        &self,
        digit: impl Into<DigitRef<'a>>,
    ) -> Result<char, DigitError> {
        self.digit(digit).map(|digit| digit.enabled)
    }

    pub fn disabled_character<'a>(
        &self,
        digit: impl Into<DigitRef<'a>>,
    ) -> Result<char, DigitError> {
        self.digit(digit).map(|digit| digit.disabled)
    }

    /// Creates a [BitSet] bound to this configuration.
    pub fn bit_set(&self, state: impl Into<State>) -> Result<BitSet, StateError> {
        BitSet::new(state, self)
    }

    pub fn min(&self) -> u64 {
        0
    }

    /// Integer value with every digit enabled.
    pub fn max(&self) -> u64 {
        self.inner.max
    }

    /// True if no two digits share an enabled character, which is required for the short format.
    pub fn unique_characters(&self) -> bool {
        self.inner.unique_characters
    }

    /// True if both handles share the same digit table.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Configuration {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.digits().eq(other.digits())
    }
}

impl Eq for Configuration {}

impl Hash for Configuration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for digit in self.digits() {
            digit.hash(state);
        }
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.iter()
                    .map(|digit| (&digit.name, (digit.enabled, digit.disabled))),
            )
            .finish()
    }
}

/// Conversion into a [Configuration], used wherever a configuration descriptor is accepted.
pub trait IntoConfiguration {
    fn into_configuration(self) -> Result<Configuration, ConfigurationError>;
}

impl IntoConfiguration for Configuration {
    fn into_configuration(self) -> Result<Configuration, ConfigurationError> {
        Ok(self)
    }
}

impl IntoConfiguration for &Configuration {
    fn into_configuration(self) -> Result<Configuration, ConfigurationError> {
        Ok(self.clone())
    }
}

impl IntoConfiguration for &[&str] {
    fn into_configuration(self) -> Result<Configuration, ConfigurationError> {
        Configuration::from_digits(self)
    }
}

impl<const N: usize> IntoConfiguration for [&str; N] {
    fn into_configuration(self) -> Result<Configuration, ConfigurationError> {
        Configuration::from_digits(self)
    }
}

impl IntoConfiguration for Vec<&str> {
    fn into_configuration(self) -> Result<Configuration, ConfigurationError> {
        Configuration::from_digits(self)
    }
}

impl IntoConfiguration for &[String] {
    fn into_configuration(self) -> Result<Configuration, ConfigurationError> {
        Configuration::from_digits(self)
    }
}

impl IntoConfiguration for Vec<String> {
    fn into_configuration(self) -> Result<Configuration, ConfigurationError> {
        Configuration::from_digits(self)
    }
}

impl<N, D, const K: usize> IntoConfiguration for [(N, D); K]
where
    N: AsRef<str>,
    D: Into<DisplaySpec>,
{
    fn into_configuration(self) -> Result<Configuration, ConfigurationError> {
        Configuration::from_display(self)
    }
}

impl<N, D> IntoConfiguration for Vec<(N, D)>
where
    N: AsRef<str>,
    D: Into<DisplaySpec>,
{
    fn into_configuration(self) -> Result<Configuration, ConfigurationError> {
        Configuration::from_display(self)
    }
}
