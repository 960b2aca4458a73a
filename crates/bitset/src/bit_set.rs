//! BitSet: an immutable integer value whose bits are named by a [Configuration].

use std::{
    any::Any,
    cmp::Ordering,
    collections::HashSet,
    fmt,
    hash::{Hash, Hasher},
    ops::{Add, BitAnd, BitOr, BitXor, Not, Sub},
};

use crate::{
    configuration::{Configuration, IntoConfiguration},
    digit::DigitRef,
    errors::{DigitError, FormatError, StateError},
    format::{EMPTY_SHORT, Format},
    operand::{BitSetFields, DigitOperand, IntegerOperand},
    state::State,
};

/// A bit set with named digits and a numeric internal value.
///
/// Every operation that looks like a mutation returns a new bit set sharing the
/// same [Configuration].
///
/// ```
/// use bitset::{BitSet, Configuration, Format};
///
/// let traffic_light = Configuration::from_display([("red", "r"), ("yellow", "y"), ("green", "g")]).unwrap();
/// let bit_set = BitSet::new(["red", "green"], &traffic_light).unwrap();
///
/// assert_eq!(bit_set.to_i(), 0b101);
/// assert_eq!(bit_set.to_s(Format::Long).unwrap(), "r-g");
/// assert_eq!(bit_set.to_s(Format::Short).unwrap(), "rg");
/// ```
#[derive(Clone)]
pub struct BitSet {
    configuration: Configuration,
    integer_representation: u64,
}

impl BitSet {
    /// Creates a bit set from an integer or from the names of its enabled digits.
    ///
    /// `configuration` may be a [Configuration] or any raw descriptor accepted by
    /// [Configuration::build]. Integers must lie in `0..=max`. Unknown digit names
    /// are all collected into a single [StateError::InvalidDigits].
    pub fn new(
        state: impl Into<State>,
        configuration: impl IntoConfiguration,
    ) -> Result<Self, StateError> {
        let configuration = configuration.into_configuration()?;

        match state.into() {
            State::Integer(value) => Self::from_integer(value, configuration),
            State::Digits(digits) => Self::from_digit_names(&digits[..], configuration),
        }
    }

    /// Creates a bit set with every digit disabled.
    pub fn empty(configuration: impl IntoConfiguration) -> Result<Self, StateError> {
        Self::new(0u64, configuration)
    }

    fn from_integer(value: i128, configuration: Configuration) -> Result<Self, StateError> {
        let max = configuration.max();

        let integer_representation = u64::try_from(value)
            .ok()
            .filter(|value| *value <= max)
            .ok_or(StateError::InvalidState { state: value, max })?;

        log::trace!("bit set from integer {:#b}", integer_representation);

        Ok(Self {
            configuration,
            integer_representation,
        })
    }

    fn from_digit_names<S: AsRef<str>>(
        digits: &[S],
        configuration: Configuration,
    ) -> Result<Self, StateError> {
        let mut integer_representation = 0u64;
        let mut invalid = Vec::new();

        for digit in digits {
            let digit = digit.as_ref();
            match configuration.binary_position(digit) {
                Ok(weight) => integer_representation |= weight,
                Err(_) => invalid.push(digit.to_string()),
            }
        }

        if !invalid.is_empty() {
            log::trace!("rejected digit names {:?}", invalid);
            return Err(StateError::InvalidDigits(invalid));
        }

        log::trace!("bit set from digits {:#b}", integer_representation);

        Ok(Self {
            configuration,
            integer_representation,
        })
    }

    fn with_integer(&self, integer_representation: u64) -> Self {
        Self {
            configuration: self.configuration.clone(),
            integer_representation,
        }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// The bit set as a binary number.
    pub fn to_i(&self) -> u64 {
        self.integer_representation
    }

    /// Every digit with its on/off state, in declaration order.
    pub fn state(&self) -> Vec<(&str, bool)> {
        self.configuration
            .iter()
            .map(|digit| (digit.name.as_str(), self.has_weight(digit.weight)))
            .collect()
    }

    /// Same as [BitSet::state].
    pub fn attributes(&self) -> Vec<(&str, bool)> {
        self.state()
    }

    /// State of a digit selected by name or index.
    pub fn get<'a>(&self, digit: impl Into<DigitRef<'a>>) -> Result<bool, DigitError> {
        self.configuration
            .binary_position(digit)
            .map(|weight| self.has_weight(weight))
    }

    fn has_weight(&self, weight: u64) -> bool {
        self.integer_representation & weight != 0
    }

    /// Names of the digits that are on, in declaration order.
    pub fn enabled_digits(&self) -> Vec<&str> {
        self.digits_where(true)
    }

    /// Names of the digits that are off, in declaration order.
    pub fn disabled_digits(&self) -> Vec<&str> {
        self.digits_where(false)
    }

    fn digits_where(&self, enabled: bool) -> Vec<&str> {
        self.configuration
            .iter()
            .filter(|digit| self.has_weight(digit.weight) == enabled)
            .map(|digit| digit.name.as_str())
            .collect()
    }

    /// Toggles every digit.
    ///
    /// Computed as `max - state`. Because `max` has every configured bit set this is
    /// the bitwise complement restricted to the configured digits.
    pub fn invert(&self) -> Self {
        self.with_integer(self.configuration.max() - self.integer_representation)
    }

    /// Bit set with the digits of `other` switched on in addition to the current ones.
    ///
    /// Fails with [StateError::InvalidDigits] if `other` names digits this
    /// configuration does not have.
    pub fn add_digits(&self, other: impl DigitOperand) -> Result<Self, StateError> {
        let mut digits: Vec<String> = self
            .enabled_digits()
            .into_iter()
            .map(str::to_string)
            .collect();
        digits.extend(other.digit_names());

        Self::from_digit_names(&digits[..], self.configuration.clone())
    }

    /// Bit set with the digits of `other` switched off. Names that are not enabled are ignored.
    pub fn remove_digits(&self, other: impl DigitOperand) -> Self {
        let removed: HashSet<String> = other.digit_names().into_iter().collect();

        let integer_representation = self
            .configuration
            .iter()
            .filter(|digit| self.has_weight(digit.weight) && !removed.contains(&digit.name))
            .fold(0, |acc, digit| acc | digit.weight);

        self.with_integer(integer_representation)
    }

    /// Bitwise OR with another bit set or an integer.
    pub fn union(&self, other: impl IntegerOperand) -> Result<Self, StateError> {
        self.combine(self.integer_representation as i128 | other.integer_operand())
    }

    /// Bitwise AND with another bit set or an integer.
    pub fn intersection(&self, other: impl IntegerOperand) -> Result<Self, StateError> {
        self.combine(self.integer_representation as i128 & other.integer_operand())
    }

    /// Bitwise XOR with another bit set or an integer.
    pub fn symmetric_difference(&self, other: impl IntegerOperand) -> Result<Self, StateError> {
        self.combine(self.integer_representation as i128 ^ other.integer_operand())
    }

    fn combine(&self, value: i128) -> Result<Self, StateError> {
        Self::from_integer(value, self.configuration.clone())
    }

    /// True only if `other` is a [BitSet] itself and equal to this one.
    pub fn eql<T: BitSetFields + Any>(&self, other: &T) -> bool {
        (other as &dyn Any)
            .downcast_ref::<BitSet>()
            .is_some_and(|other| self == other)
    }

    /// Renders the bit set in the given [Format].
    pub fn to_s(&self, format: Format) -> Result<String, FormatError> {
        match format {
            Format::Long => Ok(self.to_long_string()),
            Format::Short => self.to_short_string(),
        }
    }

    fn to_long_string(&self) -> String {
        self.configuration
            .iter()
            .map(|digit| {
                if self.has_weight(digit.weight) {
                    digit.enabled
                } else {
                    digit.disabled
                }
            })
            .collect()
    }

    fn to_short_string(&self) -> Result<String, FormatError> {
        if !self.configuration.unique_characters() {
            return Err(FormatError::ShortFormatUnavailable);
        }

        if self.integer_representation == 0 {
            return Ok(EMPTY_SHORT.to_string());
        }

        Ok(self
            .configuration
            .iter()
            .filter(|digit| self.has_weight(digit.weight))
            .map(|digit| digit.enabled)
            .collect())
    }
}

impl BitSetFields for BitSet {
    fn integer_representation(&self) -> u64 {
        self.integer_representation
    }

    fn configuration(&self) -> &Configuration {
        &self.configuration
    }
}

impl<T: BitSetFields> PartialEq<T> for BitSet {
    fn eq(&self, other: &T) -> bool {
        self.integer_representation == other.integer_representation()
            && self.configuration == *other.configuration()
    }
}

impl Eq for BitSet {}

/// Bit sets are ordered by their integer value, but only against the same configuration.
impl<T: BitSetFields> PartialOrd<T> for BitSet {
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        if self.configuration == *other.configuration() {
            Some(
                self.integer_representation
                    .cmp(&other.integer_representation()),
            )
        } else {
            None
        }
    }
}

impl Hash for BitSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.configuration.hash(state);
        self.integer_representation.hash(state);
    }
}

impl fmt::Display for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_long_string())
    }
}

impl fmt::Debug for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BitSet")
            .field(&self.to_long_string())
            .finish()
    }
}

impl Not for &BitSet {
    type Output = BitSet;

    fn not(self) -> BitSet {
        self.invert()
    }
}

impl Not for BitSet {
    type Output = BitSet;

    fn not(self) -> BitSet {
        self.invert()
    }
}

macro_rules! integer_operator {
    ($trait:ident, $method:ident, $op:ident) => {
        impl<T: IntegerOperand> $trait<T> for &BitSet {
            type Output = Result<BitSet, StateError>;

            fn $method(self, other: T) -> Self::Output {
                self.$op(other)
            }
        }

        impl<T: IntegerOperand> $trait<T> for BitSet {
            type Output = Result<BitSet, StateError>;

            fn $method(self, other: T) -> Self::Output {
                self.$op(other)
            }
        }
    };
}

integer_operator!(BitOr, bitor, union);
integer_operator!(BitAnd, bitand, intersection);
integer_operator!(BitXor, bitxor, symmetric_difference);

impl<T: DigitOperand> Add<T> for &BitSet {
    type Output = Result<BitSet, StateError>;

    fn add(self, other: T) -> Self::Output {
        self.add_digits(other)
    }
}

impl<T: DigitOperand> Sub<T> for &BitSet {
    type Output = BitSet;

    fn sub(self, other: T) -> BitSet {
        self.remove_digits(other)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, hash_map::DefaultHasher};

    use super::*;
    use crate::digit::DisplaySpec;

    fn traffic_light() -> Configuration {
        Configuration::from_display([("red", "r"), ("yellow", "y"), ("green", "g")]).unwrap()
    }

    fn generic() -> Configuration {
        Configuration::from_digits(["a", "b", "c", "d", "e"]).unwrap()
    }

    fn hash_of(bit_set: &BitSet) -> u64 {
        let mut hasher = DefaultHasher::new();
        bit_set.hash(&mut hasher);
        hasher.finish()
    }

    struct Fields {
        integer_representation: u64,
        configuration: Configuration,
    }

    impl BitSetFields for Fields {
        fn integer_representation(&self) -> u64 {
            self.integer_representation
        }

        fn configuration(&self) -> &Configuration {
            &self.configuration
        }
    }

    #[test]
    fn test_empty() {
        let configuration = generic();
        let bit_set = BitSet::empty(&configuration).unwrap();
        assert_eq!(bit_set.to_i(), 0);
        assert_eq!(bit_set.configuration(), &configuration);
    }

    #[test]
    fn test_new_from_integer() {
        let bit_set = BitSet::new(0b01010, generic()).unwrap();
        assert_eq!(bit_set.to_i(), 0b01010);
    }

    #[test]
    fn test_new_from_digit_list() {
        let bit_set = BitSet::new(["red", "green"], traffic_light()).unwrap();
        assert_eq!(bit_set.to_i(), 0b101);
    }

    #[test]
    fn test_new_from_digit_set() {
        let bit_set = BitSet::new(BTreeSet::from(["red", "green"]), traffic_light()).unwrap();
        assert_eq!(bit_set.to_i(), 0b101);
    }

    #[test]
    fn test_new_with_on_the_fly_configuration() {
        let raw = vec![
            ("symmetric", DisplaySpec::Default),
            ("transitive", "t".into()),
            ("antisymmetric", ("a", "x").into()),
        ];
        let bit_set = BitSet::new(["symmetric", "transitive"], raw.clone()).unwrap();

        assert_eq!(bit_set.to_i(), 0b110);
        assert_eq!(bit_set.to_s(Format::Long).unwrap(), "1tx");
        assert_eq!(bit_set.configuration(), &Configuration::build(raw).unwrap());
    }

    #[test_log::test]
    fn test_new_reports_every_invalid_digit() {
        assert_eq!(
            BitSet::new(["white", "blue", "green"], traffic_light()).unwrap_err(),
            StateError::InvalidDigits(vec!["white".to_string(), "blue".to_string()])
        );
    }

    #[test]
    fn test_invalid_digits_message() {
        let err = BitSet::new(["white", "blue", "green"], traffic_light()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid digit(s): white, blue");
    }

    #[test]
    fn test_new_with_single_invalid_digit() {
        assert_eq!(
            BitSet::new("invalid", traffic_light()).unwrap_err(),
            StateError::InvalidDigits(vec!["invalid".to_string()])
        );
    }

    #[test]
    fn test_new_with_invalid_configuration() {
        assert!(matches!(
            BitSet::new(3, [("invalid", "12")]).unwrap_err(),
            StateError::Configuration(_)
        ));
    }

    #[test]
    fn test_new_rejects_integer_above_max() {
        assert_eq!(
            BitSet::new(0b1000, traffic_light()).unwrap_err(),
            StateError::InvalidState {
                state: 0b1000,
                max: 0b111
            }
        );
    }

    #[test]
    fn test_new_rejects_negative_integer() {
        assert!(matches!(
            BitSet::new(-1, traffic_light()).unwrap_err(),
            StateError::InvalidState { state: -1, .. }
        ));
    }

    #[test]
    fn test_state() {
        let bit_set = BitSet::new(0b10101, generic()).unwrap();
        assert_eq!(
            bit_set.state(),
            vec![
                ("a", true),
                ("b", false),
                ("c", true),
                ("d", false),
                ("e", true)
            ]
        );
        assert_eq!(bit_set.attributes(), bit_set.state());
    }

    #[test]
    fn test_get_by_name() {
        let bit_set = BitSet::new(0b100, traffic_light()).unwrap();
        assert_eq!(bit_set.get("red"), Ok(true));
        assert_eq!(bit_set.get("green"), Ok(false));
    }

    #[test]
    fn test_get_by_index() {
        let bit_set = BitSet::new(0b11101, generic()).unwrap();
        assert_eq!(bit_set.get(0), Ok(true));
        assert_eq!(bit_set.get(3), Ok(false));
    }

    #[test]
    fn test_get_invalid_digit() {
        let bit_set = BitSet::new(0b100, traffic_light()).unwrap();
        assert_eq!(
            bit_set.get("blue").unwrap_err(),
            DigitError::UnknownDigit("blue".to_string())
        );
        assert_eq!(
            bit_set.get(7).unwrap_err(),
            DigitError::IndexOutOfRange { index: 7, len: 3 }
        );
    }

    #[test]
    fn test_enabled_digits() {
        let bit_set = BitSet::new(0b10101, generic()).unwrap();
        assert_eq!(bit_set.enabled_digits(), vec!["a", "c", "e"]);
    }

    #[test]
    fn test_disabled_digits() {
        let bit_set = BitSet::new(0b001, traffic_light()).unwrap();
        assert_eq!(bit_set.disabled_digits(), vec!["red", "yellow"]);
    }

    #[test]
    fn test_invert() {
        let bit_set = BitSet::new(0b101, traffic_light()).unwrap();
        let inverted = bit_set.invert();
        assert_eq!(inverted.to_i(), 0b010);
        assert!(inverted.configuration().ptr_eq(bit_set.configuration()));
        assert_eq!((!&bit_set).to_i(), 0b010);
        assert_eq!(bit_set.to_i(), 0b101);
    }

    #[test]
    fn test_add_bit_set() {
        let bit_set = BitSet::new(0b01000, generic()).unwrap();
        let other = BitSet::new(["a", "d"], generic()).unwrap();
        assert_eq!(bit_set.add_digits(&other).unwrap().to_i(), 0b11010);
    }

    #[test]
    fn test_add_digit_names() {
        let bit_set = BitSet::new(0b01010, generic()).unwrap();
        assert_eq!((&bit_set + ["a", "d"]).unwrap().to_i(), 0b11010);
    }

    #[test]
    fn test_add_unknown_digit() {
        let bit_set = BitSet::new(0b001, traffic_light()).unwrap();
        assert_eq!(
            bit_set.add_digits("blue").unwrap_err(),
            StateError::InvalidDigits(vec!["blue".to_string()])
        );
    }

    #[test]
    fn test_remove_bit_set() {
        let bit_set = BitSet::new(0b110, traffic_light()).unwrap();
        let other = BitSet::new(["yellow", "green"], traffic_light()).unwrap();
        assert_eq!(bit_set.remove_digits(&other).to_i(), 0b100);
    }

    #[test]
    fn test_remove_digit_names() {
        let bit_set = BitSet::new(0b101, traffic_light()).unwrap();
        assert_eq!((&bit_set - vec!["red", "yellow"]).to_i(), 0b001);
    }

    #[test]
    fn test_remove_ignores_unknown_and_disabled_digits() {
        let bit_set = BitSet::new(0b101, traffic_light()).unwrap();
        assert_eq!(&bit_set - ["blue"], bit_set);
        assert_eq!(bit_set.remove_digits(["yellow", "blue"]), bit_set);
        assert_eq!(bit_set.remove_digits(["green", "blue"]).to_i(), 0b100);
    }

    #[test]
    fn test_display_matches_long_format() {
        for value in 0..=0b111 {
            let bit_set = BitSet::new(value, traffic_light()).unwrap();
            assert_eq!(bit_set.to_string(), bit_set.to_s(Format::Long).unwrap());
        }
    }

    #[test]
    fn test_union() {
        let bit_set = BitSet::new(0b01101, generic()).unwrap();
        let other = BitSet::new(["d", "e"], generic()).unwrap();
        assert_eq!(bit_set.union(&other).unwrap().to_i(), 0b01111);
        assert_eq!((&bit_set | 0b00011).unwrap().to_i(), 0b01111);
    }

    #[test]
    fn test_union_out_of_range() {
        let bit_set = BitSet::new(0b001, traffic_light()).unwrap();
        assert!(matches!(
            bit_set.union(0b1000),
            Err(StateError::InvalidState { .. })
        ));
    }

    #[test]
    fn test_intersection() {
        let bit_set = BitSet::new(0b110, traffic_light()).unwrap();
        let other = BitSet::new(["yellow", "green"], traffic_light()).unwrap();
        assert_eq!(bit_set.intersection(&other).unwrap().to_i(), 0b010);
        assert_eq!((&bit_set & 0b011).unwrap().to_i(), 0b010);
    }

    #[test]
    fn test_symmetric_difference() {
        let bit_set = BitSet::new(0b01101, generic()).unwrap();
        let other = BitSet::new(["d", "e"], generic()).unwrap();
        assert_eq!(bit_set.symmetric_difference(&other).unwrap().to_i(), 0b01110);
        assert_eq!((bit_set ^ 0b00011).unwrap().to_i(), 0b01110);
    }

    #[test]
    fn test_equality() {
        let bit_set = BitSet::new(0b110, traffic_light()).unwrap();
        assert_eq!(bit_set, BitSet::new(0b110, traffic_light()).unwrap());
        assert_ne!(bit_set, BitSet::new(0b010, traffic_light()).unwrap());
        assert_ne!(bit_set, BitSet::new(0b110, generic()).unwrap());
        assert_ne!(bit_set, BitSet::new(0b010, generic()).unwrap());
    }

    #[test]
    fn test_equality_with_other_type() {
        let bit_set = BitSet::new(0b110, traffic_light()).unwrap();
        let fields = Fields {
            integer_representation: 0b110,
            configuration: traffic_light(),
        };
        assert!(bit_set == fields);
        assert!(!bit_set.eql(&fields));
    }

    #[test]
    fn test_eql() {
        let bit_set = BitSet::new(0b110, traffic_light()).unwrap();
        assert!(bit_set.eql(&BitSet::new(0b110, traffic_light()).unwrap()));
        assert!(!bit_set.eql(&BitSet::new(0b110, generic()).unwrap()));
        assert!(!bit_set.eql(&BitSet::new(0b010, traffic_light()).unwrap()));
    }

    #[test]
    fn test_ordering() {
        let bit_set = BitSet::new(11, generic()).unwrap();
        assert_eq!(
            bit_set.partial_cmp(&BitSet::new(12, generic()).unwrap()),
            Some(Ordering::Less)
        );
        assert_eq!(
            bit_set.partial_cmp(&BitSet::new(11, generic()).unwrap()),
            Some(Ordering::Equal)
        );
        assert_eq!(
            bit_set.partial_cmp(&BitSet::new(10, generic()).unwrap()),
            Some(Ordering::Greater)
        );
        assert!(bit_set < BitSet::new(12, generic()).unwrap());
    }

    #[test]
    fn test_ordering_different_configuration() {
        let bit_set = BitSet::new(5, generic()).unwrap();
        let other = BitSet::new(5, traffic_light()).unwrap();
        assert_eq!(bit_set.partial_cmp(&other), None);
        assert!(!(bit_set < other) && !(bit_set > other));
    }

    #[test]
    fn test_hash() {
        let bit_set = BitSet::new(0b110, traffic_light()).unwrap();
        assert_eq!(hash_of(&bit_set), hash_of(&bit_set.clone()));
        assert_eq!(
            hash_of(&bit_set),
            hash_of(&BitSet::new(["red", "yellow"], traffic_light()).unwrap())
        );

        let same_value = Configuration::from_digits(["x", "y", "z"]).unwrap();
        assert_ne!(
            hash_of(&bit_set),
            hash_of(&BitSet::new(0b110, same_value).unwrap())
        );
    }

    #[test]
    fn test_to_s_long() {
        let bit_set = BitSet::new(0b101, traffic_light()).unwrap();
        assert_eq!(bit_set.to_s(Format::Long).unwrap(), "r-g");
        assert_eq!(bit_set.to_string(), "r-g");
    }

    #[test]
    fn test_to_s_long_defaults() {
        let bit_set = BitSet::new(0b01101, generic()).unwrap();
        assert_eq!(bit_set.to_s(Format::default()).unwrap(), "01101");
    }

    #[test]
    fn test_to_s_short() {
        let bit_set = BitSet::new(0b101, traffic_light()).unwrap();
        assert_eq!(bit_set.to_s(Format::Short).unwrap(), "rg");
    }

    #[test]
    fn test_to_s_short_empty() {
        let bit_set = BitSet::new(0, traffic_light()).unwrap();
        assert_eq!(bit_set.to_s(Format::Short).unwrap(), "-");
    }

    #[test]
    fn test_to_s_short_unavailable() {
        let bit_set = BitSet::new(0b101, generic()).unwrap();
        assert_eq!(
            bit_set.to_s(Format::Short).unwrap_err(),
            FormatError::ShortFormatUnavailable
        );
    }

    #[test]
    fn test_debug() {
        let bit_set = BitSet::new(0b101, traffic_light()).unwrap();
        assert_eq!(format!("{:?}", bit_set), "BitSet(\"r-g\")");
    }
}
