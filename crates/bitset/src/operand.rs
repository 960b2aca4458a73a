//! Right-hand operands of the bit set operators, and the structural view used for equality.

use crate::{bit_set::BitSet, configuration::Configuration};

/// The two logical fields that make up a bit set value.
///
/// [BitSet] compares equal to any implementor with the same integer and configuration.
pub trait BitSetFields {
    fn integer_representation(&self) -> u64;
    fn configuration(&self) -> &Configuration;
}

impl<T: BitSetFields + ?Sized> BitSetFields for &T {
    fn integer_representation(&self) -> u64 {
        (**self).integer_representation()
    }

    fn configuration(&self) -> &Configuration {
        (**self).configuration()
    }
}

/// Operand of `union`, `intersection` and `symmetric_difference`: a bit set or a raw integer.
pub trait IntegerOperand {
    fn integer_operand(&self) -> i128;
}

impl IntegerOperand for BitSet {
    fn integer_operand(&self) -> i128 {
        self.to_i() as i128
    }
}

impl<T: IntegerOperand + ?Sized> IntegerOperand for &T {
    fn integer_operand(&self) -> i128 {
        (**self).integer_operand()
    }
}

macro_rules! integer_operand {
    ($($ty:ty),+) => {
        $(
            impl IntegerOperand for $ty {
                fn integer_operand(&self) -> i128 {
                    *self as i128
                }
            }
        )+
    };
}

integer_operand!(u8, u16, u32, u64, usize, i32, i64);

/// Operand of digit addition and removal: a bit set (its enabled digits) or digit names.
pub trait DigitOperand {
    fn digit_names(&self) -> Vec<String>;
}

impl DigitOperand for BitSet {
    fn digit_names(&self) -> Vec<String> {
        self.enabled_digits()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

impl<T: DigitOperand + ?Sized> DigitOperand for &T {
    fn digit_names(&self) -> Vec<String> {
        (**self).digit_names()
    }
}

impl DigitOperand for str {
    fn digit_names(&self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl DigitOperand for [&str] {
    fn digit_names(&self) -> Vec<String> {
        self.iter().map(|digit| digit.to_string()).collect()
    }
}

impl<const N: usize> DigitOperand for [&str; N] {
    fn digit_names(&self) -> Vec<String> {
        self.as_slice().digit_names()
    }
}

impl DigitOperand for Vec<&str> {
    fn digit_names(&self) -> Vec<String> {
        self.as_slice().digit_names()
    }
}

impl DigitOperand for [String] {
    fn digit_names(&self) -> Vec<String> {
        self.to_vec()
    }
}

impl DigitOperand for Vec<String> {
    fn digit_names(&self) -> Vec<String> {
        self.clone()
    }
}
