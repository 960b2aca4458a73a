//! Initial state accepted by [crate::bit_set::BitSet::new].
//!
//! A state is either an integer, taken as the bit pattern directly, or a
//! collection of enabled digit names.

use std::collections::{BTreeSet, HashSet};

/// Initial state of a bit set: an integer or the names of the enabled digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    /// Raw integer representation. Kept wide so negative or oversized input can be reported.
    Integer(i128),
    /// Names of the digits to enable.
    Digits(Vec<String>),
}

impl State {
    /// Collects digit names into a symbolic state.
    pub fn digits<I, S>(digits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        State::Digits(
            digits
                .into_iter()
                .map(|digit| digit.as_ref().to_string())
                .collect(),
        )
    }
}

impl Default for State {
    fn default() -> Self {
        State::Integer(0)
    }
}

macro_rules! integer_state {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for State {
                fn from(value: $ty) -> Self {
                    State::Integer(value as i128)
                }
            }
        )+
    };
}

integer_state!(u8, u16, u32, u64, usize, i32, i64);

impl From<&str> for State {
    fn from(value: &str) -> Self {
        State::Digits(vec![value.to_string()])
    }
}

impl From<String> for State {
    fn from(value: String) -> Self {
        State::Digits(vec![value])
    }
}

impl From<&[&str]> for State {
    fn from(value: &[&str]) -> Self {
        State::digits(value)
    }
}

impl<const N: usize> From<[&str; N]> for State {
    fn from(value: [&str; N]) -> Self {
        State::digits(value)
    }
}

impl From<Vec<&str>> for State {
    fn from(value: Vec<&str>) -> Self {
        State::digits(value)
    }
}

impl From<&[String]> for State {
    fn from(value: &[String]) -> Self {
        State::digits(value)
    }
}

impl From<Vec<String>> for State {
    fn from(value: Vec<String>) -> Self {
        State::Digits(value)
    }
}

impl From<BTreeSet<&str>> for State {
    fn from(value: BTreeSet<&str>) -> Self {
        State::digits(value)
    }
}

impl From<HashSet<&str>> for State {
    fn from(value: HashSet<&str>) -> Self {
        State::digits(value)
    }
}

// One level of nesting is flattened.
impl From<Vec<Vec<&str>>> for State {
    fn from(value: Vec<Vec<&str>>) -> Self {
        State::digits(value.into_iter().flatten())
    }
}
