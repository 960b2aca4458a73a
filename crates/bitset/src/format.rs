//! String formats for rendering a [crate::bit_set::BitSet].
//!
//! - **Long**: one character per digit in declaration order, enabled or disabled
//!   character depending on the digit's state. Fixed width.
//! - **Short**: only the enabled characters of digits that are on, in declaration
//!   order. A zero state renders as `-`. Needs unique enabled characters.

use std::{fmt, str::FromStr};

use crate::errors::FormatError;

/// Rendered in short format when no digit is enabled.
pub const EMPTY_SHORT: char = '-';

/// Selects how a bit set is rendered as a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Format {
    #[default]
    Long,
    Short,
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "long" => Ok(Format::Long),
            "short" => Ok(Format::Short),
            other => Err(FormatError::InvalidFormat(other.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Long => f.write_str("long"),
            Format::Short => f.write_str("short"),
        }
    }
}
