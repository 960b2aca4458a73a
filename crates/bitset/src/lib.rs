//! # bitset
//!
//! Fixed-width bit sets whose bits ("digits") are addressed by name or position.
//!
//! A [Configuration] declares the digits in order and how each one is rendered.
//! The last declared digit is worth `1`, the one before it `2`, and so on. A
//! [BitSet] is an immutable integer value bound to a configuration, with set
//! algebra, ordering, hashing and two string formats.
//!
//! ## Example
//!
//! ```
//! use bitset::{BitSet, Configuration, Format};
//!
//! let permissions = Configuration::from_display([("read", "r"), ("write", "w"), ("execute", "x")]).unwrap();
//!
//! let mode = permissions.bit_set(["read", "execute"]).unwrap();
//! assert_eq!(mode.to_i(), 0b101);
//! assert_eq!(mode.to_s(Format::Long).unwrap(), "r-x");
//! assert_eq!(mode.invert().to_s(Format::Short).unwrap(), "w");
//! assert_eq!(mode.get("write"), Ok(false));
//! ```

pub mod accessors;
pub mod bit_set;
pub mod configuration;
pub mod digit;
pub mod errors;
pub mod format;
pub mod operand;
#[cfg(feature = "serde")]
pub mod serde;
pub mod state;

pub use bit_set::BitSet;
pub use configuration::{Configuration, IntoConfiguration};
pub use digit::{Digit, DigitRef, DisplaySpec};
pub use format::Format;
pub use operand::BitSetFields;
pub use state::State;
