//! Strongly-typed per-digit accessors generated at compile time.

/// Declares a trait with one accessor per digit name and implements it for [crate::BitSet].
///
/// Each accessor returns the digit's on/off state, or a [crate::errors::DigitError]
/// if the bit set's configuration has no digit of that name.
///
/// ```
/// use bitset::{BitSet, digit_accessors};
///
/// digit_accessors! {
///     pub trait TrafficLight { red, yellow, green }
/// }
///
/// let bit_set = BitSet::new(0b001, ["red", "yellow", "green"]).unwrap();
/// assert_eq!(bit_set.green(), Ok(true));
/// assert_eq!(bit_set.red(), Ok(false));
/// ```
#[macro_export]
macro_rules! digit_accessors {
    ($(#[$meta:meta])* $vis:vis trait $name:ident { $($digit:ident),+ $(,)? }) => {
        $(#[$meta])*
        $vis trait $name {
            $(
                fn $digit(&self) -> ::core::result::Result<bool, $crate::errors::DigitError>;
            )+
        }

        impl $name for $crate::bit_set::BitSet {
            $(
                fn $digit(&self) -> ::core::result::Result<bool, $crate::errors::DigitError> {
                    self.get(stringify!($digit))
                }
            )+
        }
    };
}
