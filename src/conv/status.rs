//! Conversion outcomes and formatting flags.

use core::fmt::{Display, Formatter, Result};

/// Outcome of a conversion that produced a usable value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    /// The value is exact.
    Ok,

    /// The value exceeded the target width and wrapped.
    ///
    /// This is a warning: the wrapped value is still returned.
    Overflow,
}

impl Status {
    /// Returns the C-style status code (`0` or `1`).
    pub const fn code(self) -> i32 {
        match self {
            Status::Ok => 0,
            Status::Overflow => 1,
        }
    }

    /// Returns `true` if the value wrapped.
    pub const fn is_overflow(self) -> bool {
        matches!(self, Status::Overflow)
    }
}

/// Errors that can occur during radix conversion.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConvError {
    /// The radix is outside `2..=36`.
    BadRadix,

    /// The input held no candidate digit at all.
    ///
    /// Only separators, signs, or nothing were found.
    Empty,

    /// The first candidate digit was not valid for the radix.
    InvalidCharacter,

    /// The output buffer cannot hold the text and its terminator.
    BufferTooSmall,
}

impl ConvError {
    /// Returns the C-style (negative) error code.
    pub const fn code(self) -> i32 {
        match self {
            ConvError::Empty => -1,
            ConvError::InvalidCharacter => -2,
            ConvError::BadRadix => -4,
            ConvError::BufferTooSmall => -8,
        }
    }
}

impl Display for ConvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let msg = match self {
            ConvError::BadRadix => "radix must be between 2 and 36",
            ConvError::Empty => "no digits in input",
            ConvError::InvalidCharacter => "invalid digit for radix",
            ConvError::BufferTooSmall => "output buffer too small",
        };

        f.write_str(msg)
    }
}

impl core::error::Error for ConvError {}

bitflags::bitflags! {
    /// Formatting options.
    ///
    /// Flags are independent and combine with `|`. The empty set means
    /// lowercase digits with the sign shown for negative values.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flags: u32 {
        /// Render letter digits in uppercase.
        const UPPERCASE = 0x0000_0001;

        /// Omit the `-` sign of negative values.
        const ABS = 0x0000_0002;
    }
}
