//! Text to integer conversion.
//!
//! Input is scanned left to right in a single pass and ends at the first
//! NUL byte or at the end of the slice.
//!
//! - `-` marks the value negative (signed parsing only). It may appear
//!   anywhere and is not a digit candidate.
//! - Tab, LF, VT, FF, CR, space, `+` and `_` are separators. They are
//!   skipped without affecting anything else.
//! - Every other byte is a digit candidate. The first candidate that is
//!   not a digit of the radix ends the scan; the remaining input is left
//!   unconsumed.
//!
//! Digits accumulate as `acc * radix + digit` with overflowing arithmetic.
//! Overflow is sticky and reported as [`Status::Overflow`], but the scan
//! continues with the wrapped accumulator.

use crate::conv::alphabet::Radix;
use crate::conv::{ConvError, Status};
use crate::memory::mem_chr;

const SEPARATORS: &[u8] = b"\t\n\x0B\x0C\r +_";

/// A successfully parsed integer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Parsed<T> {
    /// The parsed value, wrapped if `status` is [`Status::Overflow`].
    pub value: T,

    /// Whether the value is exact.
    pub status: Status,

    /// Offset of the byte that ended the scan.
    ///
    /// Equals the string length when the whole input was consumed, which
    /// lets callers reject trailing garbage.
    pub consumed: usize,
}

struct Scan {
    magnitude: u64,
    negative: bool,
    overflow: bool,
    consumed: usize,
}

fn scan(text: &[u8], radix: Radix, signed: bool) -> Result<Scan, ConvError> {
    let base = radix.get() as u64;

    let mut acc = 0u64;
    let mut negative = false;
    let mut looped = false;
    let mut digits = false;
    let mut overflow = false;
    let mut pos = 0;

    while pos < text.len() {
        let c = text[pos];

        if c == 0 {
            break;
        }

        if signed && c == b'-' {
            negative = true;
            pos += 1;
            continue;
        }

        if mem_chr(SEPARATORS, c).is_some() {
            pos += 1;
            continue;
        }

        looped = true;

        let Some(digit) = radix.digit(c) else {
            break;
        };

        digits = true;

        let (mul, mul_overflow) = acc.overflowing_mul(base);
        let (sum, add_overflow) = mul.overflowing_add(digit as u64);

        acc = sum;
        overflow |= mul_overflow | add_overflow;
        pos += 1;
    }

    if !digits {
        return Err(if looped {
            ConvError::InvalidCharacter
        } else {
            ConvError::Empty
        });
    }

    Ok(Scan {
        magnitude: acc,
        negative,
        overflow,
        consumed: pos,
    })
}

fn status(overflow: bool) -> Status {
    if overflow {
        Status::Overflow
    } else {
        Status::Ok
    }
}

/// Parses a signed integer in the given radix.
///
/// # Returns
///
/// The value, negated if a `-` was seen, with [`Status::Overflow`] if the
/// magnitude did not fit in an `i64`. The wrapped value is the same one a
/// wrapping `i64` accumulation would produce. `i64::MIN` itself parses
/// exactly.
///
/// # Errors
///
/// - [`ConvError::BadRadix`] if `radix` is outside `2..=36`
/// - [`ConvError::Empty`] if the input holds no digit candidate
/// - [`ConvError::InvalidCharacter`] if the first candidate is not a digit
///
/// In both input errors the value is zero.
pub fn parse_i64<T: AsRef<[u8]> + ?Sized>(
    text: &T,
    radix: u32,
) -> Result<Parsed<i64>, ConvError> {
    let radix = Radix::new(radix)?;
    let scan = scan(text.as_ref(), radix, true)
        .inspect_err(|err| log::trace!("signed parse failed: {err} (radix {})", radix.get()))?;

    let limit = if scan.negative {
        i64::MIN.unsigned_abs()
    } else {
        i64::MAX as u64
    };
    let overflow = scan.overflow || scan.magnitude > limit;

    let value = if scan.negative {
        (scan.magnitude as i64).wrapping_neg()
    } else {
        scan.magnitude as i64
    };

    if overflow {
        log::trace!("signed parse overflowed i64 (radix {})", radix.get());
    }

    Ok(Parsed {
        value,
        status: status(overflow),
        consumed: scan.consumed,
    })
}

/// Parses an unsigned integer in the given radix.
///
/// No sign is recognized: a `-` is an ordinary digit candidate and is
/// never valid, so it ends the scan.
///
/// # Errors
///
/// Same as [`parse_i64`].
pub fn parse_u64<T: AsRef<[u8]> + ?Sized>(
    text: &T,
    radix: u32,
) -> Result<Parsed<u64>, ConvError> {
    let radix = Radix::new(radix)?;
    let scan = scan(text.as_ref(), radix, false)
        .inspect_err(|err| log::trace!("unsigned parse failed: {err} (radix {})", radix.get()))?;

    if scan.overflow {
        log::trace!("unsigned parse overflowed u64 (radix {})", radix.get());
    }

    Ok(Parsed {
        value: scan.magnitude,
        status: status(scan.overflow),
        consumed: scan.consumed,
    })
}

/// Parses a decimal `i32`, returning `0` on any error.
///
/// Overflow is not an error here: the value is truncated to 32 bits.
pub fn atoi<T: AsRef<[u8]> + ?Sized>(text: &T) -> i32 {
    parse_i64(text, 10).map_or(0, |parsed| parsed.value as i32)
}

/// Parses a decimal `u32`, returning `0` on any error.
pub fn atou<T: AsRef<[u8]> + ?Sized>(text: &T) -> u32 {
    parse_u64(text, 10).map_or(0, |parsed| parsed.value as u32)
}
