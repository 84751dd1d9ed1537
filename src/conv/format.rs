//! Integer to text conversion.
//!
//! Digits are produced least significant first, the sign (if any) is
//! appended, and the run is reversed in place before the NUL terminator is
//! written. Zero renders as `"0"`.
//!
//! Signed values are rendered from their unsigned magnitude, so `i64::MIN`
//! needs no special case.

use core::fmt::{self, Debug, Display, Formatter};

use crate::conv::alphabet::{ALPHABET_LOWER, ALPHABET_UPPER, Radix};
use crate::conv::{ConvError, Flags};
use crate::memory::mem_rev;

/// Bytes needed for the longest rendering: 64 binary digits, a sign and
/// the terminator.
pub const MAX_FORMATTED_LEN: usize = 66;

fn render(
    magnitude: u64,
    negative: bool,
    buf: &mut [u8],
    radix: u32,
    flags: Flags,
) -> Result<usize, ConvError> {
    let radix = Radix::new(radix)?;
    let base = radix.get() as u64;

    let alphabet = if flags.contains(Flags::UPPERCASE) {
        ALPHABET_UPPER
    } else {
        ALPHABET_LOWER
    };

    let mut value = magnitude;
    let mut len = 0;

    loop {
        let slot = buf.get_mut(len).ok_or(ConvError::BufferTooSmall)?;
        *slot = alphabet[(value % base) as usize];
        len += 1;

        value /= base;
        if value == 0 {
            break;
        }
    }

    if negative && !flags.contains(Flags::ABS) {
        let slot = buf.get_mut(len).ok_or(ConvError::BufferTooSmall)?;
        *slot = b'-';
        len += 1;
    }

    let terminator = buf.get_mut(len).ok_or(ConvError::BufferTooSmall)?;
    *terminator = 0;

    mem_rev(&mut buf[..len]);

    Ok(len)
}

/// Writes `value` into `buf` as NUL-terminated text in the given radix.
///
/// # Returns
///
/// The length of the text, excluding the terminator.
///
/// # Errors
///
/// - [`ConvError::BadRadix`] if `radix` is outside `2..=36`; `buf` is
///   left untouched
/// - [`ConvError::BufferTooSmall`] if `buf` cannot hold the text and its
///   terminator; `buf` may hold a partial rendering
///
/// A buffer of [`MAX_FORMATTED_LEN`] bytes always suffices.
pub fn format_i64(
    value: i64,
    buf: &mut [u8],
    radix: u32,
    flags: Flags,
) -> Result<usize, ConvError> {
    render(value.unsigned_abs(), value < 0, buf, radix, flags)
        .inspect_err(|err| log::trace!("signed format failed: {err}"))
}

/// Writes `value` into `buf` as NUL-terminated text in the given radix.
///
/// [`Flags::ABS`] has no effect on unsigned values.
///
/// # Errors
///
/// Same as [`format_i64`].
pub fn format_u64(
    value: u64,
    buf: &mut [u8],
    radix: u32,
    flags: Flags,
) -> Result<usize, ConvError> {
    render(value, false, buf, radix, flags)
        .inspect_err(|err| log::trace!("unsigned format failed: {err}"))
}

/// Writes `n` into `buf` with lowercase digits.
///
/// Returns the index just past the terminator, or `0` if nothing could be
/// written.
pub fn itoa(n: i32, buf: &mut [u8], radix: u32) -> usize {
    format_i64(n as i64, buf, radix, Flags::empty()).map_or(0, |len| len + 1)
}

/// Writes `n` into `buf` with lowercase digits.
///
/// Returns the index just past the terminator, or `0` if nothing could be
/// written.
pub fn utoa(n: u32, buf: &mut [u8], radix: u32) -> usize {
    format_u64(n as u64, buf, radix, Flags::empty()).map_or(0, |len| len + 1)
}

/// Integer text held in a stack buffer sized for any 64-bit value.
#[derive(Copy, Clone)]
pub struct Formatted {
    buf: [u8; MAX_FORMATTED_LEN],
    len: usize,
}

impl Formatted {
    /// Formats a signed value.
    pub fn signed(value: i64, radix: u32, flags: Flags) -> Result<Self, ConvError> {
        let mut buf = [0u8; MAX_FORMATTED_LEN];
        let len = format_i64(value, &mut buf, radix, flags)?;

        Ok(Self { buf, len })
    }

    /// Formats an unsigned value.
    pub fn unsigned(value: u64, radix: u32, flags: Flags) -> Result<Self, ConvError> {
        let mut buf = [0u8; MAX_FORMATTED_LEN];
        let len = format_u64(value, &mut buf, radix, flags)?;

        Ok(Self { buf, len })
    }

    /// The text, without terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// The text followed by its NUL terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf[..=self.len]
    }

    /// The text as a string slice.
    pub fn as_str(&self) -> &str {
        // Only alphabet symbols and `-` are ever written.
        core::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    /// Length of the text, excluding the terminator.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: every rendering holds at least one digit.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl AsRef<[u8]> for Formatted {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Display for Formatted {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Debug for Formatted {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Formatted").field(&self.as_str()).finish()
    }
}
