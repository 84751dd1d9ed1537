//! Digit alphabets and radix validation.

use crate::conv::ConvError;
use crate::ctype::to_upper;
use crate::memory::mem_chr;

/// Digits for radices up to 36, uppercase letters.
///
/// The index of a symbol is its numeric value.
pub const ALPHABET_UPPER: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Digits for radices up to 36, lowercase letters.
pub const ALPHABET_LOWER: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A radix known to lie in `2..=36`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Radix(u32);

impl Radix {
    pub(crate) const MIN: u32 = 2;
    pub(crate) const MAX: u32 = 36;

    pub(crate) fn new(radix: u32) -> Result<Self, ConvError> {
        if !(Self::MIN..=Self::MAX).contains(&radix) {
            log::trace!("rejected radix {radix}");
            return Err(ConvError::BadRadix);
        }

        Ok(Radix(radix))
    }

    #[inline]
    pub(crate) fn get(self) -> u32 {
        self.0
    }

    /// Returns the value of `c` as a digit of this radix.
    ///
    /// Letters match in either case. Returns `None` if `c` is not in the
    /// alphabet or its value is not below the radix.
    pub(crate) fn digit(self, c: u8) -> Option<u32> {
        let pos = mem_chr(ALPHABET_UPPER, to_upper(c))?;

        if pos >= self.0 as usize {
            return None;
        }

        Some(pos as u32)
    }
}
