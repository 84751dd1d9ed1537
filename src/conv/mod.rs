//! Radix conversion between text and integers
//!
//! This module converts between textual integers and `i64` / `u64` for
//! every radix from 2 to 36, in both directions.
//!
//! The implementation is split into:
//!
//! - [`alphabet`]
//!   The two 36-symbol digit alphabets and radix validation.
//!
//! - [`status`]
//!   Outcome types shared by both directions: [`Status`] for successful
//!   conversions (including the non-fatal overflow warning), [`ConvError`]
//!   for failures, and the formatting [`Flags`].
//!
//! - [`parse`]
//!   Text to integer. Scanning stops at the first byte that is not a digit
//!   of the radix; a valid prefix is a success, not an error.
//!
//! - [`format`]
//!   Integer to text, into a caller buffer or a stack-allocated
//!   [`Formatted`].
//!
//! ## Error model
//!
//! Errors are values. A bad radix fails the call before anything is
//! scanned or written. Empty or entirely invalid input fails with a value
//! of zero implied. Overflow while parsing is reported through
//! [`Status::Overflow`] alongside the wrapped value.
//!
//! The `atoi` / `atou` / `itoa` / `utoa` helpers are a deliberately lossy
//! convenience layer: they fix the radix (parsing) and collapse every
//! error to zero.

pub mod alphabet;
pub mod format;
pub mod parse;
pub mod status;

pub use alphabet::{ALPHABET_LOWER, ALPHABET_UPPER};
pub use format::{Formatted, MAX_FORMATTED_LEN, format_i64, format_u64, itoa, utoa};
pub use parse::{Parsed, atoi, atou, parse_i64, parse_u64};
pub use status::{ConvError, Flags, Status};
