//! Memory and string primitives
//!
//! This module provides slice-based forms of the classic C memory and
//! string routines. Strings are byte slices terminated by the first NUL
//! byte; a slice without a NUL is treated as if the terminator sat just
//! past its end.
//!
//! Two implementations exist with the same public surface:
//! - [`portable`]: explicit byte loops with no reliance on `core`'s
//!   optimized slice routines
//! - [`host`]: thin wrappers over `core` (`copy_from_slice`,
//!   `copy_within`, `fill`, `reverse`, ...)
//!
//! The backend re-exported at this level is selected at compile time by
//! the `speed` feature. Both remain public so callers can pin one.

pub mod host;
pub mod portable;

#[cfg(feature = "speed")]
pub use host::*;

#[cfg(not(feature = "speed"))]
pub use portable::*;
