//! Character classification
//!
//! This module classifies single bytes according to the "C" locale and
//! performs ASCII case folding. Bytes outside the ASCII range belong to
//! no class and are never case-folded.
//!
//! The classification data lives in [`CTYPE`], a 256-entry table built at
//! compile time. It is read-only for the life of the program.
//!
//! As with `memory`, two backends share one surface:
//! - [`portable`]: answers every query from [`CTYPE`]
//! - [`host`]: defers to `u8::is_ascii_*` and `u8::to_ascii_*`
//!
//! The `speed` feature selects the re-exported backend.

mod table;

pub mod host;
pub mod portable;

pub use table::{CTYPE, CharClass, class_of};

#[cfg(feature = "speed")]
pub use host::*;

#[cfg(not(feature = "speed"))]
pub use portable::*;
