//! Freestanding replacements for a handful of C library primitives
//!
//! This crate provides byte and string primitives, character
//! classification, and radix-based integer conversion for environments
//! where the platform standard library is unavailable or undesirable.
//!
//! The focus is on **predictability and explicit semantics**: every
//! function is pure, works on caller-provided buffers, and never
//! allocates.
//!
//! # Module overview
//!
//! - `memory`
//!   Byte-slice and NUL-terminated string primitives (copy, move,
//!   compare, search, reverse, set). Two interchangeable backends exist:
//!   `memory::portable` is written as plain byte loops, while
//!   `memory::host` defers to `core`'s built-in slice routines. The
//!   `speed` feature selects which one `memory::*` re-exports.
//!
//! - `ctype`
//!   Character classification for the "C" locale, backed by a constant
//!   256-entry table, along with ASCII case folding. Backend selection
//!   follows the same rule as `memory`.
//!
//! - `conv`
//!   Radix conversion between text and 64-bit integers for radices
//!   2 to 36, with overflow detection when parsing and an overflow-safe
//!   magnitude path when formatting.
//!
//! - `cmp`
//!   Generic `min` and `max` helpers.
//!
//! # Design goals
//!
//! - No heap allocations
//! - No panics on malformed input
//! - Errors returned as values, never as control flow
//! - Backend chosen at build time, never branched on at runtime

#![no_std]

pub mod cmp;
pub mod conv;
pub mod ctype;
pub mod memory;
