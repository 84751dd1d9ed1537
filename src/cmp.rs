//! Minimum and maximum helpers
//!
//! These work for any `PartialOrd` type, so a single pair covers every
//! integer width. On ties (or unordered values such as NaN) the second
//! argument is returned.

/// Returns the smaller of `x` and `y`.
#[inline]
pub fn min<T: PartialOrd>(x: T, y: T) -> T {
    if x < y { x } else { y }
}

/// Returns the larger of `x` and `y`.
#[inline]
pub fn max<T: PartialOrd>(x: T, y: T) -> T {
    if x > y { x } else { y }
}
