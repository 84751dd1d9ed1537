//! Table-driven classification backend.

use super::table::{CharClass, class_of};

#[inline]
fn has(c: u8, class: CharClass) -> bool {
    class_of(c).intersects(class)
}

pub fn is_alnum(c: u8) -> bool {
    has(c, CharClass::ALNUM)
}

pub fn is_alpha(c: u8) -> bool {
    has(c, CharClass::ALPHA)
}

pub fn is_lower(c: u8) -> bool {
    has(c, CharClass::LOWER)
}

pub fn is_upper(c: u8) -> bool {
    has(c, CharClass::UPPER)
}

pub fn is_digit(c: u8) -> bool {
    has(c, CharClass::DIGIT)
}

pub fn is_xdigit(c: u8) -> bool {
    has(c, CharClass::XDIGIT)
}

pub fn is_cntrl(c: u8) -> bool {
    has(c, CharClass::CNTRL)
}

pub fn is_graph(c: u8) -> bool {
    has(c, CharClass::GRAPH)
}

pub fn is_space(c: u8) -> bool {
    has(c, CharClass::SPACE)
}

pub fn is_blank(c: u8) -> bool {
    has(c, CharClass::BLANK)
}

pub fn is_print(c: u8) -> bool {
    has(c, CharClass::PRINT)
}

pub fn is_punct(c: u8) -> bool {
    has(c, CharClass::PUNCT)
}

/// Maps an uppercase ASCII letter to lowercase; other bytes pass through.
pub fn to_lower(c: u8) -> u8 {
    if is_upper(c) { c + (b'a' - b'A') } else { c }
}

/// Maps a lowercase ASCII letter to uppercase; other bytes pass through.
pub fn to_upper(c: u8) -> u8 {
    if is_lower(c) { c - (b'a' - b'A') } else { c }
}
