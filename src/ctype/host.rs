//! Classification backend built on `core`'s ASCII helpers.
//!
//! `u8::is_ascii_whitespace` leaves out vertical tab, which the "C"
//! locale counts as space, so `is_space` adds it back.

pub fn is_alnum(c: u8) -> bool {
    c.is_ascii_alphanumeric()
}

pub fn is_alpha(c: u8) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_lower(c: u8) -> bool {
    c.is_ascii_lowercase()
}

pub fn is_upper(c: u8) -> bool {
    c.is_ascii_uppercase()
}

pub fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

pub fn is_xdigit(c: u8) -> bool {
    c.is_ascii_hexdigit()
}

pub fn is_cntrl(c: u8) -> bool {
    c.is_ascii_control()
}

pub fn is_graph(c: u8) -> bool {
    c.is_ascii_graphic()
}

pub fn is_space(c: u8) -> bool {
    c.is_ascii_whitespace() || c == 0x0B
}

pub fn is_blank(c: u8) -> bool {
    c == b' ' || c == b'\t'
}

pub fn is_print(c: u8) -> bool {
    c.is_ascii_graphic() || c == b' '
}

pub fn is_punct(c: u8) -> bool {
    c.is_ascii_punctuation()
}

pub fn to_lower(c: u8) -> u8 {
    c.to_ascii_lowercase()
}

pub fn to_upper(c: u8) -> u8 {
    c.to_ascii_uppercase()
}
