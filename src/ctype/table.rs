//! Constant classification table for the "C" locale.

bitflags::bitflags! {
    /// Set of character classes a byte belongs to.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct CharClass: u16 {
        const ALNUM  = 0x0001;
        const ALPHA  = 0x0002;
        const LOWER  = 0x0004;
        const UPPER  = 0x0008;
        const DIGIT  = 0x0010;
        const XDIGIT = 0x0020;
        const CNTRL  = 0x0040;
        const GRAPH  = 0x0080;
        const SPACE  = 0x0100;
        const BLANK  = 0x0200;
        const PRINT  = 0x0400;
        const PUNCT  = 0x0800;
    }
}

const fn classify(c: u8) -> CharClass {
    const ALNUM: u16 = CharClass::ALNUM.bits();
    const ALPHA: u16 = CharClass::ALPHA.bits();
    const LOWER: u16 = CharClass::LOWER.bits();
    const UPPER: u16 = CharClass::UPPER.bits();
    const DIGIT: u16 = CharClass::DIGIT.bits();
    const XDIGIT: u16 = CharClass::XDIGIT.bits();
    const CNTRL: u16 = CharClass::CNTRL.bits();
    const GRAPH: u16 = CharClass::GRAPH.bits();
    const SPACE: u16 = CharClass::SPACE.bits();
    const BLANK: u16 = CharClass::BLANK.bits();
    const PRINT: u16 = CharClass::PRINT.bits();
    const PUNCT: u16 = CharClass::PUNCT.bits();

    let bits = match c {
        b'\t' => CNTRL | SPACE | BLANK,
        0x0A..=0x0D => CNTRL | SPACE,
        0x00..=0x1F | 0x7F => CNTRL,
        b' ' => PRINT | SPACE | BLANK,
        b'0'..=b'9' => PRINT | GRAPH | ALNUM | DIGIT | XDIGIT,
        b'A'..=b'F' => PRINT | GRAPH | ALNUM | ALPHA | UPPER | XDIGIT,
        b'G'..=b'Z' => PRINT | GRAPH | ALNUM | ALPHA | UPPER,
        b'a'..=b'f' => PRINT | GRAPH | ALNUM | ALPHA | LOWER | XDIGIT,
        b'g'..=b'z' => PRINT | GRAPH | ALNUM | ALPHA | LOWER,
        0x21..=0x7E => PRINT | GRAPH | PUNCT,
        _ => 0,
    };

    CharClass::from_bits_retain(bits)
}

const fn build() -> [CharClass; 256] {
    let mut table = [CharClass::empty(); 256];
    let mut i = 0;

    while i < 256 {
        table[i] = classify(i as u8);
        i += 1;
    }

    table
}

/// Class membership of every byte value.
pub static CTYPE: [CharClass; 256] = build();

/// Returns the classes `c` belongs to.
#[inline]
pub fn class_of(c: u8) -> CharClass {
    CTYPE[c as usize]
}
