//! Portable memory backend
//!
//! Every routine here is a plain byte loop. Nothing relies on `core`'s
//! optimized slice helpers, which keeps the generated code predictable on
//! targets where those helpers lower to calls into a missing C library.

use core::ops::Range;

use crate::cmp::min;

/// Returns the index of the first occurrence of `byte` in `hay`.
pub fn mem_chr(hay: &[u8], byte: u8) -> Option<usize> {
    let mut i = 0;

    while i < hay.len() {
        if hay[i] == byte {
            return Some(i);
        }
        i += 1;
    }

    None
}

/// Compares the common prefix of `x` and `y`.
///
/// Returns the difference between the first pair of mismatching bytes,
/// both taken as unsigned values, or zero when the prefixes are equal.
pub fn mem_cmp(x: &[u8], y: &[u8]) -> i32 {
    let n = min(x.len(), y.len());

    for i in 0..n {
        if x[i] != y[i] {
            return x[i] as i32 - y[i] as i32;
        }
    }

    0
}

/// Copies as many bytes from `src` as fit into `dst`.
///
/// Returns the number of bytes copied.
pub fn mem_copy(dst: &mut [u8], src: &[u8]) -> usize {
    let n = min(dst.len(), src.len());

    for i in 0..n {
        dst[i] = src[i];
    }

    n
}

/// Moves the bytes in `src` to offset `dest` within the same buffer.
///
/// Overlapping ranges are handled by choosing the copy direction. Both the
/// source range and the destination are clamped to the buffer, so the
/// returned count may be smaller than the requested range.
pub fn mem_move(buf: &mut [u8], src: Range<usize>, dest: usize) -> usize {
    let len = buf.len();
    let start = src.start.min(len);
    let end = src.end.clamp(start, len);
    let dest = dest.min(len);
    let n = (end - start).min(len - dest);

    if dest < start {
        for i in 0..n {
            buf[dest + i] = buf[start + i];
        }
    } else {
        for i in (0..n).rev() {
            buf[dest + i] = buf[start + i];
        }
    }

    n
}

/// Returns the offset of the first occurrence of `needle` in `hay`.
///
/// An empty needle matches at offset zero.
pub fn mem_find(hay: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.len() > hay.len() {
        return None;
    }

    let last = hay.len() - needle.len();

    for i in 0..=last {
        if mem_cmp(&hay[i..i + needle.len()], needle) == 0 {
            return Some(i);
        }
    }

    None
}

/// Reverses `buf` in place and returns its length.
pub fn mem_rev(buf: &mut [u8]) -> usize {
    let n = buf.len();

    for i in 0..n / 2 {
        let x = buf[i];
        buf[i] = buf[n - i - 1];
        buf[n - i - 1] = x;
    }

    n
}

/// Fills `buf` with `byte` and returns the number of bytes written.
pub fn mem_set(buf: &mut [u8], byte: u8) -> usize {
    for b in buf.iter_mut() {
        *b = byte;
    }

    buf.len()
}

/// Returns the length of the NUL-terminated string in `s`.
pub fn str_len(s: &[u8]) -> usize {
    let mut n = 0;

    while n < s.len() && s[n] != 0 {
        n += 1;
    }

    n
}

/// Returns the index of the first `c` in the string `s`.
///
/// Searching for NUL yields the position of the terminator.
pub fn str_chr(s: &[u8], c: u8) -> Option<usize> {
    let n = str_len(s);

    if c == 0 {
        return Some(n);
    }

    mem_chr(&s[..n], c)
}

/// Compares two NUL-terminated strings, C `strcmp` style.
pub fn str_cmp(x: &[u8], y: &[u8]) -> i32 {
    let mut i = 0;

    loop {
        let a = if i < x.len() { x[i] } else { 0 };
        let b = if i < y.len() { y[i] } else { 0 };

        if a != b {
            return a as i32 - b as i32;
        }
        if a == 0 {
            return 0;
        }

        i += 1;
    }
}

/// Copies the string in `src` into `dst`, terminating it when room allows.
///
/// Returns the number of string bytes copied, excluding the terminator.
pub fn str_copy(dst: &mut [u8], src: &[u8]) -> usize {
    let n = mem_copy(dst, &src[..str_len(src)]);

    if n < dst.len() {
        dst[n] = 0;
    }

    n
}

/// Moves the string starting at offset `src` to offset `dest` within `buf`.
///
/// The terminator is not moved. Returns the number of bytes moved, which
/// [`mem_move`] may clamp to the buffer.
pub fn str_move(buf: &mut [u8], src: usize, dest: usize) -> usize {
    let n = if src < buf.len() { str_len(&buf[src..]) } else { 0 };
    mem_move(buf, src..src + n, dest)
}

/// Reverses the string portion of `s` in place.
pub fn str_rev(s: &mut [u8]) -> usize {
    let n = str_len(s);
    mem_rev(&mut s[..n])
}

/// Fills the string portion of `s` with `byte`.
pub fn str_set(s: &mut [u8], byte: u8) -> usize {
    let n = str_len(s);
    mem_set(&mut s[..n], byte)
}

/// Returns the offset of the first occurrence of string `needle` in
/// string `hay`.
pub fn str_find(hay: &[u8], needle: &[u8]) -> Option<usize> {
    mem_find(&hay[..str_len(hay)], &needle[..str_len(needle)])
}
