//! Host memory backend
//!
//! Thin wrappers over `core`'s slice routines. The semantics match
//! [`super::portable`] exactly; only the implementation strategy differs.

use core::ops::Range;

pub fn mem_chr(hay: &[u8], byte: u8) -> Option<usize> {
    hay.iter().position(|&b| b == byte)
}

pub fn mem_cmp(x: &[u8], y: &[u8]) -> i32 {
    x.iter()
        .zip(y.iter())
        .find(|(a, b)| a != b)
        .map_or(0, |(&a, &b)| a as i32 - b as i32)
}

pub fn mem_copy(dst: &mut [u8], src: &[u8]) -> usize {
    let n = dst.len().min(src.len());
    dst[..n].copy_from_slice(&src[..n]);
    n
}

pub fn mem_move(buf: &mut [u8], src: Range<usize>, dest: usize) -> usize {
    let len = buf.len();
    let start = src.start.min(len);
    let end = src.end.clamp(start, len);
    let dest = dest.min(len);
    let n = (end - start).min(len - dest);

    buf.copy_within(start..start + n, dest);
    n
}

pub fn mem_find(hay: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }

    hay.windows(needle.len()).position(|w| w == needle)
}

pub fn mem_rev(buf: &mut [u8]) -> usize {
    buf.reverse();
    buf.len()
}

pub fn mem_set(buf: &mut [u8], byte: u8) -> usize {
    buf.fill(byte);
    buf.len()
}

pub fn str_len(s: &[u8]) -> usize {
    mem_chr(s, 0).unwrap_or(s.len())
}

pub fn str_chr(s: &[u8], c: u8) -> Option<usize> {
    let n = str_len(s);

    if c == 0 {
        return Some(n);
    }

    mem_chr(&s[..n], c)
}

pub fn str_cmp(x: &[u8], y: &[u8]) -> i32 {
    let a = &x[..str_len(x)];
    let b = &y[..str_len(y)];

    match mem_cmp(a, b) {
        0 if a.len() == b.len() => 0,
        0 if a.len() < b.len() => -(b[a.len()] as i32),
        0 => a[b.len()] as i32,
        diff => diff,
    }
}

pub fn str_copy(dst: &mut [u8], src: &[u8]) -> usize {
    let n = mem_copy(dst, &src[..str_len(src)]);

    if let Some(t) = dst.get_mut(n) {
        *t = 0;
    }

    n
}

pub fn str_move(buf: &mut [u8], src: usize, dest: usize) -> usize {
    let n = buf.get(src..).map_or(0, str_len);
    mem_move(buf, src..src + n, dest)
}

pub fn str_rev(s: &mut [u8]) -> usize {
    let n = str_len(s);
    mem_rev(&mut s[..n])
}

pub fn str_set(s: &mut [u8], byte: u8) -> usize {
    let n = str_len(s);
    mem_set(&mut s[..n], byte)
}

pub fn str_find(hay: &[u8], needle: &[u8]) -> Option<usize> {
    mem_find(&hay[..str_len(hay)], &needle[..str_len(needle)])
}
