use freestand::cmp::{max, min};

#[test]
fn picks_extremes_across_widths() {
    assert_eq!(min(3u8, 5u8), 3);
    assert_eq!(max(3u8, 5u8), 5);
    assert_eq!(min(-7i64, 2), -7);
    assert_eq!(max(usize::MAX, 0), usize::MAX);
    assert_eq!(min(b'a', b'A'), b'A');
}

#[test]
fn unordered_values_yield_second_argument() {
    assert_eq!(min(f64::NAN, 1.0), 1.0);
    assert_eq!(max(f64::NAN, 1.0), 1.0);
    assert!(min(1.0, f64::NAN).is_nan());
}
