use freestand::conv::{ConvError, Status, atoi, atou, parse_i64, parse_u64};

#[test]
fn parses_plain_decimal() {
    let parsed = parse_i64("-42", 10).unwrap();

    assert_eq!(parsed.value, -42);
    assert_eq!(parsed.status, Status::Ok);
    assert_eq!(parsed.consumed, 3);
}

#[test]
fn stops_at_first_invalid_digit() {
    let parsed = parse_i64("12x9", 10).unwrap();

    assert_eq!(parsed.value, 12);
    assert_eq!(parsed.status, Status::Ok);
    assert_eq!(parsed.consumed, 2);

    let parsed = parse_u64("102", 2).unwrap();
    assert_eq!(parsed.value, 2);
    assert_eq!(parsed.consumed, 2);
}

#[test]
fn invalid_first_candidate_is_an_error() {
    assert_eq!(parse_i64("x12", 10), Err(ConvError::InvalidCharacter));
    assert_eq!(parse_u64("2", 2), Err(ConvError::InvalidCharacter));
    assert_eq!(parse_i64("  - g", 16), Err(ConvError::InvalidCharacter));
}

#[test]
fn empty_and_separator_only_input() {
    assert_eq!(parse_i64("", 10), Err(ConvError::Empty));
    assert_eq!(parse_u64("", 10), Err(ConvError::Empty));
    assert_eq!(parse_i64(" \t\n\x0B\x0C\r+_", 10), Err(ConvError::Empty));
    assert_eq!(parse_i64("--", 10), Err(ConvError::Empty));
}

#[test]
fn unsigned_treats_minus_as_a_candidate() {
    assert_eq!(parse_u64("-", 10), Err(ConvError::InvalidCharacter));
    assert_eq!(parse_u64("-5", 36), Err(ConvError::InvalidCharacter));

    let parsed = parse_u64("5-3", 10).unwrap();
    assert_eq!(parsed.value, 5);
    assert_eq!(parsed.consumed, 1);
}

#[test]
fn high_radix_is_case_insensitive() {
    assert_eq!(parse_i64("zz", 36).unwrap().value, 35 * 36 + 35);
    assert_eq!(parse_i64("ZZ", 36).unwrap().value, 1295);
    assert_eq!(parse_u64("fF", 16).unwrap().value, 255);
    assert_eq!(parse_u64("DeadBeef", 16).unwrap().value, 0xDEAD_BEEF);
}

#[test]
fn separators_are_skipped_anywhere() {
    assert_eq!(parse_u64("1_000_000", 10).unwrap().value, 1_000_000);
    assert_eq!(parse_i64("1 2\t3", 10).unwrap().value, 123);

    let parsed = parse_i64(" +42 ", 10).unwrap();
    assert_eq!(parsed.value, 42);
    assert_eq!(parsed.consumed, 5);
}

#[test]
fn minus_sign_may_appear_anywhere() {
    assert_eq!(parse_i64("4-2", 10).unwrap().value, -42);
    assert_eq!(parse_i64("42-", 10).unwrap().value, -42);
    assert_eq!(parse_i64("--42", 10).unwrap().value, -42);
}

#[test]
fn scan_ends_at_nul() {
    let parsed = parse_i64(b"12\09", 10).unwrap();

    assert_eq!(parsed.value, 12);
    assert_eq!(parsed.consumed, 2);

    assert_eq!(parse_i64(b"\x0012", 10), Err(ConvError::Empty));
}

#[test]
fn bad_radix_is_rejected() {
    for radix in [0, 1, 37, 100, u32::MAX] {
        assert_eq!(parse_i64("1", radix), Err(ConvError::BadRadix));
        assert_eq!(parse_u64("1", radix), Err(ConvError::BadRadix));
    }

    assert_eq!(parse_i64("", 1), Err(ConvError::BadRadix));
}

#[test]
fn signed_limits() {
    let max = parse_i64("9223372036854775807", 10).unwrap();
    assert_eq!(max.value, i64::MAX);
    assert_eq!(max.status, Status::Ok);

    let min = parse_i64("-9223372036854775808", 10).unwrap();
    assert_eq!(min.value, i64::MIN);
    assert_eq!(min.status, Status::Ok);

    let over = parse_i64("9223372036854775808", 10).unwrap();
    assert_eq!(over.value, i64::MIN);
    assert_eq!(over.status, Status::Overflow);

    let under = parse_i64("-9223372036854775809", 10).unwrap();
    assert_eq!(under.value, i64::MAX);
    assert_eq!(under.status, Status::Overflow);
}

#[test]
fn overflow_is_a_warning_with_wrapped_value() {
    let parsed = parse_i64("99999999999999999999", 10).unwrap();

    assert_eq!(parsed.status, Status::Overflow);
    assert_eq!(parsed.value, 7_766_279_631_452_241_919);
    assert_eq!(parsed.consumed, 20);

    let parsed = parse_u64("99999999999999999999", 10).unwrap();
    assert_eq!(parsed.status, Status::Overflow);
    assert_eq!(parsed.value, 7_766_279_631_452_241_919);
}

#[test]
fn unsigned_limits() {
    let max = parse_u64("18446744073709551615", 10).unwrap();
    assert_eq!(max.value, u64::MAX);
    assert_eq!(max.status, Status::Ok);

    let over = parse_u64("18446744073709551616", 10).unwrap();
    assert_eq!(over.value, 0);
    assert!(over.status.is_overflow());
}

#[test]
fn overflow_in_non_decimal_radix_stays_flagged() {
    let parsed = parse_u64("1_0000_0000_0000_0000", 16).unwrap();
    assert_eq!(parsed.value, 0);
    assert_eq!(parsed.status, Status::Overflow);

    let parsed = parse_u64("1_0000_0000_0000_0000_1", 16).unwrap();
    assert_eq!(parsed.value, 1);
    assert_eq!(parsed.status, Status::Overflow);

    let fits = parse_u64("ffff_ffff_ffff_ffff", 16).unwrap();
    assert_eq!(fits.value, u64::MAX);
    assert_eq!(fits.status, Status::Ok);
}

#[test]
fn convenience_parsers_collapse_errors_to_zero() {
    assert_eq!(atoi("-17"), -17);
    assert_eq!(atoi("12x9"), 12);
    assert_eq!(atoi(""), 0);
    assert_eq!(atoi("x1"), 0);

    assert_eq!(atou("4294967295"), u32::MAX);
    assert_eq!(atou("-1"), 0);
}

#[test]
fn status_codes() {
    assert_eq!(Status::Ok.code(), 0);
    assert_eq!(Status::Overflow.code(), 1);
    assert_eq!(ConvError::Empty.code(), -1);
    assert_eq!(ConvError::InvalidCharacter.code(), -2);
    assert_eq!(ConvError::BadRadix.code(), -4);
    assert_eq!(ConvError::BufferTooSmall.code(), -8);
}
