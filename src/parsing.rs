//! Routines for parsing strings into BigInts

use crate::{BigInt, ParseBigIntError, Sign};

use crate::limb::Limb;
use crate::arithmetic::multiplication::mul_add_limb;
use crate::stdlib::Vec;

/// Parse a prefix of `s` as an integer in the given radix.
///
/// Accepts optional leading whitespace and an optional `+`/`-` sign, then
/// consumes digits greedily until the first character that is not a digit
/// of the radix. At least one digit must be consumed; the unparsed tail is
/// ignored. Digits beyond 9 are letters, case-insensitive.
///
/// Panics when the radix is outside 2..=36 (programmer error); returns
/// `Err` only for inputs with no leading digit.
pub(crate) fn parse_radix_prefix(s: &str, radix: u32) -> Result<BigInt, ParseBigIntError> {
    assert!(
        (2..=36).contains(&radix),
        "radix must be within 2..=36, got {}", radix
    );

    let s = s.trim_start();
    if s.is_empty() {
        return Err(ParseBigIntError::Empty);
    }

    let (sign, digits) = match s.as_bytes()[0] {
        b'-' => (Sign::Minus, &s[1..]),
        b'+' => (Sign::Plus, &s[1..]),
        _ => (Sign::Plus, s),
    };

    let mut mag = Vec::new();
    let mut digit_count = 0usize;

    // Horner's method, one radix^k chunk at a time
    let (chunk_base, chunk_len) = crate::arithmetic::radix_chunk(radix);

    let mut chunk: Limb = 0;
    let mut chunk_digits = 0usize;
    for c in digits.chars() {
        let d = match c.to_digit(radix) {
            Some(d) => d,
            None => break,
        };
        digit_count += 1;

        chunk = chunk * radix as Limb + d as Limb;
        chunk_digits += 1;
        if chunk_digits == chunk_len {
            mul_add_limb(&mut mag, chunk_base, chunk);
            chunk = 0;
            chunk_digits = 0;
        }
    }

    if digit_count == 0 {
        return Err(ParseBigIntError::NoDigits);
    }

    if chunk_digits > 0 {
        // partial last chunk scales by radix^chunk_digits only
        let partial_base = (radix as Limb).pow(chunk_digits as u32);
        mul_add_limb(&mut mag, partial_base, chunk);
    }

    Ok(BigInt::from_limbs(sign, mag))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::stdlib::ToString;

    macro_rules! impl_case {
        ($name:ident: $input:literal, $radix:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let parsed = parse_radix_prefix($input, $radix).unwrap();
                let expected: BigInt = $expected.parse().unwrap();
                assert_eq!(parsed, expected);
            }
        };
    }

    impl_case!(case_simple: "42", 10 => "42");
    impl_case!(case_signed_negative: "-42", 10 => "-42");
    impl_case!(case_signed_positive: "+42", 10 => "42");
    impl_case!(case_leading_whitespace: "  \t\n 42", 10 => "42");
    impl_case!(case_leading_zeros: "000", 10 => "0");
    impl_case!(case_zero_negative_normalizes: "-0", 10 => "0");
    impl_case!(case_binary: "101010", 2 => "42");
    impl_case!(case_hex_lower: "deadbeef", 16 => "3735928559");
    impl_case!(case_hex_upper: "DEADBEEF", 16 => "3735928559");
    impl_case!(case_base36: "zz", 36 => "1295");
    impl_case!(case_long_decimal: "999999999999999999888888888888888888", 10
        => "999999999999999999888888888888888888");

    // prefix acceptance: parsing stops at the first invalid character
    impl_case!(case_trailing_garbage: "123abc", 10 => "123");
    impl_case!(case_digit_above_radix_stops: "1279", 8 => "127");
    impl_case!(case_stops_at_whitespace: "99 red balloons", 10 => "99");

    macro_rules! impl_err_case {
        ($name:ident: $input:literal, $radix:literal => $expected:ident) => {
            #[test]
            fn $name() {
                let result = parse_radix_prefix($input, $radix);
                assert_eq!(result.unwrap_err(), ParseBigIntError::$expected);
            }
        };
    }

    impl_err_case!(case_empty: "", 10 => Empty);
    impl_err_case!(case_only_whitespace: "   ", 10 => Empty);
    impl_err_case!(case_sign_only: "-", 10 => NoDigits);
    impl_err_case!(case_no_leading_digit: "abc", 10 => NoDigits);
    impl_err_case!(case_sign_then_garbage: "+!", 10 => NoDigits);

    #[test]
    #[should_panic(expected = "radix")]
    fn test_radix_too_small_panics() {
        let _ = parse_radix_prefix("0", 1);
    }

    #[test]
    #[should_panic(expected = "radix")]
    fn test_radix_too_large_panics() {
        let _ = parse_radix_prefix("0", 37);
    }

    #[test]
    fn test_roundtrips_through_display() {
        let cases = [
            "0",
            "-1",
            "12345678901234567890123456789012345678901234567890",
            "-340282366920938463463374607431768211457",
        ];
        for s in cases.iter() {
            let value: BigInt = s.parse().unwrap();
            assert_eq!(value.to_string(), *s);
        }
    }
}
