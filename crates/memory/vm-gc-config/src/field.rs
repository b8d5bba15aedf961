//! Field value parsers
//!
//! Each parser consumes the longest valid prefix of its input and returns the
//! value together with the unconsumed remainder. Trailing text is left for the
//! caller to reject. Calling a parser with an empty slice is a bug in the
//! caller.

use crate::error::FieldError;

/// Parse a run of decimal digits.
///
/// Overflow wraps instead of failing.
///
/// # Errors
///
/// [`FieldError::InvalidNumber`] when `s` does not start with a digit.
pub fn parse_size(s: &str) -> Result<(usize, &str), FieldError> {
    debug_assert!(!s.is_empty(), "field parser called with empty input");

    let digits = count_digits(s.as_bytes());
    if digits == 0 {
        return Err(FieldError::InvalidNumber);
    }

    let value = s.as_bytes()[..digits]
        .iter()
        .fold(0usize, |v, &b| v.wrapping_mul(10).wrapping_add(usize::from(b - b'0')));
    Ok((value, &s[digits..]))
}

/// Parse a small integer such as the profiling level.
///
/// Same syntax as [`parse_size`]; the result is truncated to `u8`.
///
/// # Errors
///
/// [`FieldError::InvalidNumber`] when `s` does not start with a digit.
pub fn parse_level(s: &str) -> Result<(u8, &str), FieldError> {
    let (value, rest) = parse_size(s)?;
    Ok((value as u8, rest))
}

/// Parse a boolean from the first character only.
///
/// `1 y Y` are true, `0 n N` are false.
///
/// # Errors
///
/// [`FieldError::InvalidBoolean`] for any other first character.
pub fn parse_bool(s: &str) -> Result<(bool, &str), FieldError> {
    debug_assert!(!s.is_empty(), "field parser called with empty input");

    let value = match s.as_bytes().first() {
        Some(b'1' | b'y' | b'Y') => true,
        Some(b'0' | b'n' | b'N') => false,
        _ => return Err(FieldError::InvalidBoolean),
    };
    Ok((value, &s[1..]))
}

/// Parse a decimal or exponential float prefix.
///
/// Accepts `[+-]` followed by `digits[.digits]`, `.digits` or `digits.`, with an
/// optional `e[+-]digits` exponent, or one of `inf`, `infinity`, `nan` in any
/// case. Conversion does not depend on the process locale.
///
/// # Errors
///
/// [`FieldError::InvalidFloat`] when no such prefix exists.
pub fn parse_float(s: &str) -> Result<(f64, &str), FieldError> {
    debug_assert!(!s.is_empty(), "field parser called with empty input");

    let len = float_prefix_len(s.as_bytes());
    if len == 0 {
        return Err(FieldError::InvalidFloat);
    }

    let (token, rest) = s.split_at(len);
    let value = token.parse::<f64>().map_err(|_| FieldError::InvalidFloat)?;
    Ok((value, rest))
}

fn count_digits(b: &[u8]) -> usize {
    b.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn float_prefix_len(b: &[u8]) -> usize {
    let mut i = usize::from(matches!(b.first(), Some(b'+' | b'-')));

    // inf/nan
    for word in ["infinity", "inf", "nan"] {
        let end = i + word.len();
        if b.len() >= end && b[i..end].eq_ignore_ascii_case(word.as_bytes()) {
            return end;
        }
    }

    let int_digits = count_digits(&b[i..]);
    i += int_digits;

    let mut frac_digits = 0;
    if b.get(i) == Some(&b'.') {
        frac_digits = count_digits(&b[i + 1..]);
        if int_digits + frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return 0;
    }

    // exponent is only consumed when it has digits
    if matches!(b.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(b.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = count_digits(&b[j..]);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }

    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("16"), Ok((16, "")));
        assert_eq!(parse_size("20.5"), Ok((20, ".5")));
        assert_eq!(parse_size("007 rest"), Ok((7, " rest")));
        assert_eq!(parse_size("foo"), Err(FieldError::InvalidNumber));
        assert_eq!(parse_size("y"), Err(FieldError::InvalidNumber));
        assert_eq!(parse_size("-1"), Err(FieldError::InvalidNumber));
    }

    #[test]
    fn test_parse_size_wraps() {
        let text = "18446744073709551616"; // 2^64
        let (value, rest) = parse_size(text).unwrap();
        assert!(rest.is_empty());
        if usize::BITS == 64 {
            assert_eq!(value, 0);
        }
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("2"), Ok((2, "")));
        assert_eq!(parse_level("257"), Ok((1, "")));
        assert_eq!(parse_level("x"), Err(FieldError::InvalidNumber));
    }

    #[test]
    fn test_parse_bool() {
        for t in ["1", "y", "Y"] {
            assert_eq!(parse_bool(t), Ok((true, "")));
        }
        for f in ["0", "n", "N"] {
            assert_eq!(parse_bool(f), Ok((false, "")));
        }
        assert_eq!(parse_bool("yes"), Ok((true, "es")));
        assert_eq!(parse_bool("5"), Err(FieldError::InvalidBoolean));
        assert_eq!(parse_bool("true"), Err(FieldError::InvalidBoolean));
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float("2"), Ok((2.0, "")));
        assert_eq!(parse_float("3.1"), Ok((3.1, "")));
        assert_eq!(parse_float("3.0.2.5"), Ok((3.0, ".2.5")));
        assert_eq!(parse_float(".5x"), Ok((0.5, "x")));
        assert_eq!(parse_float("4."), Ok((4.0, "")));
        assert_eq!(parse_float("-1.5e2 next"), Ok((-150.0, " next")));
        assert_eq!(parse_float("1e+3"), Ok((1000.0, "")));
    }

    #[test]
    fn test_parse_float_exponent_without_digits() {
        assert_eq!(parse_float("2e"), Ok((2.0, "e")));
        assert_eq!(parse_float("2e+"), Ok((2.0, "e+")));
    }

    #[test]
    fn test_parse_float_special() {
        let (v, rest) = parse_float("INF").unwrap();
        assert!(v.is_infinite() && rest.is_empty());
        let (v, rest) = parse_float("-infinity ").unwrap();
        assert!(v.is_infinite() && v < 0.0);
        assert_eq!(rest, " ");
        let (v, _) = parse_float("nan").unwrap();
        assert!(v.is_nan());
    }

    #[test]
    fn test_parse_float_invalid() {
        assert_eq!(parse_float("x"), Err(FieldError::InvalidFloat));
        assert_eq!(parse_float("."), Err(FieldError::InvalidFloat));
        assert_eq!(parse_float("-"), Err(FieldError::InvalidFloat));
        assert_eq!(parse_float("e5"), Err(FieldError::InvalidFloat));
    }
}
