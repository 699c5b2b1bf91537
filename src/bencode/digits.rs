/// A byte other than a decimal digit appeared before the delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NotADigit {
    pub position: usize,
}

/// Parses the decimal digits at the front of `data` up to `delimiter`.
///
/// Returns the accumulated value and the index of the delimiter, or
/// `data.len()` if the delimiter never appears. The accumulator wraps on
/// overflow: more than 19 digits silently produce a value modulo 2^64.
/// Callers bounds-check anything derived from the result.
pub(crate) fn parse_digits(data: &[u8], delimiter: u8) -> Result<(u64, usize), NotADigit> {
    let mut value: u64 = 0;
    for (position, &byte) in data.iter().enumerate() {
        if byte == delimiter {
            return Ok((value, position));
        }
        if !byte.is_ascii_digit() {
            return Err(NotADigit { position });
        }
        value = value.wrapping_mul(10).wrapping_add(u64::from(byte - b'0'));
    }
    Ok((value, data.len()))
}

/// Reads an integer span (the bytes between `i` and `e`).
///
/// An optional leading `-` negates the result. Reading stops at the first
/// non-digit, so a span like `12x` reads as 12 and an empty span reads as 0.
pub(crate) fn integer_value(span: &[u8]) -> i64 {
    let (negative, digits) = match span.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, span),
    };
    let magnitude = match parse_digits(digits, b'e') {
        Ok((value, _)) => value,
        Err(NotADigit { position }) => parse_digits(&digits[..position], b'e')
            .map(|(value, _)| value)
            .unwrap_or(0),
    };
    // two's complement reinterpretation keeps i64::MIN representable
    let value = magnitude as i64;
    if negative {
        value.wrapping_neg()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_digits_to_delimiter() {
        assert_eq!(parse_digits(b"42:spam", b':'), Ok((42, 2)));
        assert_eq!(parse_digits(b":", b':'), Ok((0, 0)));
        assert_eq!(parse_digits(b"123", b':'), Ok((123, 3)));
    }

    #[test]
    fn test_parse_digits_rejects_non_digit() {
        assert_eq!(parse_digits(b"4x:", b':'), Err(NotADigit { position: 1 }));
        assert_eq!(parse_digits(b"-4:", b':'), Err(NotADigit { position: 0 }));
    }

    #[test]
    fn test_parse_digits_wraps_on_overflow() {
        // 2^64 wraps to zero, 2^64 + 7 to seven
        assert_eq!(parse_digits(b"18446744073709551616e", b'e'), Ok((0, 20)));
        assert_eq!(parse_digits(b"18446744073709551623e", b'e'), Ok((7, 20)));
        assert_eq!(
            parse_digits(b"18446744073709551615e", b'e'),
            Ok((u64::MAX, 20))
        );
    }

    #[test]
    fn test_integer_value() {
        assert_eq!(integer_value(b"4"), 4);
        assert_eq!(integer_value(b"-4"), -4);
        assert_eq!(integer_value(b""), 0);
        assert_eq!(integer_value(b"-"), 0);
        assert_eq!(integer_value(b"12x4"), 12);
        assert_eq!(integer_value(b"9223372036854775807"), i64::MAX);
        assert_eq!(integer_value(b"-9223372036854775808"), i64::MIN);
        assert_eq!(integer_value(b"9223372036854775808"), i64::MIN);
    }
}
