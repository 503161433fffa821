//! Lenient integer coercion for free-text numeric inputs.

/// Parse the leading integer of `text`, falling back to 0.
///
/// Leading whitespace and a single sign are accepted, then ASCII digits are
/// consumed until the first non-digit. Input without any leading digits
/// (including the empty string) yields 0. Values outside `i32` saturate.
pub fn coerce_int(text: &str) -> i32 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(byte - b'0'));
    }

    if !seen_digit {
        return 0;
    }

    let signed = if negative { -value } else { value };
    signed.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_non_numeric_become_zero() {
        assert_eq!(coerce_int(""), 0);
        assert_eq!(coerce_int("abc"), 0);
        assert_eq!(coerce_int("-"), 0);
        assert_eq!(coerce_int("   "), 0);
    }

    #[test]
    fn plain_integers() {
        assert_eq!(coerce_int("12"), 12);
        assert_eq!(coerce_int("-3"), -3);
        assert_eq!(coerce_int("+4"), 4);
        assert_eq!(coerce_int("  18"), 18);
    }

    #[test]
    fn trailing_garbage_is_ignored() {
        assert_eq!(coerce_int("7ft"), 7);
        assert_eq!(coerce_int("3.5"), 3);
    }

    #[test]
    fn overflow_saturates() {
        assert_eq!(coerce_int("99999999999"), i32::MAX);
        assert_eq!(coerce_int("-99999999999"), i32::MIN);
    }
}
