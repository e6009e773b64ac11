//! US phone number display formatting and dialability checking.

/// Format raw keystrokes as a US phone display string.
///
/// Strips every non-digit, keeps at most the first ten digits, and applies
/// the length-dependent template:
///
/// - 0 digits → `""`
/// - 1–3 digits → the digits unchanged
/// - 4–6 digits → `(DDD) DDD`
/// - 7–10 digits → `(DDD) DDD-DDDD`
///
/// Safe to call on every keystroke: the result is re-derived entirely from
/// the latest input, so `format_phone(format_phone(x)) == format_phone(x)`
/// for any `x`, and the function never fails.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(10)
        .collect();

    match digits.len() {
        0 => String::new(),
        1..=3 => digits,
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

/// Structural US (NANP) dialability check.
///
/// Accepts any formatting; an optional leading `1` country code is
/// tolerated. Requires exactly ten remaining digits with a valid area code
/// and exchange: each must start 2–9 and must not be an N11 service code.
/// This checks number structure, not carrier assignment: `(212) 555-0100`
/// passes, `(000) 000-0000` and `(212) 123-4567` do not.
///
/// Total over all inputs: garbage yields `false`, never a panic.
pub fn is_valid_us_phone(input: &str) -> bool {
    let digits: Vec<u8> = input
        .bytes()
        .filter(|b| b.is_ascii_digit())
        .map(|b| b - b'0')
        .collect();

    let national = match digits.len() {
        10 => &digits[..],
        11 if digits[0] == 1 => &digits[1..],
        _ => return false,
    };

    let area = &national[..3];
    let exchange = &national[3..6];
    is_valid_prefix(area) && is_valid_prefix(exchange)
}

/// Area codes and exchanges share the same rule: first digit 2–9, and the
/// N11 codes (211, 311, ..., 911) are reserved for services.
fn is_valid_prefix(prefix: &[u8]) -> bool {
    prefix[0] >= 2 && !(prefix[1] == 1 && prefix[2] == 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_by_length_template() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("5"), "5");
        assert_eq!(format_phone("555"), "555");
        assert_eq!(format_phone("5551"), "(555) 1");
        assert_eq!(format_phone("555123"), "(555) 123");
        assert_eq!(format_phone("5551234"), "(555) 123-4");
        assert_eq!(format_phone("5551234567"), "(555) 123-4567");
    }

    #[test]
    fn extra_digits_beyond_ten_are_ignored() {
        assert_eq!(format_phone("555123456789"), "(555) 123-4567");
    }

    #[test]
    fn non_digits_are_stripped() {
        assert_eq!(format_phone("(303) 555-1212"), "(303) 555-1212");
        assert_eq!(format_phone("303.555.1212 ext 9"), "(303) 555-1212");
        assert_eq!(format_phone("abc"), "");
    }

    #[test]
    fn formatting_is_idempotent() {
        for raw in ["", "5", "5551", "5551234", "5551234567", "1-800-FLOWERS"] {
            let once = format_phone(raw);
            assert_eq!(format_phone(&once), once, "input {raw:?}");
        }
    }

    #[test]
    fn validity_accepts_structurally_valid_numbers() {
        assert!(is_valid_us_phone("(212) 555-0100"));
        assert!(is_valid_us_phone("2125550100"));
        assert!(is_valid_us_phone("1 212 555 0100"));
    }

    #[test]
    fn validity_rejects_bad_structure() {
        assert!(!is_valid_us_phone("(000) 000-0000"));
        assert!(!is_valid_us_phone("(155) 123-4567")); // area starts with 1
        assert!(!is_valid_us_phone("(911) 555-0100")); // N11 area code
        assert!(!is_valid_us_phone("(212) 911-0100")); // N11 exchange
        assert!(!is_valid_us_phone("(212) 123-4567")); // exchange starts with 1
    }

    #[test]
    fn validity_rejects_wrong_lengths_and_garbage() {
        assert!(!is_valid_us_phone(""));
        assert!(!is_valid_us_phone("abc"));
        assert!(!is_valid_us_phone("555-0100"));
        assert!(!is_valid_us_phone("21255501000")); // 11 digits, no leading 1
        assert!(!is_valid_us_phone("121255501001")); // 12 digits
    }
}
