//! Comma-grouped mirroring of currency input.
//!
//! The offer-price field is free text so the display can carry thousands
//! separators while the user types. Formatting never blocks an
//! intermediate state: anything that does not read as a plain decimal
//! number is passed back unchanged so the user can keep editing.

/// Mirror raw input as a comma-grouped decimal string.
///
/// Commas are stripped before interpreting the input. An empty result
/// stays empty. A plain decimal number (optional minus sign, digits, at
/// most one decimal point) is regrouped: thousands separators in the
/// integer part, the typed fractional digits preserved verbatim, no
/// rounding, no currency symbol. Anything else is returned unchanged.
pub fn format_amount(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|&c| c != ',').collect();
    if stripped.is_empty() {
        return String::new();
    }

    match split_plain_decimal(&stripped) {
        Some(parts) => render_grouped(parts),
        None => raw.to_string(),
    }
}

/// Recover the numeric value of a grouped display string.
///
/// Strips commas and parses the remainder as `f64`. Returns `None` for
/// anything unparseable or non-finite; the submission path must refuse to
/// submit on `None`.
pub fn parse_amount(display: &str) -> Option<f64> {
    let stripped: String = display.chars().filter(|&c| c != ',').collect();
    let value: f64 = stripped.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

struct DecimalParts<'a> {
    negative: bool,
    integer: &'a str,
    /// Digits after the decimal point, exactly as typed. `Some("")` means
    /// the user has typed the point but no digits yet.
    fraction: Option<&'a str>,
}

/// Accept only plain decimal notation. Scientific notation, `inf`, `nan`
/// and stray characters all fall through to the pass-unchanged path even
/// though `f64::from_str` would take some of them.
fn split_plain_decimal(s: &str) -> Option<DecimalParts<'_>> {
    let (negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    let (integer, fraction) = match body.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (body, None),
    };

    if integer.is_empty() && fraction.map_or(true, str::is_empty) {
        return None;
    }
    if !integer.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if let Some(fraction) = fraction {
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }

    Some(DecimalParts {
        negative,
        integer,
        fraction,
    })
}

fn render_grouped(parts: DecimalParts<'_>) -> String {
    // Normalize the integer part the way a numeric parse would ("007" → 7)
    // but keep the fraction as typed.
    let integer = parts.integer.trim_start_matches('0');
    let integer = if integer.is_empty() { "0" } else { integer };

    let mut out = String::with_capacity(integer.len() + integer.len() / 3 + 8);
    if parts.negative {
        out.push('-');
    }
    let first_group = match integer.len() % 3 {
        0 => 3,
        n => n,
    };
    for (i, ch) in integer.char_indices() {
        if i != 0 && (i + 3 - first_group) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    if let Some(fraction) = parts.fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_amount("5"), "5");
        assert_eq!(format_amount("500"), "500");
        assert_eq!(format_amount("5000"), "5,000");
        assert_eq!(format_amount("1234567"), "1,234,567");
        assert_eq!(format_amount("500000"), "500,000");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(format_amount(""), "");
        assert_eq!(format_amount(","), "");
    }

    #[test]
    fn existing_commas_are_regrouped() {
        assert_eq!(format_amount("12,34"), "1,234");
        assert_eq!(format_amount("1,234,567"), "1,234,567");
        assert_eq!(format_amount("1,2345"), "12,345");
    }

    #[test]
    fn fraction_is_preserved_as_typed() {
        assert_eq!(format_amount("1234.50"), "1,234.50");
        assert_eq!(format_amount("1234.5"), "1,234.5");
        assert_eq!(format_amount("0.125"), "0.125");
        // Trailing point is an intermediate typing state, kept editable.
        assert_eq!(format_amount("1234."), "1,234.");
        assert_eq!(format_amount(".5"), "0.5");
    }

    #[test]
    fn leading_zeros_normalize_like_a_parse() {
        assert_eq!(format_amount("007"), "7");
        assert_eq!(format_amount("000"), "0");
    }

    #[test]
    fn unparseable_input_passes_through_unchanged() {
        assert_eq!(format_amount("12a"), "12a");
        assert_eq!(format_amount("1.2.3"), "1.2.3");
        assert_eq!(format_amount("."), ".");
        assert_eq!(format_amount("-"), "-");
        assert_eq!(format_amount("1e3"), "1e3");
        assert_eq!(format_amount("nan"), "nan");
    }

    #[test]
    fn formatting_is_idempotent() {
        for raw in ["1234567", "1,234.50", "12a", "", "0.5", "1234."] {
            let once = format_amount(raw);
            assert_eq!(format_amount(&once), once, "input {raw:?}");
        }
    }

    #[test]
    fn parse_amount_strips_commas() {
        assert_eq!(parse_amount("1,234.50"), Some(1234.5));
        assert_eq!(parse_amount("500,000"), Some(500_000.0));
        assert_eq!(parse_amount("42"), Some(42.0));
    }

    #[test]
    fn parse_amount_rejects_garbage() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("12a"), None);
        assert_eq!(parse_amount("."), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("inf"), None);
    }
}
