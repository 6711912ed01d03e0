//! Numeric normalization for locale-formatted spreadsheet cells
//!
//! Cells carry thousands separators, stray whitespace, trailing unit or
//! footnote markers and, in currency columns, a leading `$`. After commas and
//! whitespace are removed, the longest leading decimal literal is the value;
//! a cell with no such prefix, or one that overflows, is "absent" (`None`).
//! Absent is distinct from zero: aggregators skip absent values rather than
//! counting them as 0.

use regex::Regex;
use std::sync::LazyLock;

static LEADING_DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("Invalid regex")
});

/// Parse a numeric cell, stripping commas and whitespace
///
/// Trailing text after the number is ignored, so `"12%"` is 12.
pub fn parse_number(text: &str) -> Option<f64> {
    parse_leading(&strip_separators(text))
}

/// Parse a currency cell: like [`parse_number`], plus a leading `$` is removed
pub fn parse_currency(text: &str) -> Option<f64> {
    let cleaned = strip_separators(text);
    parse_leading(cleaned.strip_prefix('$').unwrap_or(&cleaned))
}

fn strip_separators(text: &str) -> String {
    text.chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect()
}

fn parse_leading(cleaned: &str) -> Option<f64> {
    let literal = LEADING_DECIMAL.find(cleaned)?;
    literal
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Round to `decimals` places, halves away from zero
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// `numerator / denominator * 100` rounded to 2 decimals
///
/// Defined as 0 when the denominator is 0 or absent.
pub fn share_percent(numerator: f64, denominator: Option<f64>) -> f64 {
    match denominator {
        Some(denominator) if denominator != 0.0 => round_to(numerator / denominator * 100.0, 2),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_strips_separators() {
        assert_eq!(parse_number("1,234,567"), Some(1_234_567.0));
        assert_eq!(parse_number(" 12.5 "), Some(12.5));
        assert_eq!(parse_number("-3"), Some(-3.0));
        assert_eq!(parse_number("0"), Some(0.0));
    }

    #[test]
    fn test_parse_number_absent_is_not_zero() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("N/A"), None);
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number("abc12"), None);
    }

    #[test]
    fn test_parse_number_ignores_trailing_markers() {
        assert_eq!(parse_number("12%"), Some(12.0));
        assert_eq!(parse_number("3.5*"), Some(3.5));
        assert_eq!(parse_number("1,234 噸"), Some(1234.0));
        assert_eq!(parse_number("12abc"), Some(12.0));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("2e3t"), Some(2000.0));
        assert_eq!(parse_number("7e"), Some(7.0));
    }

    #[test]
    fn test_parse_number_rejects_non_finite() {
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("1e400"), None);
    }

    #[test]
    fn test_parse_currency() {
        assert_eq!(parse_currency("$1,500"), Some(1500.0));
        assert_eq!(parse_currency(" $ 20 "), Some(20.0));
        assert_eq!(parse_currency("$"), None);
        assert_eq!(parse_currency("$99萬"), Some(99.0));
        assert_eq!(parse_number("$1,500"), None);
    }

    #[test]
    fn test_share_percent() {
        assert_eq!(share_percent(1.0, Some(3.0)), 33.33);
        assert_eq!(share_percent(0.0, Some(0.0)), 0.0);
        assert_eq!(share_percent(2.0, Some(4.0)), 50.0);
        assert_eq!(share_percent(5.0, None), 0.0);
        assert_eq!(share_percent(2.0, Some(3.0)), 66.67);
    }

    #[test]
    fn test_round_to_halves_away_from_zero() {
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(-0.125, 2), -0.13);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
    }
}
