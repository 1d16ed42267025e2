use std::fmt::Display;

use chrono::NaiveDate;

/// Placeholder for unparseable currency input
const NOT_A_NUMBER: &str = "$NaN";

/// Placeholder for unparseable date input
const INVALID_DATE: &str = "Invalid Date";

/// Format an amount as `$X.XX` with exactly two decimal digits.
///
/// Accepts numbers and numeric strings. No thousands separators, no locale
/// awareness. Non-numeric input degrades to `"$NaN"` rather than erroring.
pub fn format_currency<T: Display>(amount: T) -> String {
    match amount.to_string().trim().parse::<f64>() {
        Ok(value) if value.is_finite() => format!("${:.2}", value),
        _ => NOT_A_NUMBER.to_string(),
    }
}

/// Format a date string as an en-US long-form date, e.g. "January 5, 2025".
///
/// Accepts `YYYY-MM-DD` or RFC 3339 input. Unparseable input degrades to
/// `"Invalid Date"` rather than erroring.
pub fn format_date(date: &str) -> String {
    let parsed = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .or_else(|_| chrono::DateTime::parse_from_rfc3339(date.trim()).map(|dt| dt.date_naive()));

    match parsed {
        Ok(d) => d.format("%B %-d, %Y").to_string(),
        Err(_) => INVALID_DATE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(3), "$3.00");
        assert_eq!(format_currency("4.5"), "$4.50");
        assert_eq!(format_currency(0), "$0.00");
        assert_eq!(format_currency(1234.567), "$1234.57");
        assert_eq!(format_currency("  12 "), "$12.00");
    }

    #[test]
    fn test_format_currency_non_numeric() {
        assert_eq!(format_currency("abc"), "$NaN");
        assert_eq!(format_currency(""), "$NaN");
        assert_eq!(format_currency(f64::NAN), "$NaN");
        assert_eq!(format_currency(f64::INFINITY), "$NaN");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-01-05"), "January 5, 2025");
        assert_eq!(format_date("2024-12-25"), "December 25, 2024");
        assert_eq!(format_date("2025-01-05T19:30:00+00:00"), "January 5, 2025");
    }

    #[test]
    fn test_format_date_invalid() {
        assert_eq!(format_date("not a date"), "Invalid Date");
        assert_eq!(format_date(""), "Invalid Date");
        assert_eq!(format_date("2025-13-40"), "Invalid Date");
    }
}
