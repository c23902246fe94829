//! Numeric cell parsing for wide indicator tables.

use std::num::ParseFloatError;

/// Cell values treated as "no observation" rather than as text.
///
/// Mirrors the default NA vocabulary of common dataframe CSV readers so that
/// tables exported by those tools round-trip as missing values.
pub const NA_MARKERS: &[&str] = &[
    "", "NA", "N/A", "NaN", "nan", "-nan", "null", "NULL", "<NA>", "#N/A",
];

/// Returns true when the trimmed cell is empty or one of [`NA_MARKERS`].
pub fn is_missing_marker(value: &str) -> bool {
    let trimmed = value.trim();
    NA_MARKERS.contains(&trimmed)
}

/// Parses an amount cell such as `"1,234.5"`.
///
/// Thousands separators (commas) and surrounding whitespace are removed
/// before parsing. Missing markers yield `Ok(None)`; any other text that
/// does not parse as a float is an error.
///
/// # Examples
///
/// ```
/// use debt_common::parse_amount;
///
/// assert_eq!(parse_amount("1,234.5"), Ok(Some(1234.5)));
/// assert_eq!(parse_amount(""), Ok(None));
/// assert!(parse_amount("..").is_err());
/// ```
pub fn parse_amount(value: &str) -> Result<Option<f64>, ParseFloatError> {
    if is_missing_marker(value) {
        return Ok(None);
    }
    let cleaned: String = value.trim().chars().filter(|ch| *ch != ',').collect();
    cleaned.parse::<f64>().map(Some)
}

/// Parses a string as `f64`, returning `None` for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Formats a floating-point number as a string without trailing zeros.
///
/// # Examples
///
/// ```
/// use debt_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.5), "1.5");
/// assert_eq!(format_numeric(0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_strips_thousands_separators() {
        assert_eq!(parse_amount("1,234.5"), Ok(Some(1234.5)));
        assert_eq!(parse_amount("  12,000  "), Ok(Some(12000.0)));
        assert_eq!(parse_amount("1,234,567"), Ok(Some(1_234_567.0)));
    }

    #[test]
    fn test_parse_amount_plain_numbers() {
        assert_eq!(parse_amount("42"), Ok(Some(42.0)));
        assert_eq!(parse_amount("-3.5"), Ok(Some(-3.5)));
        assert_eq!(parse_amount("1e3"), Ok(Some(1000.0)));
    }

    #[test]
    fn test_parse_amount_missing_markers() {
        for marker in NA_MARKERS {
            assert_eq!(parse_amount(marker), Ok(None), "marker {marker:?}");
        }
        assert_eq!(parse_amount("   "), Ok(None));
    }

    #[test]
    fn test_parse_amount_rejects_text() {
        assert!(parse_amount("..").is_err());
        assert!(parse_amount("n/a value").is_err());
        assert!(parse_amount("12 USD").is_err());
    }

    #[test]
    fn test_parse_f64() {
        assert_eq!(parse_f64(""), None);
        assert_eq!(parse_f64("  "), None);
        assert_eq!(parse_f64("3.25"), Some(3.25));
        assert_eq!(parse_f64("  3.25  "), Some(3.25));
        assert_eq!(parse_f64("invalid"), None);
    }

    #[test]
    fn test_format_numeric() {
        assert_eq!(format_numeric(1.0), "1");
        assert_eq!(format_numeric(1.5), "1.5");
        assert_eq!(format_numeric(1.50), "1.5");
        assert_eq!(format_numeric(0.0), "0");
        assert_eq!(format_numeric(100.0), "100");
        assert_eq!(format_numeric(-2.25), "-2.25");
    }
}
