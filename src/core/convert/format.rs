//! Result formatting for display
//!
//! Presentation only; never feeds back into a computation.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Values outside `[EXP_LOWER, EXP_UPPER]` (by magnitude, zero excluded) use exponential notation
pub const EXP_LOWER: f64 = 1e-6;
pub const EXP_UPPER: f64 = 1e9;

pub const DEFAULT_FRACTION_DIGITS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum DisplayLocale {
    /// 1.234.567,89
    #[default]
    Vi,
    /// 1,234,567.89
    En,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub group_separator: char,
    pub decimal_separator: char,
    pub max_fraction_digits: usize,
}

impl NumberFormat {
    pub fn for_locale(locale: DisplayLocale, max_fraction_digits: usize) -> Self {
        let (group_separator, decimal_separator) = match locale {
            DisplayLocale::Vi => ('.', ','),
            DisplayLocale::En => (',', '.'),
        };
        Self {
            group_separator,
            decimal_separator,
            max_fraction_digits,
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::for_locale(DisplayLocale::default(), DEFAULT_FRACTION_DIGITS)
    }
}

// Helper to add thousands separators to a string of digits
fn add_thousands_separators(digits: &str, separator: char) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(separator);
        }
        result.push(ch);
    }
    result
}

fn trim_fraction(fraction: &str) -> &str {
    fraction.trim_end_matches('0')
}

fn format_exponential(value: f64, format: &NumberFormat) -> String {
    let raw = format!("{:.*e}", format.max_fraction_digits, value);
    let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let mantissa = match mantissa.split_once('.') {
        Some((int, frac)) if !trim_fraction(frac).is_empty() => {
            format!("{}{}{}", int, format.decimal_separator, trim_fraction(frac))
        }
        Some((int, _)) => int.to_string(),
        None => mantissa.to_string(),
    };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}e{}{}", mantissa, sign, exponent.abs())
}

fn format_fixed(value: f64, format: &NumberFormat) -> String {
    let raw = format!("{:.*}", format.max_fraction_digits, value.abs());
    let (int, frac) = raw.split_once('.').unwrap_or((raw.as_str(), ""));
    let frac = trim_fraction(frac);

    let grouped = add_thousands_separators(int, format.group_separator);
    let is_zero = grouped.chars().all(|c| c == '0') && frac.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if frac.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}{}{}", sign, grouped, format.decimal_separator, frac)
    }
}

/// Format a computed value with locale grouping and bounded fraction digits
///
/// Examples (vi): 10000 -> "10.000", 12.5 -> "12,5", 1.5e10 -> "1,5e+10"
pub fn format_number(value: f64, format: &NumberFormat) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "∞".to_string() } else { "-∞".to_string() };
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude < EXP_LOWER || magnitude > EXP_UPPER {
        format_exponential(value, format)
    } else {
        format_fixed(value, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vi() -> NumberFormat {
        NumberFormat::default()
    }

    fn en() -> NumberFormat {
        NumberFormat::for_locale(DisplayLocale::En, 6)
    }

    #[test]
    fn test_grouping_and_trailing_zeros() {
        assert_eq!(format_number(10000.0, &vi()), "10.000");
        assert_eq!(format_number(130000.0, &en()), "130,000");
        assert_eq!(format_number(12.5, &vi()), "12,5");
        assert_eq!(format_number(-1234567.25, &en()), "-1,234,567.25");
        assert_eq!(format_number(999.0, &en()), "999");
    }

    #[test]
    fn test_fraction_digits_bound() {
        assert_eq!(format_number(1.0 / 3.0, &en()), "0.333333");
        let two = NumberFormat::for_locale(DisplayLocale::En, 2);
        assert_eq!(format_number(12.567, &two), "12.57");
    }

    #[test]
    fn test_exponential_thresholds() {
        assert_eq!(format_number(1.5e10, &vi()), "1,5e+10");
        assert_eq!(format_number(2.0e-7, &en()), "2e-7");
        assert_eq!(format_number(-3.25e12, &en()), "-3.25e+12");
        // bounds themselves stay fixed
        assert_eq!(format_number(1e9, &en()), "1,000,000,000");
        assert_eq!(format_number(1e-6, &en()), "0.000001");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(format_number(0.0, &vi()), "0");
        assert_eq!(format_number(-0.0, &vi()), "0");
        assert_eq!(format_number(f64::INFINITY, &vi()), "∞");
        assert_eq!(format_number(f64::NEG_INFINITY, &vi()), "-∞");
        assert_eq!(format_number(f64::NAN, &vi()), "NaN");
    }
}
