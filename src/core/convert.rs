//! Conversion engine
//!
//! Converts through the implicit base unit of a group:
//! `base = amount * from.ratio; result = base / to.ratio`.
//! N units need N stored constants instead of an N x N table.

use crate::core::units::UnitDefinition;

pub mod format;

/// Convert `amount` between two units of the same group.
///
/// The caller guarantees both units come from one group; nothing here checks it.
pub fn convert(amount: f64, from: &UnitDefinition, to: &UnitDefinition) -> f64 {
    // Same unit, no conversion needed (and no rounding drift)
    if from == to {
        return amount;
    }
    let base = amount * from.ratio;
    base / to.ratio
}

/// Parse form input into a finite number.
///
/// Empty, non-numeric or non-finite input gives `None`, which callers render
/// as a placeholder. A lone comma is read as the decimal separator ("3,5").
pub fn parse_amount(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = if trimmed.contains(',') && !trimmed.contains('.') {
        trimmed.replacen(',', ".", 1)
    } else {
        trimmed.to_string()
    };
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn convert_input(input: &str, from: &UnitDefinition, to: &UnitDefinition) -> Option<f64> {
    parse_amount(input).map(|amount| convert(amount, from, to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::units::{group, groups, UnitGroupId};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(f64::MIN_POSITIVE)
    }

    #[test]
    fn test_meter_to_centimeter() {
        let length = group(UnitGroupId::Length);
        let m = length.unit("m").unwrap();
        let cm = length.unit("cm").unwrap();
        assert_eq!(convert_input("100", m, cm), Some(10000.0));
    }

    #[test]
    fn test_empty_input_is_no_result() {
        let length = group(UnitGroupId::Length);
        let (m, cm) = (length.default_from(), length.default_to());
        assert_eq!(convert_input("", m, cm), None);
        assert_eq!(convert_input("   ", m, cm), None);
        assert_eq!(convert_input("abc", m, cm), None);
        assert_eq!(convert_input("NaN", m, cm), None);
        assert_eq!(convert_input("inf", m, cm), None);
    }

    #[test]
    fn test_unit_ratio_property() {
        for g in groups() {
            for u in g.units {
                for v in g.units {
                    let one = convert(1.0, u, v);
                    if u == v {
                        assert_eq!(one, 1.0);
                    } else {
                        assert_eq!(one, u.ratio / v.ratio, "{} -> {}", u.id, v.id);
                    }
                }
            }
        }
    }

    #[test]
    fn test_round_trip_all_pairs() {
        for g in groups() {
            for u in g.units {
                for v in g.units {
                    for x in [0.0, 1.0, -2.5, 123.456, 1e-3, 9.87e5] {
                        let back = convert(convert(x, u, v), v, u);
                        assert!(approx(back, x) || (x == 0.0 && back == 0.0), "{} {} -> {} -> {}", x, u.id, v.id, back);
                    }
                }
            }
        }
    }

    #[test]
    fn test_identity_is_exact() {
        for g in groups() {
            for u in g.units {
                for x in [0.1, 1.0 / 3.0, -7.25, 1e300] {
                    assert_eq!(convert(x, u, u), x);
                }
            }
        }
    }

    #[test]
    fn test_parse_amount_variants() {
        assert_eq!(parse_amount("3,5"), Some(3.5));
        assert_eq!(parse_amount(" 42 "), Some(42.0));
        assert_eq!(parse_amount("-1e3"), Some(-1000.0));
        assert_eq!(parse_amount("1,2,3"), None);
    }

    #[test]
    fn test_currency_is_static_estimate() {
        let currency = group(UnitGroupId::Currency);
        let usd = currency.unit("usd").unwrap();
        let vnd = currency.unit("vnd").unwrap();
        assert_eq!(convert(2.0, usd, vnd), 50_800.0);
    }
}
