//! Lax quantity parsing
//!
//! Extracts the first "number + unit" pair found anywhere in free text, e.g.
//! "12 km", "km 12", "3,5 kg", "dài 100m". Units are matched against the unit
//! ids and the abbreviations shown in their labels. An exact-case match wins
//! ("mW" vs "MW"), otherwise matching is case-insensitive. When two groups
//! share an alias the group listed first in the registry wins.

use super::{groups, UnitDefinition, UnitGroupId};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedQuantity {
    pub amount: f64,
    pub group: UnitGroupId,
    pub unit: &'static UnitDefinition,
}

type AliasMap = HashMap<String, (UnitGroupId, &'static UnitDefinition)>;

fn build_aliases(normalize: fn(&str) -> String) -> AliasMap {
    let mut aliases = HashMap::new();
    for group in groups() {
        for unit in group.units {
            let keys = unit.abbreviation().into_iter().chain(std::iter::once(unit.id));
            for key in keys {
                aliases.entry(normalize(key)).or_insert((group.id, unit));
            }
        }
    }
    aliases
}

static EXACT_ALIASES: Lazy<AliasMap> = Lazy::new(|| build_aliases(str::to_string));
static FOLDED_ALIASES: Lazy<AliasMap> = Lazy::new(|| build_aliases(str::to_lowercase));

// Number followed by unit (e.g. "12km", "12 km")
static RE_AMOUNT_UNIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([+-]?\d+(?:[.,]\d+)?)\s*([^\s\d.,+-][^\s\d]*)")
        .expect("Failed to compile amount/unit pattern")
});

// Unit followed by number (e.g. "km 12")
static RE_UNIT_AMOUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([^\s\d.,+-][^\s\d]*)\s*([+-]?\d+(?:[.,]\d+)?)")
        .expect("Failed to compile unit/amount pattern")
});

fn lookup(unit: &str) -> Option<(UnitGroupId, &'static UnitDefinition)> {
    EXACT_ALIASES
        .get(unit)
        .or_else(|| FOLDED_ALIASES.get(&unit.to_lowercase()))
        .copied()
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.replace(',', ".").parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn parse_quantity(text: &str) -> Option<ParsedQuantity> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    for caps in RE_AMOUNT_UNIT.captures_iter(text) {
        if let (Some(amount), Some((group, unit))) = (parse_number(&caps[1]), lookup(&caps[2])) {
            debug!("[UnitParser] Extracted {} {} ({:?}) from '{}'", amount, unit.id, group, text);
            return Some(ParsedQuantity { amount, group, unit });
        }
    }

    for caps in RE_UNIT_AMOUNT.captures_iter(text) {
        if let (Some((group, unit)), Some(amount)) = (lookup(&caps[1]), parse_number(&caps[2])) {
            debug!("[UnitParser] Extracted {} {} ({:?}) from '{}'", amount, unit.id, group, text);
            return Some(ParsedQuantity { amount, group, unit });
        }
    }

    debug!("[UnitParser] No quantity found in '{}'", text);
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_then_unit() {
        let parsed = parse_quantity("12 km").unwrap();
        assert_eq!(parsed.amount, 12.0);
        assert_eq!(parsed.group, UnitGroupId::Length);
        assert_eq!(parsed.unit.id, "km");
    }

    #[test]
    fn test_attached_unit_and_comma_decimal() {
        let parsed = parse_quantity("3,5kg").unwrap();
        assert_eq!(parsed.amount, 3.5);
        assert_eq!(parsed.unit.id, "kg");
    }

    #[test]
    fn test_unit_then_number() {
        let parsed = parse_quantity("GB 4").unwrap();
        assert_eq!(parsed.amount, 4.0);
        assert_eq!(parsed.group, UnitGroupId::DataSize);
    }

    #[test]
    fn test_embedded_in_sentence() {
        let parsed = parse_quantity("quãng đường dài 100 m").unwrap();
        assert_eq!(parsed.amount, 100.0);
        assert_eq!(parsed.unit.id, "m");
    }

    #[test]
    fn test_abbreviation_alias() {
        let parsed = parse_quantity("20 psi").unwrap();
        assert_eq!(parsed.group, UnitGroupId::Pressure);
        let parsed = parse_quantity("5 USD").unwrap();
        assert_eq!(parsed.group, UnitGroupId::Currency);
    }

    #[test]
    fn test_exact_case_wins() {
        assert_eq!(parse_quantity("5 mW").unwrap().unit.id, "milliw");
        assert_eq!(parse_quantity("5 MW").unwrap().unit.id, "mw");
    }

    #[test]
    fn test_no_quantity() {
        assert!(parse_quantity("").is_none());
        assert!(parse_quantity("hello world").is_none());
        assert!(parse_quantity("42 widgets").is_none());
    }
}
