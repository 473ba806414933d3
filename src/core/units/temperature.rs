//! Temperature conversion
//!
//! Affine scales cannot go through a ratio table. Everything converts to
//! Celsius first, then to the target scale.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum TemperatureScale {
    #[serde(rename = "C")]
    Celsius,
    #[serde(rename = "F")]
    Fahrenheit,
    #[serde(rename = "K")]
    Kelvin,
}

impl TemperatureScale {
    pub const ALL: [TemperatureScale; 3] = [
        TemperatureScale::Celsius,
        TemperatureScale::Fahrenheit,
        TemperatureScale::Kelvin,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "C",
            TemperatureScale::Fahrenheit => "F",
            TemperatureScale::Kelvin => "K",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "Độ C (°C)",
            TemperatureScale::Fahrenheit => "Độ F (°F)",
            TemperatureScale::Kelvin => "Kelvin (K)",
        }
    }

    /// Accepts "C", "°c", "celsius", "f", "kelvin", ...
    pub fn parse(value: &str) -> Option<Self> {
        let lower = value.trim().trim_start_matches('°').to_lowercase();
        match lower.as_str() {
            "c" | "celsius" => Some(TemperatureScale::Celsius),
            "f" | "fahrenheit" => Some(TemperatureScale::Fahrenheit),
            "k" | "kelvin" => Some(TemperatureScale::Kelvin),
            _ => None,
        }
    }
}

pub fn to_celsius(value: f64, from: TemperatureScale) -> f64 {
    match from {
        TemperatureScale::Celsius => value,
        TemperatureScale::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        TemperatureScale::Kelvin => value - 273.15,
    }
}

pub fn from_celsius(celsius: f64, to: TemperatureScale) -> f64 {
    match to {
        TemperatureScale::Celsius => celsius,
        TemperatureScale::Fahrenheit => (celsius * 9.0 / 5.0) + 32.0,
        TemperatureScale::Kelvin => celsius + 273.15,
    }
}

pub fn convert_temperature(value: f64, from: TemperatureScale, to: TemperatureScale) -> f64 {
    if from == to {
        return value;
    }
    from_celsius(to_celsius(value, from), to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_points() {
        assert_eq!(convert_temperature(100.0, TemperatureScale::Celsius, TemperatureScale::Fahrenheit), 212.0);
        assert_eq!(convert_temperature(32.0, TemperatureScale::Fahrenheit, TemperatureScale::Celsius), 0.0);
        assert_eq!(convert_temperature(0.0, TemperatureScale::Celsius, TemperatureScale::Kelvin), 273.15);
        assert!((convert_temperature(5.0, TemperatureScale::Celsius, TemperatureScale::Fahrenheit) - 41.0).abs() < 1e-12);
    }

    #[test]
    fn test_fahrenheit_round_trip() {
        for x in [-459.67, -40.0, 0.0, 32.0, 98.6, 451.0, 1e6] {
            let back = from_celsius(to_celsius(x, TemperatureScale::Fahrenheit), TemperatureScale::Fahrenheit);
            assert!((back - x).abs() <= 1e-9 * x.abs().max(1.0), "{} -> {}", x, back);
        }
    }

    #[test]
    fn test_minus_forty_is_shared() {
        assert_eq!(convert_temperature(-40.0, TemperatureScale::Celsius, TemperatureScale::Fahrenheit), -40.0);
    }

    #[test]
    fn test_parse_scale() {
        assert_eq!(TemperatureScale::parse("°C"), Some(TemperatureScale::Celsius));
        assert_eq!(TemperatureScale::parse("fahrenheit"), Some(TemperatureScale::Fahrenheit));
        assert_eq!(TemperatureScale::parse("K"), Some(TemperatureScale::Kelvin));
        assert_eq!(TemperatureScale::parse("R"), None);
    }
}
