//! Widget system with enum dispatch
//!
//! Every catalog tool owns one [`ToolWidget`]. The variant is chosen when the
//! catalog is built, so rendering and evaluation never branch on string ids.
//! Uses enum_dispatch for static dispatch instead of `Box<dyn Widget>`.

use crate::core::convert::format::NumberFormat;
use crate::core::convert::parse_amount;
use crate::shared::types::{FieldSpec, WidgetOutput};
use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod calculator;
pub mod date_time;
pub mod encoding;
pub mod finance;
pub mod geometry;
pub mod health;
pub mod password;
pub mod percentage;
pub mod text_analyser;
pub mod text_case;
pub mod unit_converter;

/// Form values keyed by field name, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetInput(HashMap<String, String>);

impl WidgetInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: &str, value: impl Into<String>) -> Self {
        self.0.insert(name.to_string(), value.into());
        self
    }

    /// Raw value, empty when the field was never filled
    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or("")
    }

    /// Value, or `fallback` when the field is blank
    pub fn get_or<'a>(&'a self, name: &str, fallback: &'a str) -> &'a str {
        match self.get(name).trim() {
            "" => fallback,
            value => value,
        }
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        parse_amount(self.get(name))
    }

    /// Checkbox state; `default` applies when the field is absent
    pub fn flag(&self, name: &str, default: bool) -> bool {
        match self.0.get(name).map(|v| v.trim().to_lowercase()) {
            None => default,
            Some(v) => matches!(v.as_str(), "true" | "1" | "on" | "yes"),
        }
    }
}

impl From<HashMap<String, String>> for WidgetInput {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

/// Interactive payload of a tool
#[enum_dispatch]
pub trait Widget {
    /// Stable widget kind, used by the host to pick a renderer
    fn kind(&self) -> &'static str;

    /// Form inputs in display order
    fn fields(&self) -> Vec<FieldSpec>;

    /// Compute the result for the current form state.
    ///
    /// `None` means "nothing to show yet" (missing or unparseable input); the
    /// host renders a placeholder rather than an error.
    fn evaluate(&self, input: &WidgetInput, format: &NumberFormat) -> Option<WidgetOutput>;
}

#[enum_dispatch(Widget)]
#[derive(Debug, Clone)]
pub enum ToolWidget {
    UnitConverter(unit_converter::UnitConverterWidget),
    Temperature(unit_converter::TemperatureWidget),
    Percentage(percentage::PercentageWidget),
    Bmi(health::BmiWidget),
    Bmr(health::BmrWidget),
    Loan(finance::LoanWidget),
    Geometry(geometry::GeometryWidget),
    Password(password::PasswordWidget),
    TextCase(text_case::TextCaseWidget),
    TextAnalyser(text_analyser::TextAnalyserWidget),
    Hash(encoding::HashWidget),
    Encoder(encoding::EncoderWidget),
    Calculator(calculator::CalculatorWidget),
    Age(date_time::AgeWidget),
    Countdown(date_time::CountdownWidget),
}

/// Initial form state built from each field's default
pub fn default_input(widget: &ToolWidget) -> WidgetInput {
    widget
        .fields()
        .into_iter()
        .fold(WidgetInput::new(), |input, field| match field.default_value {
            Some(value) => input.set(&field.name, value),
            None => input,
        })
}
