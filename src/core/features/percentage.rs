use super::{Widget, WidgetInput};
use crate::core::convert::format::{format_number, NumberFormat};
use crate::shared::types::{FieldKind, FieldSpec, WidgetOutput};

pub const RESULT_LABEL: &str = "Kết quả";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercentMode {
    /// x% of y
    PercentOf,
    /// x is what percent of y
    WhatPercent,
    /// change from x to y, in percent
    Change,
}

impl PercentMode {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "percent_of" => Some(PercentMode::PercentOf),
            "what_percent" => Some(PercentMode::WhatPercent),
            "change" => Some(PercentMode::Change),
            _ => None,
        }
    }
}

pub fn percent_of(percent: f64, total: f64) -> f64 {
    percent / 100.0 * total
}

pub fn what_percent(part: f64, total: f64) -> Option<f64> {
    (total != 0.0).then(|| part / total * 100.0)
}

pub fn percent_change(from: f64, to: f64) -> Option<f64> {
    (from != 0.0).then(|| (to - from) / from.abs() * 100.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PercentageWidget;

impl Widget for PercentageWidget {
    fn kind(&self) -> &'static str {
        "percentage"
    }

    fn fields(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("mode", "Phép tính", FieldKind::Select)
                .with_default("percent_of")
                .with_options([
                    ("percent_of", "X% của Y là bao nhiêu?"),
                    ("what_percent", "X là bao nhiêu % của Y?"),
                    ("change", "Tăng/giảm bao nhiêu % từ X đến Y?"),
                ]),
            FieldSpec::new("x", "X", FieldKind::Number),
            FieldSpec::new("y", "Y", FieldKind::Number),
        ]
    }

    fn evaluate(&self, input: &WidgetInput, format: &NumberFormat) -> Option<WidgetOutput> {
        let mode = PercentMode::parse(input.get_or("mode", "percent_of"))?;
        let x = input.number("x")?;
        let y = input.number("y")?;

        let value = match mode {
            PercentMode::PercentOf => format_number(percent_of(x, y), format),
            PercentMode::WhatPercent => format!("{}%", format_number(what_percent(x, y)?, format)),
            PercentMode::Change => {
                let change = percent_change(x, y)?;
                let sign = if change > 0.0 { "+" } else { "" };
                format!("{}{}%", sign, format_number(change, format))
            }
        };
        Some(WidgetOutput::default().line(RESULT_LABEL, value))
    }
}
