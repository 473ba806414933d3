//! Calculator widget with AST-based math evaluation
//!
//! Uses meval crate for safe AST-based expression evaluation.

use super::{Widget, WidgetInput};
use crate::core::convert::format::{format_number, NumberFormat};
use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{FieldKind, FieldSpec, WidgetOutput};
use log::debug;
use meval::Expr;
use std::str::FromStr;

pub const RESULT_LABEL: &str = "Kết quả";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalculatorWidget;

impl Widget for CalculatorWidget {
    fn kind(&self) -> &'static str {
        "calculator"
    }

    fn fields(&self) -> Vec<FieldSpec> {
        vec![FieldSpec::new("expression", "Biểu thức", FieldKind::Text).with_default("(2 + 3) * 4")]
    }

    fn evaluate(&self, input: &WidgetInput, format: &NumberFormat) -> Option<WidgetOutput> {
        let expression = input.get("expression");
        if expression.trim().is_empty() {
            return None;
        }
        match evaluate_expression(expression) {
            Ok(value) => Some(WidgetOutput::default().line(RESULT_LABEL, format_number(value, format))),
            Err(e) => {
                debug!("[Calculator] {}", e);
                None
            }
        }
    }
}

/// Evaluate a mathematical expression using AST-based evaluation
pub fn evaluate_expression(expression: &str) -> AppResult<f64> {
    // Typographic operators as typed on phones
    let cleaned = expression
        .trim()
        .replace('×', "*")
        .replace('÷', "/")
        .replace('−', "-");

    let expr = Expr::from_str(&cleaned).map_err(|e| {
        AppError::Calculation(format!("Failed to parse expression '{}': {}", cleaned, e))
    })?;

    let result = expr.eval().map_err(|e| {
        AppError::Calculation(format!("Failed to evaluate expression '{}': {}", cleaned, e))
    })?;

    if result.is_nan() {
        return Err(AppError::Calculation("Result is NaN (Not a Number)".to_string()));
    }
    if result.is_infinite() {
        return Err(AppError::Calculation("Result is infinite".to_string()));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_addition() {
        assert_eq!(evaluate_expression("2 + 2").unwrap(), 4.0);
    }

    #[test]
    fn test_typographic_operators() {
        assert_eq!(evaluate_expression("6 × 7").unwrap(), 42.0);
        assert_eq!(evaluate_expression("10 ÷ 4").unwrap(), 2.5);
        assert_eq!(evaluate_expression("3 − 5").unwrap(), -2.0);
    }

    #[test]
    fn test_complex_expression() {
        assert_eq!(evaluate_expression("(2 + 3) * 4").unwrap(), 20.0);
    }

    #[test]
    fn test_invalid_expression() {
        assert!(evaluate_expression("2 +").is_err());
        assert!(matches!(evaluate_expression("1 / 0"), Err(AppError::Calculation(_))));
    }

    #[test]
    fn test_widget_formats_result() {
        let input = WidgetInput::new().set("expression", "1234.5 * 2");
        let output = CalculatorWidget.evaluate(&input, &NumberFormat::default()).unwrap();
        assert_eq!(output.value_of(RESULT_LABEL), Some("2.469"));
        assert!(CalculatorWidget
            .evaluate(&WidgetInput::new().set("expression", "2 +"), &NumberFormat::default())
            .is_none());
    }
}
