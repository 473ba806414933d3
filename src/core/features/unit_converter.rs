//! Unit converter widgets
//!
//! One generic widget serves every ratio group; temperature gets its own
//! widget because its scales are affine.

use super::{Widget, WidgetInput};
use crate::core::convert::convert;
use crate::core::convert::format::{format_number, NumberFormat};
use crate::core::units::pace::{format_pace, speed_kmh_from_pace};
use crate::core::units::temperature::{convert_temperature, TemperatureScale};
use crate::core::units::{group, UnitDefinition, UnitGroup, UnitGroupId};
use crate::shared::types::{FieldKind, FieldSpec, WidgetOutput};
use log::debug;

pub const RESULT_LABEL: &str = "Kết quả";
pub const RATE_LABEL: &str = "Tỷ lệ";
pub const PACE_LABEL: &str = "Pace (phút:giây/km)";
pub const SPEED_LABEL: &str = "Tốc độ";

fn symbol(unit: &UnitDefinition) -> &'static str {
    unit.abbreviation().unwrap_or(unit.id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitConverterWidget {
    pub group: UnitGroupId,
}

impl UnitConverterWidget {
    pub fn new(group: UnitGroupId) -> Self {
        Self { group }
    }

    fn unit_group(&self) -> &'static UnitGroup {
        group(self.group)
    }

    fn unit_options(&self) -> Vec<(&'static str, &'static str)> {
        self.unit_group().units.iter().map(|u| (u.id, u.label)).collect()
    }
}

impl Widget for UnitConverterWidget {
    fn kind(&self) -> &'static str {
        "unit_converter"
    }

    fn fields(&self) -> Vec<FieldSpec> {
        let g = self.unit_group();
        vec![
            FieldSpec::new("amount", "Giá trị", FieldKind::Number).with_default("1"),
            FieldSpec::new("from", "Từ", FieldKind::Select)
                .with_default(g.default_from().id)
                .with_options(self.unit_options()),
            FieldSpec::new("to", "Sang", FieldKind::Select)
                .with_default(g.default_to().id)
                .with_options(self.unit_options()),
        ]
    }

    fn evaluate(&self, input: &WidgetInput, format: &NumberFormat) -> Option<WidgetOutput> {
        let g = self.unit_group();
        let from = g.unit(input.get_or("from", g.default_from().id))?;
        let to = g.unit(input.get_or("to", g.default_to().id))?;
        let amount = input.number("amount")?;

        let result = convert(amount, from, to);
        debug!(
            "[UnitConverter] {} {} -> {} {} ({:?})",
            amount, from.id, result, to.id, self.group
        );

        let mut output = WidgetOutput::default()
            .line(RESULT_LABEL, format!("{} {}", format_number(result, format), symbol(to)))
            .line(
                RATE_LABEL,
                format!(
                    "1 {} = {} {}",
                    symbol(from),
                    format_number(convert(1.0, from, to), format),
                    symbol(to)
                ),
            );

        // Speed is the reciprocal of pace, so it lives outside the ratio table
        if self.group == UnitGroupId::Pace {
            let min_per_km = g.unit("min_km").map(|base| convert(amount, from, base));
            if let Some(pace) = min_per_km.and_then(format_pace) {
                output = output.line(PACE_LABEL, pace);
            }
            if let Some(kmh) = min_per_km.and_then(speed_kmh_from_pace) {
                output = output.line(SPEED_LABEL, format!("{} km/h", format_number(kmh, format)));
            }
        }
        Some(output)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TemperatureWidget;

impl TemperatureWidget {
    fn scale_options() -> Vec<(&'static str, &'static str)> {
        TemperatureScale::ALL
            .iter()
            .map(|s| (s.symbol(), s.label()))
            .collect()
    }
}

impl Widget for TemperatureWidget {
    fn kind(&self) -> &'static str {
        "temperature_converter"
    }

    fn fields(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("amount", "Nhiệt độ", FieldKind::Number).with_default("0"),
            FieldSpec::new("from", "Từ", FieldKind::Select)
                .with_default("C")
                .with_options(Self::scale_options()),
            FieldSpec::new("to", "Sang", FieldKind::Select)
                .with_default("F")
                .with_options(Self::scale_options()),
        ]
    }

    fn evaluate(&self, input: &WidgetInput, format: &NumberFormat) -> Option<WidgetOutput> {
        let from = TemperatureScale::parse(input.get_or("from", "C"))?;
        let to = TemperatureScale::parse(input.get_or("to", "F"))?;
        let amount = input.number("amount")?;
        let result = convert_temperature(amount, from, to);

        let mut output = WidgetOutput::default().line(
            RESULT_LABEL,
            format!("{} {}", format_number(result, format), to.label()),
        );
        // All three scales side by side
        for scale in TemperatureScale::ALL {
            output = output.line(
                scale.label(),
                format_number(convert_temperature(amount, from, scale), format),
            );
        }
        Some(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_widget_converts() {
        let widget = UnitConverterWidget::new(UnitGroupId::Length);
        let input = WidgetInput::new().set("amount", "100").set("from", "m").set("to", "cm");
        let output = widget.evaluate(&input, &NumberFormat::default()).unwrap();
        assert_eq!(output.value_of(RESULT_LABEL), Some("10.000 cm"));
        assert_eq!(output.value_of(RATE_LABEL), Some("1 m = 100 cm"));
    }

    #[test]
    fn test_empty_amount_is_placeholder() {
        let widget = UnitConverterWidget::new(UnitGroupId::Weight);
        let input = WidgetInput::new().set("amount", "");
        assert!(widget.evaluate(&input, &NumberFormat::default()).is_none());
    }

    #[test]
    fn test_unknown_unit_is_placeholder() {
        let widget = UnitConverterWidget::new(UnitGroupId::Weight);
        let input = WidgetInput::new().set("amount", "1").set("from", "parsec");
        assert!(widget.evaluate(&input, &NumberFormat::default()).is_none());
    }

    #[test]
    fn test_fields_follow_group_order() {
        let fields = UnitConverterWidget::new(UnitGroupId::Currency).fields();
        assert_eq!(fields[1].default_value.as_deref(), Some("usd"));
        assert_eq!(fields[2].default_value.as_deref(), Some("vnd"));
        assert_eq!(fields[1].options.len(), group(UnitGroupId::Currency).units.len());
    }

    #[test]
    fn test_pace_widget_shows_speed() {
        let widget = UnitConverterWidget::new(UnitGroupId::Pace);
        let input = WidgetInput::new().set("amount", "330").set("from", "sec_km").set("to", "min_km");
        let output = widget.evaluate(&input, &NumberFormat::default()).unwrap();
        assert_eq!(output.value_of(PACE_LABEL), Some("5:30"));
        assert_eq!(output.value_of(SPEED_LABEL), Some("10,909091 km/h"));

        let input = WidgetInput::new().set("amount", "0").set("from", "min_km").set("to", "sec_km");
        let output = widget.evaluate(&input, &NumberFormat::default()).unwrap();
        assert_eq!(output.value_of(SPEED_LABEL), None);

        let length = UnitConverterWidget::new(UnitGroupId::Length);
        let input = WidgetInput::new().set("amount", "1").set("from", "m").set("to", "cm");
        assert_eq!(length.evaluate(&input, &NumberFormat::default()).unwrap().value_of(SPEED_LABEL), None);
    }

    #[test]
    fn test_temperature_widget() {
        let input = WidgetInput::new().set("amount", "100").set("from", "C").set("to", "F");
        let output = TemperatureWidget.evaluate(&input, &NumberFormat::default()).unwrap();
        assert_eq!(output.value_of(RESULT_LABEL), Some("212 Độ F (°F)"));
        assert_eq!(output.value_of("Kelvin (K)"), Some("373,15"));
    }
}
