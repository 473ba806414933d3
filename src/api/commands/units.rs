//! Unit registry and conversion commands

use crate::core::convert::convert_input;
use crate::core::convert::format::{format_number, NumberFormat};
use crate::core::convert::parse_amount;
use crate::core::units::parsing::parse_quantity as parse_free_text;
use crate::core::units::temperature::convert_temperature as convert_scale;
use crate::core::units::{find_group, groups, UnitGroup};
use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{
    ConvertTemperatureRequest, ConvertUnitsRequest, ConvertUnitsResponse, GetUnitsResponse,
    ParseQuantityResponse, UnitDTO, UnitGroupDTO,
};
use log::debug;

fn group_dto(g: &UnitGroup) -> UnitGroupDTO {
    UnitGroupDTO {
        id: g.id,
        name: g.id.display_name().to_string(),
        default_from: g.default_from().id.to_string(),
        default_to: g.default_to().id.to_string(),
        units: g
            .units
            .iter()
            .map(|u| UnitDTO {
                id: u.id.to_string(),
                label: u.label.to_string(),
                ratio: u.ratio,
            })
            .collect(),
    }
}

/// Every unit group, in registry order
pub fn get_units() -> GetUnitsResponse {
    GetUnitsResponse {
        groups: groups().iter().map(group_dto).collect(),
    }
}

/// Convert within one group.
///
/// Unknown groups or units are errors; an amount that does not parse is not,
/// it yields an empty result for the placeholder.
pub fn convert_units(
    request: &ConvertUnitsRequest,
    format: &NumberFormat,
) -> AppResult<ConvertUnitsResponse> {
    let group = find_group(&request.group)
        .ok_or_else(|| AppError::NotFound(format!("Unit group '{}'", request.group)))?;
    let from = group.unit(&request.from_unit).ok_or_else(|| {
        AppError::Validation(format!("Unit '{}' is not in group '{}'", request.from_unit, request.group))
    })?;
    let to = group.unit(&request.to_unit).ok_or_else(|| {
        AppError::Validation(format!("Unit '{}' is not in group '{}'", request.to_unit, request.group))
    })?;

    let result = convert_input(&request.amount, from, to);
    debug!(
        "[UnitConverter] {:?} {} -> {} = {:?}",
        request.amount, from.id, to.id, result
    );

    Ok(ConvertUnitsResponse {
        result,
        formatted_result: result.map(|v| format_number(v, format)),
        from_unit: from.id.to_string(),
        to_unit: to.id.to_string(),
    })
}

pub fn convert_temperature(
    request: &ConvertTemperatureRequest,
    format: &NumberFormat,
) -> ConvertUnitsResponse {
    let result = parse_amount(&request.amount).map(|v| convert_scale(v, request.from, request.to));
    ConvertUnitsResponse {
        result,
        formatted_result: result.map(|v| format_number(v, format)),
        from_unit: request.from.symbol().to_string(),
        to_unit: request.to.symbol().to_string(),
    }
}

/// First "number + unit" pair found in free text
pub fn parse_quantity(text: &str) -> Option<ParseQuantityResponse> {
    parse_free_text(text).map(|q| ParseQuantityResponse {
        amount: q.amount,
        group: q.group,
        unit: q.unit.id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::units::temperature::TemperatureScale;
    use crate::core::units::UnitGroupId;

    fn request(group: &str, amount: &str, from: &str, to: &str) -> ConvertUnitsRequest {
        ConvertUnitsRequest {
            group: group.to_string(),
            amount: amount.to_string(),
            from_unit: from.to_string(),
            to_unit: to.to_string(),
        }
    }

    #[test]
    fn test_get_units_lists_all_groups() {
        let response = get_units();
        assert_eq!(response.groups.len(), UnitGroupId::ALL.len());
        assert_eq!(response.groups[0].default_from, "m");
        assert_eq!(response.groups[0].default_to, "cm");
    }

    #[test]
    fn test_convert_units() {
        let response = convert_units(&request("length", "100", "m", "cm"), &NumberFormat::default()).unwrap();
        assert_eq!(response.result, Some(10000.0));
        assert_eq!(response.formatted_result.as_deref(), Some("10.000"));
    }

    #[test]
    fn test_convert_units_placeholder_and_errors() {
        let format = NumberFormat::default();
        let empty = convert_units(&request("length", "", "m", "cm"), &format).unwrap();
        assert_eq!(empty.result, None);
        assert_eq!(empty.formatted_result, None);

        assert!(matches!(
            convert_units(&request("nope", "1", "m", "cm"), &format),
            Err(AppError::NotFound(_))
        ));
        // kg is a weight unit, not a length unit
        assert!(matches!(
            convert_units(&request("length", "1", "kg", "m"), &format),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_convert_temperature() {
        let response = convert_temperature(
            &ConvertTemperatureRequest {
                amount: "100".to_string(),
                from: TemperatureScale::Celsius,
                to: TemperatureScale::Fahrenheit,
            },
            &NumberFormat::default(),
        );
        assert_eq!(response.formatted_result.as_deref(), Some("212"));
        assert_eq!(response.to_unit, "F");
    }

    #[test]
    fn test_parse_quantity() {
        let parsed = parse_quantity("chạy 12 km mỗi ngày").unwrap();
        assert_eq!(parsed.amount, 12.0);
        assert_eq!(parsed.group, UnitGroupId::Length);
        assert_eq!(parsed.unit, "km");
        assert!(parse_quantity("không có số").is_none());
    }
}
