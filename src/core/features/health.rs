//! Body mass index and basal metabolic rate

use super::{Widget, WidgetInput};
use crate::core::convert::format::{format_number, NumberFormat};
use crate::shared::types::{FieldKind, FieldSpec, WidgetOutput};

pub const BMI_LABEL: &str = "BMI";
pub const CLASS_LABEL: &str = "Phân loại";
pub const BMR_LABEL: &str = "BMR (kcal/ngày)";
pub const TDEE_LABEL: &str = "TDEE (kcal/ngày)";

/// BMI from kilograms and centimetres
pub fn bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if weight_kg <= 0.0 || height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(weight_kg / (height_m * height_m))
}

/// WHO adult classification
pub fn bmi_class(bmi: f64) -> &'static str {
    if bmi < 18.5 {
        "Thiếu cân"
    } else if bmi < 25.0 {
        "Bình thường"
    } else if bmi < 30.0 {
        "Thừa cân"
    } else {
        "Béo phì"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

/// Mifflin-St Jeor equation
pub fn bmr(sex: Sex, weight_kg: f64, height_cm: f64, age_years: f64) -> Option<f64> {
    if weight_kg <= 0.0 || height_cm <= 0.0 || age_years <= 0.0 {
        return None;
    }
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years;
    Some(match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    })
}

fn activity_factor(level: &str) -> Option<f64> {
    match level {
        "sedentary" => Some(1.2),
        "light" => Some(1.375),
        "moderate" => Some(1.55),
        "active" => Some(1.725),
        "very_active" => Some(1.9),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BmiWidget;

impl Widget for BmiWidget {
    fn kind(&self) -> &'static str {
        "bmi"
    }

    fn fields(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("weight", "Cân nặng (kg)", FieldKind::Number),
            FieldSpec::new("height", "Chiều cao (cm)", FieldKind::Number),
        ]
    }

    fn evaluate(&self, input: &WidgetInput, format: &NumberFormat) -> Option<WidgetOutput> {
        let value = bmi(input.number("weight")?, input.number("height")?)?;
        let format = NumberFormat { max_fraction_digits: 1, ..*format };
        Some(
            WidgetOutput::default()
                .line(BMI_LABEL, format_number(value, &format))
                .line(CLASS_LABEL, bmi_class(value)),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BmrWidget;

impl Widget for BmrWidget {
    fn kind(&self) -> &'static str {
        "bmr"
    }

    fn fields(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("sex", "Giới tính", FieldKind::Select)
                .with_default("male")
                .with_options([("male", "Nam"), ("female", "Nữ")]),
            FieldSpec::new("weight", "Cân nặng (kg)", FieldKind::Number),
            FieldSpec::new("height", "Chiều cao (cm)", FieldKind::Number),
            FieldSpec::new("age", "Tuổi", FieldKind::Number),
            FieldSpec::new("activity", "Mức độ vận động", FieldKind::Select)
                .with_default("sedentary")
                .with_options([
                    ("sedentary", "Ít vận động"),
                    ("light", "Vận động nhẹ (1-3 ngày/tuần)"),
                    ("moderate", "Vận động vừa (3-5 ngày/tuần)"),
                    ("active", "Vận động nhiều (6-7 ngày/tuần)"),
                    ("very_active", "Vận động rất nhiều"),
                ]),
        ]
    }

    fn evaluate(&self, input: &WidgetInput, format: &NumberFormat) -> Option<WidgetOutput> {
        let sex = match input.get_or("sex", "male") {
            "female" => Sex::Female,
            _ => Sex::Male,
        };
        let value = bmr(sex, input.number("weight")?, input.number("height")?, input.number("age")?)?;
        let factor = activity_factor(input.get_or("activity", "sedentary"))?;
        let format = NumberFormat { max_fraction_digits: 0, ..*format };
        Some(
            WidgetOutput::default()
                .line(BMR_LABEL, format_number(value, &format))
                .line(TDEE_LABEL, format_number(value * factor, &format)),
        )
    }
}
