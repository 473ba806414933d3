use super::{Widget, WidgetInput};
use crate::core::convert::format::{format_number, NumberFormat};
use crate::shared::types::{FieldKind, FieldSpec, WidgetOutput};
use std::f64::consts::PI;

pub const AREA_LABEL: &str = "Diện tích";
pub const PERIMETER_LABEL: &str = "Chu vi";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Circle,
    Rectangle,
    Triangle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    pub area: f64,
    pub perimeter: f64,
}

pub fn circle(radius: f64) -> Option<Measurements> {
    (radius > 0.0).then(|| Measurements {
        area: PI * radius * radius,
        perimeter: 2.0 * PI * radius,
    })
}

pub fn rectangle(width: f64, height: f64) -> Option<Measurements> {
    (width > 0.0 && height > 0.0).then(|| Measurements {
        area: width * height,
        perimeter: 2.0 * (width + height),
    })
}

/// Heron's formula; sides violating the triangle inequality have no area
pub fn triangle(a: f64, b: f64, c: f64) -> Option<Measurements> {
    if a <= 0.0 || b <= 0.0 || c <= 0.0 || a + b <= c || a + c <= b || b + c <= a {
        return None;
    }
    let s = (a + b + c) / 2.0;
    Some(Measurements {
        area: (s * (s - a) * (s - b) * (s - c)).sqrt(),
        perimeter: a + b + c,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryWidget {
    pub shape: Shape,
}

impl GeometryWidget {
    pub fn new(shape: Shape) -> Self {
        Self { shape }
    }
}

impl Widget for GeometryWidget {
    fn kind(&self) -> &'static str {
        "geometry"
    }

    fn fields(&self) -> Vec<FieldSpec> {
        match self.shape {
            Shape::Circle => vec![FieldSpec::new("radius", "Bán kính", FieldKind::Number)],
            Shape::Rectangle => vec![
                FieldSpec::new("width", "Chiều dài", FieldKind::Number),
                FieldSpec::new("height", "Chiều rộng", FieldKind::Number),
            ],
            Shape::Triangle => vec![
                FieldSpec::new("a", "Cạnh a", FieldKind::Number),
                FieldSpec::new("b", "Cạnh b", FieldKind::Number),
                FieldSpec::new("c", "Cạnh c", FieldKind::Number),
            ],
        }
    }

    fn evaluate(&self, input: &WidgetInput, format: &NumberFormat) -> Option<WidgetOutput> {
        let measurements = match self.shape {
            Shape::Circle => circle(input.number("radius")?),
            Shape::Rectangle => rectangle(input.number("width")?, input.number("height")?),
            Shape::Triangle => triangle(input.number("a")?, input.number("b")?, input.number("c")?),
        }?;
        Some(
            WidgetOutput::default()
                .line(AREA_LABEL, format_number(measurements.area, format))
                .line(PERIMETER_LABEL, format_number(measurements.perimeter, format)),
        )
    }
}
