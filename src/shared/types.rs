use crate::core::catalog::category::ToolCategory;
use crate::core::catalog::{FaqEntry, SeoDetail};
use crate::core::rating::RatingSummary;
use crate::core::units::temperature::TemperatureScale;
use crate::core::units::UnitGroupId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use ts_rs::TS;

// ============================================================================
// Widget forms
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    Number,
    Text,
    TextArea,
    Select,
    Checkbox,
    Date,
    DateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

/// One input of a widget form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub default_value: Option<String>,
    pub options: Vec<FieldOption>,
}

impl FieldSpec {
    pub fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            default_value: None,
            options: Vec::new(),
        }
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_options<I, V, L>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = (V, L)>,
        V: Into<String>,
        L: Into<String>,
    {
        self.options = options
            .into_iter()
            .map(|(value, label)| FieldOption {
                value: value.into(),
                label: label.into(),
            })
            .collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OutputLine {
    pub label: String,
    pub value: String,
}

/// Rendered result of a widget; absent while inputs are incomplete
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WidgetOutput {
    pub lines: Vec<OutputLine>,
}

impl WidgetOutput {
    pub fn line(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.lines.push(OutputLine {
            label: label.into(),
            value: value.into(),
        });
        self
    }

    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|l| l.label == label)
            .map(|l| l.value.as_str())
    }
}

// ============================================================================
// Units
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UnitDTO {
    pub id: String,
    pub label: String,
    pub ratio: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UnitGroupDTO {
    pub id: UnitGroupId,
    pub name: String,
    pub default_from: String,
    pub default_to: String,
    pub units: Vec<UnitDTO>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GetUnitsResponse {
    pub groups: Vec<UnitGroupDTO>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConvertUnitsRequest {
    pub group: String,
    /// Raw form text; unparseable input yields an empty result
    pub amount: String,
    pub from_unit: String,
    pub to_unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConvertUnitsResponse {
    pub result: Option<f64>,
    pub formatted_result: Option<String>,
    pub from_unit: String,
    pub to_unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConvertTemperatureRequest {
    pub amount: String,
    pub from: TemperatureScale,
    pub to: TemperatureScale,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ParseQuantityResponse {
    pub amount: f64,
    pub group: UnitGroupId,
    pub unit: String,
}

// ============================================================================
// Tools
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ToolSummary {
    pub id: String,
    pub slug: String,
    pub path: String,
    pub title: String,
    pub description: String,
    pub category: ToolCategory,
    pub icon: String,
    pub popular: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ToolDetail {
    pub summary: ToolSummary,
    pub widget: String,
    pub fields: Vec<FieldSpec>,
    pub seo: Option<SeoDetail>,
    pub faq: Vec<FaqEntry>,
    pub rating: RatingSummary,
    pub user_rating: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryDTO {
    pub id: ToolCategory,
    pub slug: String,
    pub label: String,
    pub icon: String,
    pub tool_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluateToolRequest {
    pub tool_id: String,
    pub input: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluateToolResponse {
    pub tool_id: String,
    pub output: Option<WidgetOutput>,
}

// ============================================================================
// Ratings
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RateToolRequest {
    pub tool_id: String,
    pub stars: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RateToolResponse {
    /// False when this client already voted for the tool
    pub accepted: bool,
    pub summary: RatingSummary,
    pub user_rating: Option<u8>,
}
