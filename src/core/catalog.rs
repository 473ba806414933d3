//! Tool catalog
//!
//! Static list of tools, part hand-written and part generated from the unit
//! registry. Built once on first use and never mutated afterwards.

use crate::core::convert::convert;
use crate::core::convert::format::{format_number, NumberFormat};
use crate::core::features::calculator::CalculatorWidget;
use crate::core::features::date_time::{AgeWidget, CountdownWidget};
use crate::core::features::encoding::{Codec, EncoderWidget, HashWidget};
use crate::core::features::finance::LoanWidget;
use crate::core::features::geometry::{GeometryWidget, Shape};
use crate::core::features::health::{BmiWidget, BmrWidget};
use crate::core::features::password::PasswordWidget;
use crate::core::features::percentage::PercentageWidget;
use crate::core::features::text_analyser::TextAnalyserWidget;
use crate::core::features::text_case::TextCaseWidget;
use crate::core::features::unit_converter::{TemperatureWidget, UnitConverterWidget};
use crate::core::features::ToolWidget;
use crate::core::units::{group, UnitGroupId};
use crate::shared::error::{AppError, AppResult};
use crate::shared::types::ToolSummary;
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use ts_rs::TS;

pub mod category;

use category::{CategoryFilter, ToolCategory};

static SLUG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid slug regex"));

static CATALOG: Lazy<Catalog> =
    Lazy::new(|| Catalog::new(builtin_tools()).expect("Built-in tool catalog is inconsistent"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Long-form explanatory block shown under a tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeoDetail {
    pub heading: String,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Tool {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub category: ToolCategory,
    pub icon: String,
    pub popular: bool,
    pub widget: ToolWidget,
    pub seo: Option<SeoDetail>,
    pub faq: Vec<FaqEntry>,
}

impl Tool {
    pub fn new(
        id: &str,
        slug: &str,
        title: &str,
        description: &str,
        category: ToolCategory,
        widget: impl Into<ToolWidget>,
    ) -> Self {
        Self {
            id: id.to_string(),
            slug: slug.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            category,
            icon: category.icon().to_string(),
            popular: false,
            widget: widget.into(),
            seo: None,
            faq: Vec::new(),
        }
    }

    pub fn icon(mut self, icon: &str) -> Self {
        self.icon = icon.to_string();
        self
    }

    pub fn popular(mut self) -> Self {
        self.popular = true;
        self
    }

    pub fn seo(mut self, heading: &str, paragraphs: &[&str]) -> Self {
        self.seo = Some(SeoDetail {
            heading: heading.to_string(),
            paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
        });
        self
    }

    pub fn faq(mut self, question: impl Into<String>, answer: impl Into<String>) -> Self {
        self.faq.push(FaqEntry::new(question, answer));
        self
    }

    /// Canonical site path, e.g. `/doi-don-vi-do-dai.html`
    pub fn path(&self) -> String {
        format!("/{}.html", self.slug)
    }

    pub fn summary(&self) -> ToolSummary {
        ToolSummary {
            id: self.id.clone(),
            slug: self.slug.clone(),
            path: self.path(),
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category,
            icon: self.icon.clone(),
            popular: self.popular,
        }
    }
}

/// Immutable, indexed tool list
#[derive(Debug)]
pub struct Catalog {
    tools: Vec<Tool>,
    by_id: HashMap<String, usize>,
    by_slug: HashMap<String, usize>,
}

impl Catalog {
    /// Index `tools`, rejecting duplicate ids or slugs, slugs that are not
    /// URL-safe, and slugs shadowed by a category slug.
    pub fn new(tools: Vec<Tool>) -> AppResult<Self> {
        let mut by_id = HashMap::with_capacity(tools.len());
        let mut by_slug = HashMap::with_capacity(tools.len());

        for (index, tool) in tools.iter().enumerate() {
            if !SLUG_REGEX.is_match(&tool.slug) {
                return Err(AppError::Validation(format!(
                    "Tool '{}' has an invalid slug '{}'",
                    tool.id, tool.slug
                )));
            }
            if ToolCategory::from_slug(&tool.slug).is_some() {
                return Err(AppError::Validation(format!(
                    "Tool slug '{}' collides with a category slug",
                    tool.slug
                )));
            }
            if by_id.insert(tool.id.clone(), index).is_some() {
                return Err(AppError::Validation(format!("Duplicate tool id '{}'", tool.id)));
            }
            if by_slug.insert(tool.slug.clone(), index).is_some() {
                return Err(AppError::Validation(format!(
                    "Duplicate tool slug '{}'",
                    tool.slug
                )));
            }
        }

        info!("[Catalog] Indexed {} tools", tools.len());
        Ok(Self {
            tools,
            by_id,
            by_slug,
        })
    }

    /// The built-in catalog
    pub fn global() -> &'static Catalog {
        &CATALOG
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn get(&self, id: &str) -> Option<&Tool> {
        self.by_id.get(id).map(|&i| &self.tools[i])
    }

    pub fn by_slug(&self, slug: &str) -> Option<&Tool> {
        self.by_slug.get(slug).map(|&i| &self.tools[i])
    }

    /// Tools under `filter`, in catalog order
    pub fn list(&self, filter: CategoryFilter) -> impl Iterator<Item = &Tool> + '_ {
        self.tools.iter().filter(move |t| filter.matches(t.category))
    }

    pub fn popular(&self) -> impl Iterator<Item = &Tool> + '_ {
        self.tools.iter().filter(|t| t.popular)
    }

    pub fn count(&self, category: ToolCategory) -> usize {
        self.list(CategoryFilter::Only(category)).count()
    }

    /// Case-insensitive match on title, description and slug
    pub fn search<'a>(&'a self, query: &str) -> Vec<&'a Tool> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.tools.iter().collect();
        }
        self.tools
            .iter()
            .filter(|t| {
                t.title.to_lowercase().contains(&query)
                    || t.description.to_lowercase().contains(&query)
                    || t.slug.contains(&query)
            })
            .collect()
    }
}

fn converter_slug(id: UnitGroupId) -> &'static str {
    match id {
        UnitGroupId::Length => "doi-don-vi-do-dai",
        UnitGroupId::Area => "doi-don-vi-dien-tich",
        UnitGroupId::Weight => "doi-don-vi-khoi-luong",
        UnitGroupId::Volume => "doi-don-vi-the-tich",
        UnitGroupId::Time => "doi-don-vi-thoi-gian",
        UnitGroupId::DataSize => "doi-don-vi-du-lieu",
        UnitGroupId::Speed => "doi-don-vi-toc-do",
        UnitGroupId::Pressure => "doi-don-vi-ap-suat",
        UnitGroupId::Power => "doi-don-vi-cong-suat",
        UnitGroupId::Energy => "doi-don-vi-nang-luong",
        UnitGroupId::Voltage => "doi-don-vi-dien-ap",
        UnitGroupId::Current => "doi-don-vi-dong-dien",
        UnitGroupId::Angle => "doi-don-vi-goc",
        UnitGroupId::Frequency => "doi-don-vi-tan-so",
        UnitGroupId::Quantity => "doi-don-vi-so-luong",
        UnitGroupId::PartsPer => "doi-don-vi-ppm",
        UnitGroupId::Pace => "doi-toc-do-chay-bo",
        UnitGroupId::ReactivePower => "doi-don-vi-cong-suat-phan-khang",
        UnitGroupId::ApparentPower => "doi-don-vi-cong-suat-bieu-kien",
        UnitGroupId::FlowRate => "doi-don-vi-luu-luong",
        UnitGroupId::Illuminance => "doi-don-vi-do-roi",
        UnitGroupId::Torque => "doi-don-vi-mo-men-xoan",
        UnitGroupId::Charge => "doi-don-vi-dien-luong",
        UnitGroupId::Currency => "doi-tien-te",
    }
}

/// Generate the converter tool of one ratio group.
///
/// SEO text and the FAQ answer are derived from the group's default pair, so
/// they always agree with what the widget computes.
pub fn unit_converter_tool(id: UnitGroupId) -> Tool {
    let g = group(id);
    let (from, to) = (g.default_from(), g.default_to());
    let name = id.display_name();
    let rate = format_number(convert(1.0, from, to), &NumberFormat::default());
    let units = g.units.iter().map(|u| u.label).collect::<Vec<_>>().join(", ");

    let (title, description) = match id {
        UnitGroupId::Currency => (
            "Đổi tiền tệ (tỷ giá ước tính)".to_string(),
            "Quy đổi nhanh giữa các loại tiền tệ phổ biến theo tỷ giá tham khảo cố định."
                .to_string(),
        ),
        _ => (
            format!("Đổi đơn vị {}", name),
            format!("Chuyển đổi nhanh và chính xác giữa các đơn vị {} thông dụng.", name),
        ),
    };

    let mut tool = Tool::new(
        &format!("convert-{}", id.as_str()),
        converter_slug(id),
        &title,
        &description,
        ToolCategory::Converter,
        UnitConverterWidget::new(id),
    )
    .seo(
        &format!("Cách đổi đơn vị {}", name),
        &[
            format!("Công cụ hỗ trợ các đơn vị: {}.", units).as_str(),
            "Nhập giá trị, chọn đơn vị nguồn và đơn vị đích, kết quả hiển thị ngay lập tức.",
        ],
    )
    .faq(
        format!("1 {} bằng bao nhiêu {}?", from.label, to.label),
        format!("1 {} = {} {}.", from.label, rate, to.label),
    );

    if id == UnitGroupId::Currency {
        tool = tool
            .icon("💱")
            .faq(
                "Tỷ giá có được cập nhật theo thời gian thực không?",
                "Không. Tỷ giá là giá trị tham khảo cố định, chỉ dùng để ước tính.",
            );
    }
    if matches!(id, UnitGroupId::Length | UnitGroupId::Weight | UnitGroupId::Currency) {
        tool = tool.popular();
    }
    tool
}

fn builtin_tools() -> Vec<Tool> {
    let mut tools = vec![
        Tool::new(
            "percentage",
            "tinh-phan-tram",
            "Tính phần trăm",
            "Tính x% của y, x là bao nhiêu phần trăm của y và phần trăm thay đổi.",
            ToolCategory::Math,
            PercentageWidget,
        )
        .icon("％")
        .popular()
        .faq(
            "Cách tính phần trăm tăng giảm?",
            "Lấy (giá trị mới - giá trị cũ) chia cho giá trị cũ rồi nhân 100.",
        ),
        Tool::new(
            "calculator",
            "may-tinh-online",
            "Máy tính online",
            "Tính biểu thức toán học với dấu ngoặc, lũy thừa và hàm cơ bản.",
            ToolCategory::Math,
            CalculatorWidget,
        )
        .popular(),
        Tool::new(
            "circle",
            "tinh-dien-tich-hinh-tron",
            "Diện tích hình tròn",
            "Tính diện tích và chu vi hình tròn theo bán kính.",
            ToolCategory::Math,
            GeometryWidget::new(Shape::Circle),
        )
        .icon("⚪")
        .faq("Công thức diện tích hình tròn?", "S = π × r²"),
        Tool::new(
            "rectangle",
            "tinh-dien-tich-hinh-chu-nhat",
            "Diện tích hình chữ nhật",
            "Tính diện tích và chu vi hình chữ nhật theo chiều dài và chiều rộng.",
            ToolCategory::Math,
            GeometryWidget::new(Shape::Rectangle),
        )
        .icon("▭"),
        Tool::new(
            "triangle",
            "tinh-dien-tich-tam-giac",
            "Diện tích tam giác",
            "Tính diện tích tam giác từ độ dài ba cạnh bằng công thức Heron.",
            ToolCategory::Math,
            GeometryWidget::new(Shape::Triangle),
        )
        .icon("△"),
        Tool::new(
            "bmi",
            "tinh-chi-so-bmi",
            "Tính chỉ số BMI",
            "Tính chỉ số khối cơ thể và phân loại theo chuẩn WHO.",
            ToolCategory::Health,
            BmiWidget,
        )
        .popular()
        .seo(
            "Chỉ số BMI là gì?",
            &["BMI bằng cân nặng (kg) chia cho bình phương chiều cao (m)."],
        )
        .faq("BMI bao nhiêu là bình thường?", "Từ 18,5 đến dưới 25 theo phân loại của WHO."),
        Tool::new(
            "bmr",
            "tinh-bmr-calo",
            "Tính BMR và calo mỗi ngày",
            "Ước tính năng lượng trao đổi chất cơ bản theo công thức Mifflin-St Jeor.",
            ToolCategory::Health,
            BmrWidget,
        )
        .icon("🔥"),
        Tool::new(
            "loan",
            "tinh-lai-vay",
            "Tính lãi vay trả góp",
            "Tính số tiền trả hàng tháng và tổng lãi của khoản vay lãi suất cố định.",
            ToolCategory::Finance,
            LoanWidget,
        )
        .popular()
        .faq(
            "Công cụ dùng phương pháp tính nào?",
            "Dư nợ giảm dần với số tiền trả cố định hàng tháng.",
        ),
        Tool::new(
            "password-generator",
            "tao-mat-khau",
            "Tạo mật khẩu ngẫu nhiên",
            "Tạo mật khẩu mạnh với độ dài và loại ký tự tùy chọn.",
            ToolCategory::Developer,
            PasswordWidget,
        )
        .icon("🔑")
        .popular(),
        Tool::new(
            "hash-generator",
            "tao-ma-hash",
            "Tạo mã hash MD5, SHA",
            "Tính mã băm MD5, SHA-256 và SHA-512 của một đoạn văn bản.",
            ToolCategory::Developer,
            HashWidget,
        )
        .icon("#️⃣"),
        Tool::new(
            "base64",
            "ma-hoa-base64",
            "Mã hóa Base64",
            "Mã hóa và giải mã văn bản theo chuẩn Base64.",
            ToolCategory::Developer,
            EncoderWidget::new(Codec::Base64),
        ),
        Tool::new(
            "url-encoder",
            "ma-hoa-url",
            "Mã hóa URL",
            "Mã hóa và giải mã ký tự đặc biệt trong đường dẫn URL.",
            ToolCategory::Developer,
            EncoderWidget::new(Codec::Url),
        )
        .icon("🔗"),
        Tool::new(
            "text-case",
            "chuyen-doi-chu-hoa-thuong",
            "Chuyển chữ hoa, chữ thường",
            "Đổi kiểu chữ: HOA, thường, Viết Hoa Mỗi Từ, snake_case, camelCase...",
            ToolCategory::Text,
            TextCaseWidget,
        )
        .icon("🔠"),
        Tool::new(
            "word-counter",
            "dem-tu",
            "Đếm từ và ký tự",
            "Đếm số từ, ký tự, câu, dòng và ước tính thời gian đọc.",
            ToolCategory::Text,
            TextAnalyserWidget,
        )
        .popular(),
        Tool::new(
            "age-calculator",
            "tinh-tuoi",
            "Tính tuổi",
            "Tính tuổi chính xác theo năm, tháng, ngày từ ngày sinh.",
            ToolCategory::DateTime,
            AgeWidget,
        )
        .icon("🎂"),
        Tool::new(
            "countdown",
            "dem-nguoc",
            "Đếm ngược thời gian",
            "Đếm ngược đến một ngày giờ cụ thể.",
            ToolCategory::DateTime,
            CountdownWidget,
        )
        .icon("⏳"),
        Tool::new(
            "temperature",
            "doi-don-vi-nhiet-do",
            "Đổi đơn vị nhiệt độ",
            "Chuyển đổi giữa độ C, độ F và Kelvin.",
            ToolCategory::Converter,
            TemperatureWidget,
        )
        .icon("🌡️")
        .popular()
        .faq("0 độ C bằng bao nhiêu độ F?", "0 °C = 32 °F."),
    ];

    tools.extend(UnitGroupId::ALL.into_iter().map(unit_converter_tool));
    tools
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::features::Widget;

    #[test]
    fn test_global_catalog_builds() {
        let catalog = Catalog::global();
        assert_eq!(catalog.count(ToolCategory::Converter), UnitGroupId::ALL.len() + 1);
        assert!(catalog.popular().count() > 0);
        for category in ToolCategory::ALL {
            assert!(catalog.count(category) > 0, "{:?} is empty", category);
        }
    }

    #[test]
    fn test_lookup_by_slug_and_id() {
        let catalog = Catalog::global();
        let tool = catalog.by_slug("doi-don-vi-do-dai").unwrap();
        assert_eq!(tool.id, "convert-length");
        assert_eq!(tool.widget.kind(), "unit_converter");
        assert_eq!(tool.path(), "/doi-don-vi-do-dai.html");
        assert!(catalog.get("convert-length").is_some());
        assert!(catalog.get("nope").is_none());
    }

    #[test]
    fn test_generated_faq_matches_conversion() {
        let tool = unit_converter_tool(UnitGroupId::Length);
        assert_eq!(tool.faq.len(), 1);
        assert!(tool.faq[0].answer.contains("= 100 "));
        assert!(tool.seo.is_some());
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let tools = vec![
            Tool::new("a", "same", "A", "", ToolCategory::Math, CalculatorWidget),
            Tool::new("b", "same", "B", "", ToolCategory::Math, CalculatorWidget),
        ];
        assert!(matches!(Catalog::new(tools), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_invalid_and_shadowed_slugs_rejected() {
        let bad = vec![Tool::new("a", "có dấu", "A", "", ToolCategory::Math, CalculatorWidget)];
        assert!(Catalog::new(bad).is_err());
        let shadowed = vec![Tool::new("a", "toan-hoc", "A", "", ToolCategory::Math, CalculatorWidget)];
        assert!(Catalog::new(shadowed).is_err());
    }

    #[test]
    fn test_list_and_search() {
        let catalog = Catalog::global();
        let text: Vec<_> = catalog
            .list(CategoryFilter::Only(ToolCategory::Text))
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(text, vec!["text-case", "word-counter"]);
        assert_eq!(catalog.list(CategoryFilter::All).count(), catalog.tools().len());
        assert!(catalog.search("BMI").iter().any(|t| t.id == "bmi"));
        assert_eq!(catalog.search("  ").len(), catalog.tools().len());
    }
}
