//! Tool categories
//!
//! Single source of truth for category slugs, labels and icons. Category slugs
//! share the URL namespace with tool slugs and are looked up first by the router.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Category a tool is listed under
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ToolCategory {
    /// Unit and currency converters
    Converter,
    /// Arithmetic, percentages and geometry
    Math,
    /// Body measurements (BMI, BMR)
    Health,
    /// Loans and interest
    Finance,
    /// Text transforms and statistics
    Text,
    /// Hashing and encoding demos
    Developer,
    /// Dates, ages and countdowns
    DateTime,
}

impl ToolCategory {
    pub const ALL: [ToolCategory; 7] = [
        ToolCategory::Converter,
        ToolCategory::Math,
        ToolCategory::Health,
        ToolCategory::Finance,
        ToolCategory::Text,
        ToolCategory::Developer,
        ToolCategory::DateTime,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            ToolCategory::Converter => "cong-cu-chuyen-doi",
            ToolCategory::Math => "toan-hoc",
            ToolCategory::Health => "suc-khoe",
            ToolCategory::Finance => "tai-chinh",
            ToolCategory::Text => "cong-cu-van-ban",
            ToolCategory::Developer => "cong-cu-lap-trinh",
            ToolCategory::DateTime => "ngay-gio",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ToolCategory::Converter => "Chuyển đổi đơn vị",
            ToolCategory::Math => "Toán học",
            ToolCategory::Health => "Sức khỏe",
            ToolCategory::Finance => "Tài chính",
            ToolCategory::Text => "Văn bản",
            ToolCategory::Developer => "Lập trình",
            ToolCategory::DateTime => "Ngày giờ",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToolCategory::Converter => "🔁",
            ToolCategory::Math => "🧮",
            ToolCategory::Health => "❤️",
            ToolCategory::Finance => "💰",
            ToolCategory::Text => "📝",
            ToolCategory::Developer => "💻",
            ToolCategory::DateTime => "📅",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

/// Category filter of the listing view; "all" is not a category of its own
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ToolCategory),
}

impl CategoryFilter {
    pub fn matches(&self, category: ToolCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }

    pub fn category(&self) -> Option<ToolCategory> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(c) => Some(*c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slugs_round_trip_and_unique() {
        let slugs: HashSet<_> = ToolCategory::ALL.iter().map(|c| c.slug()).collect();
        assert_eq!(slugs.len(), ToolCategory::ALL.len());
        for category in ToolCategory::ALL {
            assert_eq!(ToolCategory::from_slug(category.slug()), Some(category));
        }
        assert_eq!(ToolCategory::from_slug("khong-ton-tai"), None);
    }

    #[test]
    fn test_filter_matches() {
        assert!(CategoryFilter::All.matches(ToolCategory::Text));
        assert!(CategoryFilter::Only(ToolCategory::Text).matches(ToolCategory::Text));
        assert!(!CategoryFilter::Only(ToolCategory::Math).matches(ToolCategory::Text));
        assert_eq!(CategoryFilter::default().category(), None);
    }
}
