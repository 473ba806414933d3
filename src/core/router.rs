//! Path to view resolution
//!
//! `/` lists every tool, `/<category-slug>.html` a category and
//! `/<tool-slug>.html` a single tool. Anything else falls back to the full
//! listing; routing never fails.

use crate::core::catalog::category::{CategoryFilter, ToolCategory};
use crate::core::catalog::{Catalog, Tool};
use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

static ROUTE_REGEX: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(r"^/([A-Za-z0-9_-]+)(?:\.html)?$").expect("Invalid route regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum RouteView {
    All,
    Category { id: ToolCategory },
    Tool { id: String },
}

/// Resolve a URL path. Category slugs win over tool slugs; [`Catalog::new`]
/// already refuses a tool whose slug matches a category, so the order only
/// matters for catalogs that skip that check.
pub fn resolve(path: &str, catalog: &Catalog) -> RouteView {
    let Some(caps) = ROUTE_REGEX.captures(path) else {
        return RouteView::All;
    };
    let slug = &caps[1];

    if let Some(category) = ToolCategory::from_slug(slug) {
        return RouteView::Category { id: category };
    }
    match catalog.by_slug(slug) {
        Some(tool) => RouteView::Tool { id: tool.id.clone() },
        None => {
            debug!("[Router] Unknown slug '{}', showing all tools", slug);
            RouteView::All
        }
    }
}

/// Current listing filter and open tool, as driven by user navigation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub filter: CategoryFilter,
    pub tool: Option<String>,
}

impl NavigationState {
    pub fn from_path(path: &str, catalog: &Catalog) -> Self {
        let mut state = Self::default();
        state.navigate(resolve(path, catalog));
        state
    }

    /// Apply a view. Opening a tool resets the category filter to all.
    pub fn navigate(&mut self, view: RouteView) {
        match view {
            RouteView::All => {
                self.filter = CategoryFilter::All;
                self.tool = None;
            }
            RouteView::Category { id } => {
                self.filter = CategoryFilter::Only(id);
                self.tool = None;
            }
            RouteView::Tool { id } => {
                self.filter = CategoryFilter::All;
                self.tool = Some(id);
            }
        }
    }

    pub fn view(&self) -> RouteView {
        match (&self.tool, self.filter) {
            (Some(id), _) => RouteView::Tool { id: id.clone() },
            (None, CategoryFilter::Only(id)) => RouteView::Category { id },
            (None, CategoryFilter::All) => RouteView::All,
        }
    }

    pub fn selected_tool<'a>(&self, catalog: &'a Catalog) -> Option<&'a Tool> {
        self.tool.as_deref().and_then(|id| catalog.get(id))
    }

    /// Canonical path of the current state, for history entries
    pub fn path(&self, catalog: &Catalog) -> String {
        if let Some(tool) = self.selected_tool(catalog) {
            return tool.path();
        }
        match self.filter {
            CategoryFilter::Only(category) => format!("/{}.html", category.slug()),
            CategoryFilter::All => "/".to_string(),
        }
    }
}
