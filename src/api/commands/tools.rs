//! Catalog commands

use crate::core::catalog::category::{CategoryFilter, ToolCategory};
use crate::core::catalog::{Catalog, Tool};
use crate::core::convert::format::NumberFormat;
use crate::core::features::{Widget, WidgetInput};
use crate::core::rating::store::KeyValueStore;
use crate::core::rating::RatingService;
use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{
    CategoryDTO, EvaluateToolRequest, EvaluateToolResponse, ToolDetail, ToolSummary,
};

fn find_tool<'a>(catalog: &'a Catalog, tool_id: &str) -> AppResult<&'a Tool> {
    catalog
        .get(tool_id)
        .ok_or_else(|| AppError::NotFound(format!("Tool '{}'", tool_id)))
}

/// Tools in catalog order, optionally limited to one category
pub fn list_tools(catalog: &Catalog, category: Option<ToolCategory>) -> Vec<ToolSummary> {
    let filter = category.map(CategoryFilter::Only).unwrap_or_default();
    catalog.list(filter).map(Tool::summary).collect()
}

pub fn list_popular_tools(catalog: &Catalog) -> Vec<ToolSummary> {
    catalog.popular().map(Tool::summary).collect()
}

pub fn search_tools(catalog: &Catalog, query: &str) -> Vec<ToolSummary> {
    catalog.search(query).into_iter().map(Tool::summary).collect()
}

pub fn list_categories(catalog: &Catalog) -> Vec<CategoryDTO> {
    ToolCategory::ALL
        .iter()
        .map(|c| CategoryDTO {
            id: *c,
            slug: c.slug().to_string(),
            label: c.label().to_string(),
            icon: c.icon().to_string(),
            tool_count: catalog.count(*c),
        })
        .collect()
}

/// Everything the host needs to render one tool page
pub fn get_tool<S: KeyValueStore>(
    catalog: &Catalog,
    ratings: &RatingService<S>,
    tool_id: &str,
) -> AppResult<ToolDetail> {
    let tool = find_tool(catalog, tool_id)?;
    Ok(ToolDetail {
        summary: tool.summary(),
        widget: tool.widget.kind().to_string(),
        fields: tool.widget.fields(),
        seo: tool.seo.clone(),
        faq: tool.faq.clone(),
        rating: ratings.summary(&tool.id)?,
        user_rating: ratings.user_rating(&tool.id)?,
    })
}

pub fn evaluate_tool(
    catalog: &Catalog,
    request: EvaluateToolRequest,
    format: &NumberFormat,
) -> AppResult<EvaluateToolResponse> {
    let tool = find_tool(catalog, &request.tool_id)?;
    let input = WidgetInput::from(request.input);
    Ok(EvaluateToolResponse {
        output: tool.widget.evaluate(&input, format),
        tool_id: request.tool_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rating::store::MemoryStore;
    use std::collections::HashMap;

    #[test]
    fn test_list_tools_by_category() {
        let catalog = Catalog::global();
        let health = list_tools(catalog, Some(ToolCategory::Health));
        assert!(health.iter().all(|t| t.category == ToolCategory::Health));
        assert_eq!(list_tools(catalog, None).len(), catalog.tools().len());
    }

    #[test]
    fn test_categories_count_tools() {
        let catalog = Catalog::global();
        let total: usize = list_categories(catalog).iter().map(|c| c.tool_count).sum();
        assert_eq!(total, catalog.tools().len());
    }

    #[test]
    fn test_get_tool_detail() {
        let ratings = RatingService::new(MemoryStore::new());
        let detail = get_tool(Catalog::global(), &ratings, "convert-length").unwrap();
        assert_eq!(detail.widget, "unit_converter");
        assert_eq!(detail.fields.len(), 3);
        assert_eq!(detail.summary.path, "/doi-don-vi-do-dai.html");
        assert_eq!(detail.user_rating, None);

        assert!(matches!(
            get_tool(Catalog::global(), &ratings, "missing"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_evaluate_tool() {
        let input: HashMap<String, String> = [("weight", "70"), ("height", "175")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let response = evaluate_tool(
            Catalog::global(),
            EvaluateToolRequest { tool_id: "bmi".to_string(), input },
            &NumberFormat::default(),
        )
        .unwrap();
        assert!(response.output.is_some());

        let empty = evaluate_tool(
            Catalog::global(),
            EvaluateToolRequest { tool_id: "bmi".to_string(), input: HashMap::new() },
            &NumberFormat::default(),
        )
        .unwrap();
        assert!(empty.output.is_none());
    }
}
