//! TypeScript binding shape checks
//! Bindings themselves are written by the generated `export_bindings_*` tests.

#[cfg(test)]
mod tests {
    use crate::core::catalog::category::ToolCategory;
    use crate::core::router::RouteView;
    use crate::shared::types::*;
    use ts_rs::TS;

    #[test]
    fn test_binding_declarations() {
        assert!(ToolCategory::decl().contains("\"date_time\""));
        assert!(RouteView::decl().contains("kind"));
        assert!(ToolSummary::decl().contains("popular: boolean"));
        assert!(ConvertUnitsResponse::decl().contains("formatted_result: string | null"));
    }
}
