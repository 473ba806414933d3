//! Routing and page metadata commands

use crate::core::catalog::Catalog;
use crate::core::router::{resolve, RouteView};
use crate::core::seo::head::HeadDocument;
use crate::core::seo::{apply_metadata, compute_metadata, PageMetadata};
use crate::shared::settings::SiteSettings;

pub fn resolve_route(catalog: &Catalog, path: &str) -> RouteView {
    resolve(path, catalog)
}

pub fn page_metadata(catalog: &Catalog, path: &str, site: &SiteSettings) -> PageMetadata {
    compute_metadata(&resolve(path, catalog), catalog, site)
}

/// Managed `<head>` elements of `path` as HTML, for server-side rendering
pub fn render_head(catalog: &Catalog, path: &str, site: &SiteSettings) -> String {
    let mut head = HeadDocument::new();
    apply_metadata(&page_metadata(catalog, path, site), &mut head);
    head.render()
}
