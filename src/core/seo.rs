//! Page metadata for search engines and link previews
//!
//! [`compute_metadata`] is pure; [`apply_metadata`] is the only place that
//! touches a document, and it never fails: missing elements are skipped and
//! serialization problems are logged.

use crate::core::catalog::category::ToolCategory;
use crate::core::catalog::{Catalog, Tool};
use crate::core::router::RouteView;
use crate::shared::settings::SiteSettings;
use log::{debug, error};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use ts_rs::TS;
use url::Url;

pub mod head;

use head::{DocumentHead, MetaKey};

const SCHEMA_CONTEXT: &str = "https://schema.org";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub og_title: String,
    pub og_description: String,
    pub og_url: String,
    pub canonical_url: String,
    #[ts(type = "Record<string, unknown>")]
    pub json_ld: Value,
}

/// Absolute URL of `path` on the configured site.
///
/// `path` is resolved below `base_url`, so a base such as
/// `https://example.com/tools` keeps its `/tools` prefix.
pub fn absolute_url(site: &SiteSettings, path: &str) -> String {
    let joined = Url::parse(&site.base_url).and_then(|mut base| {
        if !base.path().ends_with('/') {
            let dir = format!("{}/", base.path());
            base.set_path(&dir);
        }
        base.join(path.trim_start_matches('/'))
    });
    match joined {
        Ok(url) => url.to_string(),
        Err(e) => {
            debug!("[Seo] Invalid base URL '{}': {}", site.base_url, e);
            format!("{}{}", site.base_url.trim_end_matches('/'), path)
        }
    }
}

fn website(site: &SiteSettings, url: &str) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "WebSite",
        "name": site.name,
        "url": url,
        "description": site.default_description,
    })
}

fn collection_page(site: &SiteSettings, category: ToolCategory, url: &str, catalog: &Catalog) -> Value {
    let items: Vec<Value> = catalog
        .tools()
        .iter()
        .filter(|t| t.category == category)
        .enumerate()
        .map(|(i, t)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": t.title,
                "url": absolute_url(site, &t.path()),
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "CollectionPage",
        "name": category.label(),
        "url": url,
        "isPartOf": { "@type": "WebSite", "name": site.name, "url": absolute_url(site, "/") },
        "mainEntity": { "@type": "ItemList", "itemListElement": items },
    })
}

fn software_application(tool: &Tool, url: &str) -> Value {
    let mut ld = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "SoftwareApplication",
        "name": tool.title,
        "description": tool.description,
        "url": url,
        "applicationCategory": "UtilitiesApplication",
        "operatingSystem": "Any",
        "offers": { "@type": "Offer", "price": "0", "priceCurrency": "VND" },
    });

    if !tool.faq.is_empty() {
        let questions: Vec<Value> = tool
            .faq
            .iter()
            .map(|entry| {
                json!({
                    "@type": "Question",
                    "name": entry.question,
                    "acceptedAnswer": { "@type": "Answer", "text": entry.answer },
                })
            })
            .collect();
        ld["mainEntity"] = json!({ "@type": "FAQPage", "mainEntity": questions });
    }
    ld
}

/// Metadata of the page showing `view`.
///
/// A tool id missing from `catalog` falls back to the site defaults.
pub fn compute_metadata(view: &RouteView, catalog: &Catalog, site: &SiteSettings) -> PageMetadata {
    let tool = match view {
        RouteView::Tool { id } => catalog.get(id),
        _ => None,
    };

    let (title, description, path, json_ld) = match (tool, view) {
        (Some(tool), _) => {
            let path = tool.path();
            let url = absolute_url(site, &path);
            (
                format!("{} | {}", tool.title, site.name),
                tool.description.clone(),
                path,
                software_application(tool, &url),
            )
        }
        (None, RouteView::Category { id }) => {
            let path = format!("/{}.html", id.slug());
            let url = absolute_url(site, &path);
            (
                format!("{} - {}", site.default_title, id.label()),
                site.default_description.clone(),
                path,
                collection_page(site, *id, &url, catalog),
            )
        }
        (None, _) => {
            let url = absolute_url(site, "/");
            (
                site.default_title.clone(),
                site.default_description.clone(),
                "/".to_string(),
                website(site, &url),
            )
        }
    };

    let url = absolute_url(site, &path);
    PageMetadata {
        og_title: title.clone(),
        og_description: description.clone(),
        og_url: url.clone(),
        canonical_url: url,
        title,
        description,
        json_ld,
    }
}

/// Write `metadata` into `head`. Nothing here propagates an error.
pub fn apply_metadata(metadata: &PageMetadata, head: &mut impl DocumentHead) {
    head.set_title(&metadata.title);

    let metas = [
        (MetaKey::Name("description"), &metadata.description),
        (MetaKey::Property("og:title"), &metadata.og_title),
        (MetaKey::Property("og:description"), &metadata.og_description),
        (MetaKey::Property("og:url"), &metadata.og_url),
    ];
    for (key, content) in metas {
        if let Err(e) = head.set_meta(key, content) {
            debug!("[Seo] Skipping {:?}: {}", key, e);
        }
    }

    if let Err(e) = head.set_link("canonical", &metadata.canonical_url) {
        debug!("[Seo] Skipping canonical link: {}", e);
    }

    match serde_json::to_string(&metadata.json_ld) {
        Ok(json) => head.set_json_ld(&json),
        Err(e) => error!("[Seo] Failed to serialize JSON-LD: {}", e),
    }
}
