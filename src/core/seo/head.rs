//! Document head abstraction
//!
//! The browser host implements [`DocumentHead`] over the live DOM;
//! [`HeadDocument`] is the in-memory version used for server-side rendering.

use crate::shared::error::{AppError, AppResult};
use html_escape::{encode_double_quoted_attribute, encode_text};

/// How a `<meta>` element is addressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaKey {
    /// `<meta name="...">`
    Name(&'static str),
    /// `<meta property="...">` (Open Graph)
    Property(&'static str),
}

impl MetaKey {
    fn attribute(&self) -> (&'static str, &'static str) {
        match self {
            MetaKey::Name(key) => ("name", key),
            MetaKey::Property(key) => ("property", key),
        }
    }
}

pub trait DocumentHead {
    fn set_title(&mut self, title: &str);

    /// Update an existing meta element; `AppError::Dom` when it is absent
    fn set_meta(&mut self, key: MetaKey, content: &str) -> AppResult<()>;

    /// Update an existing `<link rel=...>`; `AppError::Dom` when it is absent
    fn set_link(&mut self, rel: &str, href: &str) -> AppResult<()>;

    /// Create the JSON-LD script on first use, replace its content afterwards
    fn set_json_ld(&mut self, json: &str);
}

#[derive(Debug, Clone, PartialEq)]
struct Meta {
    key: MetaKey,
    content: String,
}

#[derive(Debug, Clone, PartialEq)]
struct Link {
    rel: String,
    href: String,
}

/// In-memory head holding only the elements the metadata injector manages
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadDocument {
    title: String,
    metas: Vec<Meta>,
    links: Vec<Link>,
    json_ld: Option<String>,
}

impl HeadDocument {
    /// Head as shipped in the page shell: description, Open Graph and canonical
    pub fn new() -> Self {
        let metas = [
            MetaKey::Name("description"),
            MetaKey::Property("og:title"),
            MetaKey::Property("og:description"),
            MetaKey::Property("og:url"),
        ]
        .into_iter()
        .map(|key| Meta { key, content: String::new() })
        .collect();

        Self {
            metas,
            links: vec![Link {
                rel: "canonical".to_string(),
                href: String::new(),
            }],
            ..Self::default()
        }
    }

    /// Head with no managed elements at all
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn meta(&self, key: MetaKey) -> Option<&str> {
        self.metas
            .iter()
            .find(|m| m.key == key)
            .map(|m| m.content.as_str())
    }

    pub fn link(&self, rel: &str) -> Option<&str> {
        self.links
            .iter()
            .find(|l| l.rel == rel)
            .map(|l| l.href.as_str())
    }

    pub fn json_ld(&self) -> Option<&str> {
        self.json_ld.as_deref()
    }

    /// Serialize the managed elements as HTML, one per line
    pub fn render(&self) -> String {
        let mut html = format!("<title>{}</title>\n", encode_text(&self.title));
        for meta in &self.metas {
            let (attr, key) = meta.key.attribute();
            html.push_str(&format!(
                "<meta {}=\"{}\" content=\"{}\">\n",
                attr,
                key,
                encode_double_quoted_attribute(&meta.content)
            ));
        }
        for link in &self.links {
            html.push_str(&format!(
                "<link rel=\"{}\" href=\"{}\">\n",
                encode_double_quoted_attribute(&link.rel),
                encode_double_quoted_attribute(&link.href)
            ));
        }
        if let Some(json) = &self.json_ld {
            // Script content is raw text; only a closing tag can break out
            html.push_str(&format!(
                "<script type=\"application/ld+json\">{}</script>\n",
                json.replace("</", "<\\/")
            ));
        }
        html
    }
}

impl DocumentHead for HeadDocument {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_meta(&mut self, key: MetaKey, content: &str) -> AppResult<()> {
        let meta = self
            .metas
            .iter_mut()
            .find(|m| m.key == key)
            .ok_or_else(|| AppError::Dom(format!("meta {:?} not found", key)))?;
        meta.content = content.to_string();
        Ok(())
    }

    fn set_link(&mut self, rel: &str, href: &str) -> AppResult<()> {
        let link = self
            .links
            .iter_mut()
            .find(|l| l.rel == rel)
            .ok_or_else(|| AppError::Dom(format!("link rel={} not found", rel)))?;
        link.href = href.to_string();
        Ok(())
    }

    fn set_json_ld(&mut self, json: &str) {
        self.json_ld = Some(json.to_string());
    }
}
