//! Built-in blog templates using Tera template engine
//!
//! All templates are embedded directly in the binary, so a generated
//! site needs no theme directory on disk.

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

/// Template renderer with the embedded blog theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Disable autoescaping for HTML templates since section bodies
        // arrive as pre-rendered (and already escaped) HTML
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("blog/layout.html")),
            ("index.html", include_str!("blog/index.html")),
            ("post.html", include_str!("blog/post.html")),
            // Partials
            (
                "partials/head.html",
                include_str!("blog/partials/head.html"),
            ),
            (
                "partials/header.html",
                include_str!("blog/partials/header.html"),
            ),
            (
                "partials/footer.html",
                include_str!("blog/partials/footer.html"),
            ),
            (
                "partials/pager.html",
                include_str!("blog/partials/pager.html"),
            ),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub author: String,
    pub url: String,
    pub root: String,
    pub language: String,
}

/// One post card on a listing page
#[derive(Debug, Clone, Serialize)]
pub struct PostCard {
    pub uid: String,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub date: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaginationData {
    pub current: usize,
    pub total: usize,
    pub current_url: String,
    pub prev_link: String,
    pub next_link: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavPost {
    pub title: String,
    pub url: String,
}

/// One rendered content section of a post
#[derive(Debug, Clone, Serialize)]
pub struct SectionData {
    pub heading: String,
    pub body: String,
}

/// The full post page context
#[derive(Debug, Clone, Serialize)]
pub struct PostPageData {
    pub title: String,
    pub date: String,
    pub author: String,
    pub banner_url: String,
    pub reading_minutes: usize,
    pub sections: Vec<SectionData>,
}

/// UI strings in the site's configured language
#[derive(Debug, Clone, Serialize)]
pub struct Labels {
    pub load_more: String,
    pub newer: String,
}

impl Labels {
    pub fn for_language(language: &str) -> Self {
        if language.eq_ignore_ascii_case("pt-br") || language.eq_ignore_ascii_case("pt") {
            Self {
                load_more: "Carregar mais posts".to_string(),
                newer: "Posts mais recentes".to_string(),
            }
        } else {
            Self {
                load_more: "Load more posts".to_string(),
                newer: "Newer posts".to_string(),
            }
        }
    }
}
