//! Rich-text fields as delivered by the content service
//!
//! A rich-text field is an ordered sequence of blocks. Each block has a
//! type (heading levels, paragraph, list items, preformatted), a text
//! payload and a list of inline formatting ranges addressed by character
//! offsets into that text.

use serde::{Deserialize, Serialize};

/// One rich-text block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// Block type (heading1..heading6, paragraph, list-item, o-list-item,
    /// preformatted)
    #[serde(rename = "type", default = "default_block_type")]
    pub kind: String,

    /// Plain text of the block
    #[serde(default)]
    pub text: String,

    /// Inline formatting ranges
    #[serde(default)]
    pub spans: Vec<InlineSpan>,
}

/// An inline formatting range within a block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineSpan {
    /// Start offset, in characters
    pub start: usize,
    /// End offset (exclusive), in characters
    pub end: usize,
    /// Formatting kind (strong, em, hyperlink)
    #[serde(rename = "type")]
    pub kind: String,
    /// Extra payload, e.g. the link target for hyperlinks
    #[serde(default)]
    pub data: Option<InlineData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineData {
    #[serde(default)]
    pub url: Option<String>,
}

fn default_block_type() -> String {
    "paragraph".to_string()
}

impl Span {
    /// Create a plain paragraph block
    pub fn paragraph(text: &str) -> Self {
        Self {
            kind: "paragraph".to_string(),
            text: text.to_string(),
            spans: Vec::new(),
        }
    }
}

/// Join the text of all blocks into one plain string
pub fn as_text(blocks: &[Span]) -> String {
    blocks
        .iter()
        .map(|b| b.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render blocks to HTML
///
/// Text content is HTML-escaped, inline ranges become `<strong>`, `<em>`
/// and `<a>` elements, and consecutive list items are grouped into a
/// single `<ul>` or `<ol>`.
pub fn as_html(blocks: &[Span]) -> String {
    let mut out = String::new();
    let mut open_list: Option<&str> = None;

    for block in blocks {
        let wanted_list = match block.kind.as_str() {
            "list-item" => Some("ul"),
            "o-list-item" => Some("ol"),
            _ => None,
        };

        if open_list != wanted_list {
            if let Some(tag) = open_list {
                out.push_str(&format!("</{}>", tag));
            }
            if let Some(tag) = wanted_list {
                out.push_str(&format!("<{}>", tag));
            }
            open_list = wanted_list;
        }

        let tag = match block.kind.as_str() {
            "heading1" => "h1",
            "heading2" => "h2",
            "heading3" => "h3",
            "heading4" => "h4",
            "heading5" => "h5",
            "heading6" => "h6",
            "preformatted" => "pre",
            "list-item" | "o-list-item" => "li",
            _ => "p",
        };

        let inner = render_inline(&block.text, &block.spans);
        out.push_str(&format!("<{}>{}</{}>", tag, inner, tag));
    }

    if let Some(tag) = open_list {
        out.push_str(&format!("</{}>", tag));
    }

    out
}

/// Apply inline formatting ranges to a block's text
fn render_inline(text: &str, inline: &[InlineSpan]) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();

    for i in 0..=chars.len() {
        // Close tags before opening new ones at the same offset
        for span in inline.iter().rev() {
            if span.end == i {
                out.push_str(close_tag(span));
            }
        }
        for span in inline {
            if span.start == i {
                out.push_str(&open_tag(span));
            }
        }
        if i < chars.len() {
            push_escaped(&mut out, chars[i]);
        }
    }

    out
}

fn open_tag(span: &InlineSpan) -> String {
    match span.kind.as_str() {
        "strong" => "<strong>".to_string(),
        "em" => "<em>".to_string(),
        "hyperlink" => {
            let url = span
                .data
                .as_ref()
                .and_then(|d| d.url.as_deref())
                .unwrap_or("");
            format!(r#"<a href="{}">"#, escape(url))
        }
        _ => String::new(),
    }
}

fn close_tag(span: &InlineSpan) -> &'static str {
    match span.kind.as_str() {
        "strong" => "</strong>",
        "em" => "</em>",
        "hyperlink" => "</a>",
        _ => "",
    }
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        _ => out.push(c),
    }
}

/// Escape HTML special characters
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        push_escaped(&mut out, c);
    }
    out
}
