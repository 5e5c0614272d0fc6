//! Post view models
//!
//! These are the display shapes the generator renders from. Each one is
//! produced fresh from a raw document on every build; nothing here is
//! mutated or kept across requests.

use chrono::{DateTime, FixedOffset};

use super::rich_text::{self, Span};
use crate::cms::Document;

/// A post as shown on the listing page
#[derive(Debug, Clone, PartialEq)]
pub struct PostSummary {
    /// Opaque identifier assigned by the content service
    pub uid: String,

    /// Publication timestamp, absent for unpublished documents
    pub date: Option<DateTime<FixedOffset>>,

    /// Post title
    pub title: String,

    /// Post subtitle
    pub subtitle: String,

    /// Author name
    pub author: String,
}

/// Banner image of a post
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Banner {
    /// Image URL
    pub url: String,
    /// Author credited next to the banner
    pub author: String,
}

/// One content section of a post
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Section heading
    pub heading: String,
    /// Section body as rich-text blocks
    pub body: Vec<Span>,
}

/// A fully loaded post
#[derive(Debug, Clone, PartialEq)]
pub struct PostDetail {
    /// Opaque identifier assigned by the content service
    pub uid: String,

    /// Publication timestamp, absent for unpublished documents
    pub date: Option<DateTime<FixedOffset>>,

    /// Post title
    pub title: String,

    /// Banner image
    pub banner: Banner,

    /// Ordered content sections
    pub sections: Vec<Section>,
}

impl PostSummary {
    /// Build a listing record from a raw document
    pub fn from_document(doc: &Document) -> Self {
        Self {
            uid: document_uid(doc),
            date: publication_date(doc),
            title: rich_text::as_text(&doc.data.title),
            subtitle: rich_text::as_text(&doc.data.subtitle),
            author: rich_text::as_text(&doc.data.author),
        }
    }
}

impl PostDetail {
    /// Build the full post view from a raw document
    pub fn from_document(doc: &Document) -> Self {
        Self {
            uid: document_uid(doc),
            date: publication_date(doc),
            title: rich_text::as_text(&doc.data.title),
            banner: Banner {
                url: doc.data.banner.url.clone().unwrap_or_default(),
                author: rich_text::as_text(&doc.data.author),
            },
            sections: doc
                .data
                .content
                .iter()
                .map(|section| Section {
                    heading: section.heading.clone(),
                    body: section.body.clone(),
                })
                .collect(),
        }
    }
}

fn document_uid(doc: &Document) -> String {
    doc.uid.clone().unwrap_or_else(|| doc.id.clone())
}

fn publication_date(doc: &Document) -> Option<DateTime<FixedOffset>> {
    doc.first_publication_date
        .as_deref()
        .and_then(parse_publication_date)
}

/// Parse the service's timestamp format, e.g. "2021-03-15T19:25:28+0000"
pub fn parse_publication_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z")
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
}
