//! Wire types for the content service API

use serde::Deserialize;

use crate::content::rich_text::Span;

/// Repository metadata returned by the API root
#[derive(Debug, Clone, Deserialize)]
pub struct ApiInfo {
    #[serde(default)]
    pub refs: Vec<ApiRef>,
}

/// One repository ref
#[derive(Debug, Clone, Deserialize)]
pub struct ApiRef {
    pub id: String,
    #[serde(rename = "ref")]
    pub reference: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "isMasterRef", default)]
    pub is_master_ref: bool,
}

/// One page of query results
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
    /// Opaque cursor to the next page, null on the last page
    pub next_page: Option<String>,
    #[serde(default)]
    pub results: Vec<Document>,
}

/// A structured record representing one post
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(rename = "type")]
    pub doc_type: String,
    #[serde(default)]
    pub first_publication_date: Option<String>,
    #[serde(default)]
    pub data: DocumentData,
}

/// The typed payload of a post document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentData {
    #[serde(default)]
    pub title: Vec<Span>,
    #[serde(default)]
    pub subtitle: Vec<Span>,
    #[serde(default)]
    pub author: Vec<Span>,
    #[serde(default)]
    pub banner: BannerData,
    #[serde(default)]
    pub content: Vec<SectionData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BannerData {
    #[serde(default)]
    pub url: Option<String>,
}

/// One content section as stored in the document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectionData {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub body: Vec<Span>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_document() {
        let json = r#"{
            "id": "XyZ",
            "type": "post",
            "data": {}
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.id, "XyZ");
        assert!(doc.uid.is_none());
        assert!(doc.first_publication_date.is_none());
        assert!(doc.data.title.is_empty());
        assert!(doc.data.content.is_empty());
        assert!(doc.data.banner.url.is_none());
    }

    #[test]
    fn test_deserialize_search_response() {
        let json = r#"{
            "page": 1,
            "total_pages": 2,
            "next_page": "https://cms.example.com/search?page=2",
            "results": [
                {
                    "id": "a",
                    "uid": "first-post",
                    "type": "post",
                    "first_publication_date": "2021-03-15T19:25:28+0000",
                    "data": {
                        "title": [{"type": "heading1", "text": "First post", "spans": []}],
                        "content": [
                            {"heading": "Intro", "body": [{"type": "paragraph", "text": "hello", "spans": []}]}
                        ]
                    }
                }
            ]
        }"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.page, 1);
        assert_eq!(response.results.len(), 1);
        assert!(response.next_page.is_some());

        let doc = &response.results[0];
        assert_eq!(doc.uid.as_deref(), Some("first-post"));
        assert_eq!(doc.data.title[0].text, "First post");
        assert_eq!(doc.data.content[0].heading, "Intro");
        assert_eq!(doc.data.content[0].body[0].text, "hello");
    }

    #[test]
    fn test_deserialize_refs() {
        let json = r#"{
            "refs": [
                {"id": "master", "ref": "YpJ1xBEAACQAl0Sb", "label": "Master", "isMasterRef": true},
                {"id": "draft", "ref": "abc", "label": "Draft"}
            ]
        }"#;
        let info: ApiInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.refs.len(), 2);
        assert!(info.refs[0].is_master_ref);
        assert!(!info.refs[1].is_master_ref);
        assert_eq!(info.refs[0].reference, "YpJ1xBEAACQAl0Sb");
    }
}
