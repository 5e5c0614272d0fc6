//! HTTP client for the content service

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

use crate::cms::document::{ApiInfo, Document, SearchResponse};
use crate::config::CmsConfig;

/// Errors returned by the content service client
#[derive(Error, Debug)]
pub enum CmsError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("content service returned {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error("repository has no master ref")]
    MissingMasterRef,

    #[error("document not found: {uid}")]
    NotFound { uid: String },
}

pub type Result<T> = std::result::Result<T, CmsError>;

/// Client for a Prismic-style content repository
///
/// All queries go through the repository's `documents/search` endpoint,
/// scoped to a ref obtained from the repository metadata.
pub struct Client {
    http: reqwest::Client,
    api_url: String,
    document_type: String,
    access_token: Option<String>,
}

impl Client {
    /// Create a client from the site's content service settings
    pub fn new(config: &CmsConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            document_type: config.document_type.clone(),
            access_token: config.access_token.clone(),
        })
    }

    /// Fetch repository metadata and return the master ref
    pub async fn master_ref(&self) -> Result<String> {
        let info: ApiInfo = self.get_json(&self.api_url, &[]).await?;

        info.refs
            .into_iter()
            .find(|r| r.is_master_ref)
            .map(|r| r.reference)
            .ok_or(CmsError::MissingMasterRef)
    }

    /// Query one page of post documents
    pub async fn query_page(
        &self,
        reference: &str,
        page: u32,
        page_size: u32,
    ) -> Result<SearchResponse> {
        let url = format!("{}/documents/search", self.api_url);
        let predicate = format!(r#"[[at(document.type,"{}")]]"#, self.document_type);
        let page = page.to_string();
        let page_size = page_size.to_string();

        self.get_json(
            &url,
            &[
                ("ref", reference),
                ("q", predicate.as_str()),
                ("pageSize", page_size.as_str()),
                ("page", page.as_str()),
            ],
        )
        .await
    }

    /// Look up a single document by its uid
    pub async fn get_by_uid(&self, reference: &str, uid: &str) -> Result<Document> {
        let url = format!("{}/documents/search", self.api_url);
        let predicate = format!(r#"[[at(my.{}.uid,"{}")]]"#, self.document_type, uid);

        let response: SearchResponse = self
            .get_json(&url, &[("ref", reference), ("q", predicate.as_str())])
            .await?;

        response
            .results
            .into_iter()
            .next()
            .ok_or_else(|| CmsError::NotFound {
                uid: uid.to_string(),
            })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        tracing::debug!("GET {}", url);

        let mut request = self.http.get(url).query(params);
        if let Some(token) = &self.access_token {
            request = request.query(&[("access_token", token.as_str())]);
        }

        let response = request.send().await?;
        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(CmsError::Status {
                status: response.status(),
                url: url.to_string(),
            });
        }

        Ok(response.json().await?)
    }
}
