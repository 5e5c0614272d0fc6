//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub public_dir: String,
    pub assets_dir: String,
    pub post_dir: String,
    pub pagination_dir: String,

    // Pagination
    pub per_page: u32,

    // Content service
    pub cms: CmsConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

/// Content service connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CmsConfig {
    /// Base URL of the content service API
    pub api_url: String,
    /// Document type to query for posts
    pub document_type: String,
    /// Optional access token, sent with every request
    pub access_token: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl SiteConfig {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Nebula".to_string(),
            subtitle: String::new(),
            description: String::new(),
            author: String::new(),
            language: "en".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            public_dir: "public".to_string(),
            assets_dir: "static".to_string(),
            post_dir: "post".to_string(),
            pagination_dir: "page".to_string(),

            per_page: 3,

            cms: CmsConfig::default(),

            extra: HashMap::new(),
        }
    }
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            document_type: "post".to_string(),
            access_token: None,
            timeout_secs: 30,
        }
    }
}
