//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::Nebula;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    // Create directory structure
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("static/css"))?;
    fs::create_dir_all(target_dir.join("static/images"))?;

    // Create default _config.yml
    let config_content = r#"# Nebula Configuration

# Site
title: Nebula
subtitle: ''
description: ''
author: John Doe
language: en

# URL
url: http://example.com
root: /

# Directory
public_dir: public
assets_dir: static
post_dir: post
pagination_dir: page

# Pagination
per_page: 3

# Content service
cms:
  api_url: ''
  document_type: post
  access_token:
  timeout_secs: 30
"#;

    fs::write(target_dir.join("_config.yml"), config_content)?;

    // Create a starter stylesheet
    let stylesheet = r#"body {
  margin: 0;
  font-family: sans-serif;
  color: #1a1a1a;
}

.container {
  max-width: 45rem;
  margin: 0 auto;
  padding: 0 1rem;
}

.post-card {
  display: block;
  text-decoration: none;
  color: inherit;
  margin: 2rem 0;
}

.post-info {
  display: flex;
  gap: 1rem;
  font-size: 0.875rem;
  color: #666;
}

.post-info address {
  font-style: normal;
}

img.banner {
  width: 100%;
}
"#;

    fs::write(target_dir.join("static/css/style.css"), stylesheet)?;

    Ok(())
}

/// Run the init command with an existing Nebula instance
pub fn run(app: &Nebula) -> Result<()> {
    init_site(&app.base_dir)
}
