//! nebula: a static blog generator backed by a headless CMS
//!
//! This crate renders a blog as static HTML. Posts live in a remote
//! content service; they are fetched at generation time, mapped into
//! view models and rendered through embedded Tera templates.

pub mod cms;
pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::Path;

/// The main Nebula application
#[derive(Clone)]
pub struct Nebula {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
    /// Static assets directory
    pub assets_dir: std::path::PathBuf,
}

impl Nebula {
    /// Create a new Nebula instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let public_dir = base_dir.join(&config.public_dir);
        let assets_dir = base_dir.join(&config.assets_dir);

        Ok(Self {
            config,
            base_dir,
            public_dir,
            assets_dir,
        })
    }

    /// Generate the static site from the content service
    pub async fn generate(&self) -> Result<()> {
        commands::generate::run(self).await
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
