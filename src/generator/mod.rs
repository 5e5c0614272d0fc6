//! Generator module - renders the fetched posts into static HTML files

use anyhow::Result;
use std::fs;

use tera::Context;
use walkdir::WalkDir;

use crate::cms::Client;
use crate::content::{estimate_minutes, rich_text, PostDetail, PostSummary};
use crate::helpers::{format_date_long, format_date_short, url_for};
use crate::templates::{
    Labels, NavPost, PaginationData, PostCard, PostPageData, SectionData, SiteData,
    TemplateRenderer,
};
use crate::Nebula;

/// Static site generator using the embedded Tera templates
pub struct Generator {
    app: Nebula,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(app: &Nebula) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;

        Ok(Self {
            app: app.clone(),
            renderer,
        })
    }

    /// Generate the entire site from the content service
    pub async fn generate(&self, client: &Client) -> Result<()> {
        // Ensure public directory exists
        fs::create_dir_all(&self.app.public_dir)?;

        // Copy local assets (css, images, etc.)
        self.copy_static_assets()?;

        let reference = client.master_ref().await?;
        tracing::debug!("Using master ref {}", reference);

        // Walk the listing pages until the next-page cursor runs out
        let per_page = self.app.config.per_page;
        let mut listing_pages: Vec<Vec<PostSummary>> = Vec::new();
        let mut page_num = 1;
        loop {
            let response = client.query_page(&reference, page_num, per_page).await?;
            let summaries: Vec<PostSummary> = response
                .results
                .iter()
                .map(PostSummary::from_document)
                .collect();
            listing_pages.push(summaries);

            if response.next_page.is_none() {
                break;
            }
            page_num += 1;
        }

        let posts: Vec<PostSummary> = listing_pages.iter().flatten().cloned().collect();
        tracing::info!("Loaded {} posts from the content service", posts.len());

        let site_data = self.build_site_data();
        let labels = Labels::for_language(&self.app.config.language);

        // Generate index pages (with pagination)
        self.generate_index_pages(&listing_pages, &site_data, &labels)?;

        // Generate post pages
        self.generate_post_pages(client, &reference, &posts, &site_data, &labels)
            .await?;

        Ok(())
    }

    /// Build site data for templates
    fn build_site_data(&self) -> SiteData {
        let config = &self.app.config;
        SiteData {
            title: config.title.clone(),
            subtitle: config.subtitle.clone(),
            description: config.description.clone(),
            author: config.author.clone(),
            url: config.url.clone(),
            root: config.root.clone(),
            language: config.language.clone(),
        }
    }

    /// URL of a listing page
    fn listing_url(&self, page_num: usize) -> String {
        if page_num == 1 {
            url_for(&self.app.config, "")
        } else {
            url_for(
                &self.app.config,
                &format!("{}/{}/", self.app.config.pagination_dir, page_num),
            )
        }
    }

    /// URL of a post page
    fn post_url(&self, uid: &str) -> String {
        url_for(
            &self.app.config,
            &format!("{}/{}/", self.app.config.post_dir, uid),
        )
    }

    /// Generate index pages with pagination
    fn generate_index_pages(
        &self,
        listing_pages: &[Vec<PostSummary>],
        site_data: &SiteData,
        labels: &Labels,
    ) -> Result<()> {
        let total_pages = listing_pages.len();
        let language = &self.app.config.language;

        for (i, summaries) in listing_pages.iter().enumerate() {
            let page_num = i + 1;

            let page_posts: Vec<PostCard> = summaries
                .iter()
                .map(|p| PostCard {
                    uid: p.uid.clone(),
                    title: p.title.clone(),
                    subtitle: p.subtitle.clone(),
                    author: p.author.clone(),
                    date: p
                        .date
                        .map(|d| format_date_long(&d, language))
                        .unwrap_or_default(),
                    url: self.post_url(&p.uid),
                })
                .collect();

            let pagination = PaginationData {
                current: page_num,
                total: total_pages,
                current_url: self.listing_url(page_num),
                prev_link: if page_num > 1 {
                    self.listing_url(page_num - 1)
                } else {
                    String::new()
                },
                next_link: if page_num < total_pages {
                    self.listing_url(page_num + 1)
                } else {
                    String::new()
                },
            };

            let mut context = Context::new();
            context.insert("config", site_data);
            context.insert("labels", labels);
            context.insert("page_title", "");
            context.insert("page_posts", &page_posts);
            context.insert("pagination", &pagination);

            let html = self.renderer.render("index.html", &context)?;

            let output_path = if page_num == 1 {
                self.app.public_dir.join("index.html")
            } else {
                self.app.public_dir.join(format!(
                    "{}/{}/index.html",
                    self.app.config.pagination_dir, page_num
                ))
            };

            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&output_path, html)?;
            tracing::debug!("Generated: {:?}", output_path);
        }

        Ok(())
    }

    /// Generate individual post pages
    async fn generate_post_pages(
        &self,
        client: &Client,
        reference: &str,
        posts: &[PostSummary],
        site_data: &SiteData,
        labels: &Labels,
    ) -> Result<()> {
        let language = &self.app.config.language;

        for (i, summary) in posts.iter().enumerate() {
            let document = client.get_by_uid(reference, &summary.uid).await?;
            let detail = PostDetail::from_document(&document);

            // Prev is the older neighbor in listing order, next the newer
            let prev_post = posts.get(i + 1).map(|p| NavPost {
                title: p.title.clone(),
                url: self.post_url(&p.uid),
            });
            let next_post = if i > 0 {
                posts.get(i - 1).map(|p| NavPost {
                    title: p.title.clone(),
                    url: self.post_url(&p.uid),
                })
            } else {
                None
            };

            let sections: Vec<SectionData> = detail
                .sections
                .iter()
                .map(|s| SectionData {
                    heading: s.heading.clone(),
                    body: rich_text::as_html(&s.body),
                })
                .collect();

            let post_page = PostPageData {
                title: detail.title.clone(),
                date: detail
                    .date
                    .map(|d| format_date_short(&d, language))
                    .unwrap_or_default(),
                author: detail.banner.author.clone(),
                banner_url: detail.banner.url.clone(),
                reading_minutes: estimate_minutes(&detail.sections),
                sections,
            };

            let mut context = Context::new();
            context.insert("config", site_data);
            context.insert("labels", labels);
            context.insert("page_title", &detail.title);
            context.insert("post", &post_page);
            context.insert("prev_post", &prev_post);
            context.insert("next_post", &next_post);

            let html = self.renderer.render("post.html", &context)?;

            let output_path = self
                .app
                .public_dir
                .join(&self.app.config.post_dir)
                .join(&detail.uid)
                .join("index.html");
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&output_path, html)?;
            tracing::debug!("Generated post: {:?}", output_path);
        }

        Ok(())
    }

    /// Copy static assets (css, images, etc.) to the public directory
    fn copy_static_assets(&self) -> Result<()> {
        let assets_dir = &self.app.assets_dir;
        if !assets_dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(assets_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if path.is_file() {
                let relative = path.strip_prefix(assets_dir)?;
                let dest = self.app.public_dir.join(relative);

                if let Some(parent) = dest.parent() {
                    fs::create_dir_all(parent)?;
                }

                fs::copy(path, &dest)?;
            }
        }

        Ok(())
    }
}
