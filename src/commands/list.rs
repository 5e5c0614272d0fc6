//! List the posts known to the content service

use anyhow::{Context, Result};

use crate::cms::Client;
use crate::content::PostSummary;
use crate::Nebula;

/// Print every post the content service returns, in listing order
pub async fn run(app: &Nebula) -> Result<()> {
    if app.config.cms.api_url.is_empty() {
        anyhow::bail!("no content service configured; set cms.api_url in _config.yml");
    }

    let client =
        Client::new(&app.config.cms).context("failed to build the content service client")?;
    let reference = client.master_ref().await?;

    let mut posts: Vec<PostSummary> = Vec::new();
    let mut page = 1;
    loop {
        let response = client
            .query_page(&reference, page, app.config.per_page)
            .await?;
        posts.extend(response.results.iter().map(PostSummary::from_document));

        if response.next_page.is_none() {
            break;
        }
        page += 1;
    }

    println!("Posts ({}):", posts.len());
    for post in posts {
        let date = post
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "unpublished".to_string());
        println!("  {} - {} [{}]", date, post.title, post.uid);
    }

    Ok(())
}
