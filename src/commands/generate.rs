//! Generate static files

use anyhow::{Context, Result};

use crate::cms::Client;
use crate::generator::Generator;
use crate::Nebula;

/// Fetch posts from the content service and generate the static site
pub async fn run(app: &Nebula) -> Result<()> {
    let start = std::time::Instant::now();

    if app.config.cms.api_url.is_empty() {
        anyhow::bail!("no content service configured; set cms.api_url in _config.yml");
    }

    let client =
        Client::new(&app.config.cms).context("failed to build the content service client")?;

    let generator = Generator::new(app)?;
    generator
        .generate(&client)
        .await
        .context("site generation failed")?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}
