//! Static site build command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use masader_content::load_site;
use masader_render::{BuildConfig, StaticBuilder};

/// Run the build command.
pub async fn run(config_path: &Path, output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    tracing::info!("Building static site...");

    let (site_config, documents) = load_site(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    let mut config = BuildConfig::from_settings(&site_config.build);
    if let Some(output) = output {
        config.output_dir = output;
    }
    if let Some(minify) = minify {
        config.minify = minify;
    }

    let result = StaticBuilder::new(site_config.compose(), documents, config)?
        .build()
        .await?;

    tracing::info!("Built {} pages in {}ms", result.pages, result.duration_ms);
    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
