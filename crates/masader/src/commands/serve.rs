//! Preview server command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use masader_contact::handler_from_settings;
use masader_content::SiteConfig;
use masader_server::{ContactApi, PreviewServer, PreviewServerConfig};

/// Run the serve command.
pub async fn run(config_path: &Path, port: u16, dir: PathBuf, open: bool) -> Result<()> {
    if !dir.exists() {
        anyhow::bail!(
            "Directory not found: {}. Run 'masader build' first.",
            dir.display()
        );
    }

    let site_config = SiteConfig::load(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    let handler = handler_from_settings(&site_config.submission)
        .context("Invalid [submission] settings")?;
    let api = ContactApi::new(site_config.contact.services, handler);

    let config = PreviewServerConfig {
        dir,
        base_url: site_config.build.base_url,
        host: site_config.server.host,
        port,
        open,
    };

    PreviewServer::new(config, api).start().await?;

    Ok(())
}
