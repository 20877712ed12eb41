//! Development server command.

use std::path::Path;

use anyhow::{Context, Result};
use masader_content::SiteConfig;
use masader_server::{DevServer, DevServerConfig};

/// Run the dev server.
pub async fn run(config_path: &Path, port: Option<u16>, open: bool) -> Result<()> {
    let settings = SiteConfig::load(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?
        .server;
    let port = port.unwrap_or(settings.port);

    tracing::info!("Starting development server on port {}", port);

    let config = DevServerConfig {
        config_path: config_path.to_path_buf(),
        host: settings.host,
        port,
        open,
    };

    DevServer::new(config).start().await?;

    Ok(())
}
