//! Write a starter `site.toml` and content directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing site...");

    let written = scaffold(config_path, yes)?;
    for path in &written {
        tracing::info!("Created {}", path.display());
    }

    if written.is_empty() {
        tracing::warn!("Nothing written. Use --yes to overwrite existing files.");
        return Ok(());
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'masader dev' to start the development server.");

    Ok(())
}

/// Write the starter files next to `config_path`, skipping existing files unless `overwrite`.
fn scaffold(config_path: &Path, overwrite: bool) -> Result<Vec<PathBuf>> {
    let root = config_path.parent().unwrap_or(Path::new(""));
    let content_dir = root.join("content");

    if !content_dir.exists() {
        fs::create_dir_all(&content_dir).context("Failed to create content directory")?;
    }

    let files = [
        (config_path.to_path_buf(), DEFAULT_CONFIG),
        (content_dir.join("faq.md"), DEFAULT_FAQ),
    ];

    let mut written = Vec::new();
    for (path, contents) in files {
        if path.exists() && !overwrite {
            tracing::debug!("Keeping existing {}", path.display());
            continue;
        }
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        written.push(path);
    }

    Ok(written)
}

const DEFAULT_CONFIG: &str = r#"# Masader site configuration
#
# Every section has built-in Arabic content. Uncomment and edit any field to
# override it.

[business]
short_name = "مكتب مصادر"
hotline = "920012345"
mobile = "+966 55 123 4567"
# emails = ["info@masader.sa"]
# linkedin_url = "https://www.linkedin.com/company/masader"

# [hero]
# title = "استقدام العمالة المنزلية بثقة وسهولة"

# [[contact.services]]
# value = "driver"
# label = "سائق خاص"

[build]
output = "dist"
content_dir = "content"
base_url = "/"
minify = true

[server]
host = "127.0.0.1"
port = 7777

[submission]
# simulated, log or webhook
handler = "simulated"
delay_ms = 900
# webhook_url = "https://example.com/hooks/contact"
"#;

const DEFAULT_FAQ: &str = r#"---
title: الأسئلة الشائعة
description: إجابات عن أكثر الأسئلة شيوعاً حول خدمات الاستقدام.
order: 20
---

## كم تستغرق مدة الاستقدام؟

تختلف المدة حسب الدولة ونوع المهنة، وعادةً ما تتراوح بين ٣٠ و٦٠ يوماً.

## كيف أتواصل معكم؟

اتصل بنا على الرقم الموحد [{{ business.hotline }}]({{ business.hotline | tel }}) أو راسلنا عبر {{ business.emails | first }}.
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use masader_content::{load_site, SiteConfig, SubmissionKind};
    use tempfile::tempdir;

    #[test]
    fn starter_config_parses() {
        let config = SiteConfig::from_toml(DEFAULT_CONFIG).unwrap();

        assert_eq!(config.server.port, 7777);
        assert_eq!(config.submission.handler, SubmissionKind::Simulated);
        assert_eq!(config.business.hotline, "920012345");
    }

    #[test]
    fn scaffold_writes_config_and_content() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("site.toml");

        let written = scaffold(&config_path, false).unwrap();

        assert_eq!(written.len(), 2);
        assert!(config_path.exists());
        assert!(temp.path().join("content/faq.md").exists());
    }

    #[test]
    fn scaffold_keeps_existing_files() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("site.toml");
        fs::write(&config_path, "[hero]\n").unwrap();

        let written = scaffold(&config_path, false).unwrap();

        assert_eq!(written, vec![temp.path().join("content").join("faq.md")]);
        assert_eq!(fs::read_to_string(&config_path).unwrap(), "[hero]\n");

        let written = scaffold(&config_path, true).unwrap();
        assert_eq!(written.len(), 2);
    }

    #[test]
    fn starter_faq_loads() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("site.toml");
        scaffold(&config_path, false).unwrap();

        let content = temp.path().join("content");
        fs::write(
            &config_path,
            format!("[build]\ncontent_dir = {:?}\n", content.display().to_string()),
        )
        .unwrap();
        let (_, documents) = load_site(&config_path).unwrap();

        assert!(documents.iter().any(|d| d.slug() == "faq"));
    }
}
