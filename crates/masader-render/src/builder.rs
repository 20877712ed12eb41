//! Static site builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use masader_content::{BuildSettings, Document, Site};

use crate::assets::AssetPipeline;
use crate::site::{Page, RenderOptions, SiteRenderer};
use crate::templates::RenderError;

/// Configuration for building a static site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Output directory
    pub output_dir: PathBuf,

    /// Minify CSS output
    pub minify: bool,

    /// Base URL for the site
    pub base_url: String,

    /// Extra stylesheets copied into `assets/`
    pub styles: Vec<PathBuf>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
            minify: true,
            base_url: "/".to_string(),
            styles: vec![],
        }
    }
}

impl BuildConfig {
    /// Build configuration from the `[build]` section of `site.toml`.
    pub fn from_settings(settings: &BuildSettings) -> Self {
        let mut base_url = settings.base_url.clone();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Self {
            output_dir: settings.output.clone(),
            minify: settings.minify,
            base_url,
            styles: settings.styles.iter().map(PathBuf::from).collect(),
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages generated
    pub pages: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read {0}")]
    ReadError(String),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Static site builder.
pub struct StaticBuilder {
    config: BuildConfig,
    renderer: SiteRenderer,
}

impl StaticBuilder {
    /// Create a builder for the composed site and its documents.
    pub fn new(
        site: Site,
        documents: Vec<Document>,
        config: BuildConfig,
    ) -> Result<Self, BuildError> {
        let options = RenderOptions {
            base_url: config.base_url.clone(),
            styles: config
                .styles
                .iter()
                .map(|s| AssetPipeline::style_href(&config.base_url, s))
                .collect(),
            live_reload: false,
        };

        Ok(Self {
            renderer: SiteRenderer::new(site, documents, options)?,
            config,
        })
    }

    /// Build the static site.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let pages = self.renderer.render_all()?;
        for page in &pages {
            self.write_page(page)?;
        }

        self.generate_assets()?;
        self.generate_sitemap(&pages)?;

        let duration = start.elapsed();
        tracing::debug!("Rendered {} pages in {:?}", pages.len(), duration);

        Ok(BuildResult {
            pages: pages.len(),
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// `/` -> `dist/index.html`, `/return-policy/` -> `dist/return-policy/index.html`.
    fn output_path(&self, url_path: &str) -> PathBuf {
        let relative = url_path
            .strip_prefix(self.config.base_url.as_str())
            .unwrap_or(url_path)
            .trim_matches('/');

        if relative.is_empty() {
            self.config.output_dir.join("index.html")
        } else {
            self.config.output_dir.join(relative).join("index.html")
        }
    }

    fn write_page(&self, page: &Page) -> Result<(), BuildError> {
        let path = self.output_path(&page.path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
        }

        fs::write(&path, &page.html).map_err(|e| BuildError::WriteError(e.to_string()))
    }

    /// Generate static assets.
    fn generate_assets(&self) -> Result<(), BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;

        let css = AssetPipeline::generate_css();
        let css = if self.config.minify {
            AssetPipeline::minify_css(&css).unwrap_or_else(|e| {
                tracing::warn!("Keeping unminified CSS: {}", e);
                css
            })
        } else {
            css
        };
        fs::write(assets_dir.join("main.css"), css)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        fs::write(assets_dir.join("main.js"), AssetPipeline::generate_js())
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        for source_path in &self.config.styles {
            copy_stylesheet(source_path, &assets_dir)?;
        }

        Ok(())
    }

    /// Generate sitemap and robots.txt.
    fn generate_sitemap(&self, pages: &[Page]) -> Result<(), BuildError> {
        let urls: Vec<String> = pages
            .iter()
            .map(|page| format!("  <url>\n    <loc>{}</loc>\n  </url>", page.path))
            .collect();

        let sitemap = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{}
</urlset>"#,
            urls.join("\n")
        );

        fs::write(self.config.output_dir.join("sitemap.xml"), sitemap)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let robots = format!(
            "User-agent: *\nAllow: /\nSitemap: {}sitemap.xml",
            self.config.base_url
        );
        fs::write(self.config.output_dir.join("robots.txt"), robots)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }
}

fn copy_stylesheet(source_path: &Path, assets_dir: &Path) -> Result<(), BuildError> {
    if !source_path.exists() {
        tracing::warn!("Stylesheet not found: {}", source_path.display());
        return Ok(());
    }

    let filename = source_path
        .file_name()
        .and_then(|f| f.to_str())
        .unwrap_or("style.css");
    let content = fs::read_to_string(source_path)
        .map_err(|e| BuildError::ReadError(format!("{}: {}", source_path.display(), e)))?;
    fs::write(assets_dir.join(filename), content)
        .map_err(|e| BuildError::WriteError(e.to_string()))?;

    tracing::info!("Copied stylesheet from {}", source_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use masader_content::{load_documents, SiteConfig};
    use tempfile::tempdir;

    fn builder_for(out: &Path, content_dir: &Path, minify: bool) -> StaticBuilder {
        let documents = load_documents(content_dir).unwrap();
        StaticBuilder::new(
            SiteConfig::default().compose(),
            documents,
            BuildConfig {
                output_dir: out.to_path_buf(),
                minify,
                ..Default::default()
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn builds_home_and_return_policy() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        let result = builder_for(&out, &temp.path().join("content"), true)
            .build()
            .await
            .unwrap();

        assert_eq!(result.pages, 2);
        assert!(out.join("index.html").exists());
        assert!(out.join("return-policy/index.html").exists());
        assert!(out.join("assets/main.css").exists());
        assert!(out.join("assets/main.js").exists());
        assert!(out.join("robots.txt").exists());
    }

    #[tokio::test]
    async fn writes_content_documents() {
        let temp = tempdir().unwrap();
        let content = temp.path().join("content");
        let out = temp.path().join("dist");
        fs::create_dir_all(&content).unwrap();
        fs::write(
            content.join("faq.md"),
            "---\ntitle: الأسئلة الشائعة\n---\n\n## كم تستغرق مدة الاستقدام؟\n\nمن 30 إلى 60 يوماً.",
        )
        .unwrap();

        let result = builder_for(&out, &content, true).build().await.unwrap();

        assert_eq!(result.pages, 3);
        let html = fs::read_to_string(out.join("faq/index.html")).unwrap();
        assert!(html.contains("من 30 إلى 60 يوماً."));
    }

    #[tokio::test]
    async fn unsafe_slugs_never_reach_the_output_dir() {
        let temp = tempdir().unwrap();
        let content = temp.path().join("content");
        let out = temp.path().join("site").join("dist");
        fs::create_dir_all(&content).unwrap();
        fs::write(content.join("a.md"), "---\ntitle: a\nslug: ../escaped\n---\nA").unwrap();

        assert!(load_documents(&content).is_err());

        let mut documents = load_documents(&temp.path().join("missing")).unwrap();
        documents.push(
            masader_content::parse_document("---\ntitle: b\nslug: /\n---\nB").unwrap(),
        );
        let result = StaticBuilder::new(
            SiteConfig::default().compose(),
            documents,
            BuildConfig {
                output_dir: out.clone(),
                ..Default::default()
            },
        );

        assert!(matches!(
            result,
            Err(BuildError::Render(RenderError::InvalidSlug(_)))
        ));
        assert!(!out.exists());
        assert!(!temp.path().join("site").join("escaped").exists());
    }

    #[tokio::test]
    async fn generates_sitemap() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        builder_for(&out, &temp.path().join("content"), false)
            .build()
            .await
            .unwrap();

        let sitemap = fs::read_to_string(out.join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("<loc>/</loc>"));
        assert!(sitemap.contains("<loc>/return-policy/</loc>"));
    }

    #[tokio::test]
    async fn minify_flag_controls_css() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        builder_for(&out, &temp.path().join("content"), false)
            .build()
            .await
            .unwrap();

        let css = fs::read_to_string(out.join("assets/main.css")).unwrap();
        assert_eq!(css, AssetPipeline::generate_css());
    }

    #[tokio::test]
    async fn copies_extra_stylesheets() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");
        let style = temp.path().join("brand.css");
        fs::write(&style, ".brand { color: red; }").unwrap();

        let builder = StaticBuilder::new(
            SiteConfig::default().compose(),
            vec![],
            BuildConfig {
                output_dir: out.clone(),
                styles: vec![style],
                ..Default::default()
            },
        )
        .unwrap();
        builder.build().await.unwrap();

        assert!(out.join("assets/brand.css").exists());
        let html = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(html.contains(r#"<link rel="stylesheet" href="/assets/brand.css">"#));
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let config = BuildConfig::from_settings(&BuildSettings {
            base_url: "/site".to_string(),
            ..Default::default()
        });

        assert_eq!(config.base_url, "/site/");
        assert_eq!(config.output_dir, PathBuf::from("dist"));
    }
}
