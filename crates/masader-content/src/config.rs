//! `site.toml` loading and the page-level composition root.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::document::{load_documents, Document, DocumentError};
use crate::sections::{
    AboutConfig, Business, ContactConfig, FooterConfig, HeaderConfig, HeroConfig, ServicesConfig,
};

/// Errors raised while loading site content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Static build settings (`[build]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSettings {
    pub output: PathBuf,
    pub content_dir: PathBuf,
    pub minify: bool,
    pub base_url: String,
    /// Extra stylesheets copied into `assets/` and linked from every page
    pub styles: Vec<String>,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            output: PathBuf::from("dist"),
            content_dir: PathBuf::from("content"),
            minify: true,
            base_url: "/".to_string(),
            styles: vec![],
        }
    }
}

/// HTTP server settings (`[server]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7777,
        }
    }
}

/// Which submission handler receives contact requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionKind {
    /// Wait for `delay_ms` and report success
    #[default]
    Simulated,
    /// Write the request to the log
    Log,
    /// POST the request as JSON to `webhook_url`
    Webhook,
}

/// Contact submission settings (`[submission]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionSettings {
    pub handler: SubmissionKind,
    pub delay_ms: u64,
    pub webhook_url: Option<String>,
}

impl Default for SubmissionSettings {
    fn default() -> Self {
        Self {
            handler: SubmissionKind::Simulated,
            delay_ms: 900,
            webhook_url: None,
        }
    }
}

/// Everything `site.toml` can configure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub business: Business,
    pub header: HeaderConfig,
    pub hero: HeroConfig,
    pub services: ServicesConfig,
    pub about: AboutConfig,
    pub contact: ContactConfig,
    pub footer: FooterConfig,
    pub build: BuildSettings,
    pub server: ServerSettings,
    pub submission: SubmissionSettings,
}

/// Sections after the business data has been wired in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Site {
    pub business: Business,
    pub header: HeaderConfig,
    pub hero: HeroConfig,
    pub services: ServicesConfig,
    pub about: AboutConfig,
    pub contact: ContactConfig,
    pub footer: FooterConfig,
}

impl SiteConfig {
    /// Load configuration from `path` if it exists, defaults otherwise.
    ///
    /// A file that exists but is malformed is an error.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        if !path.exists() {
            tracing::debug!("{} not found, using default site content", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ContentError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config = Self::from_toml(&content).map_err(|e| ContentError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        tracing::info!("Loaded site config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Apply the shared business data to the sections that display it.
    ///
    /// Business fields win over the same fields in individual sections;
    /// empty lists and missing optionals leave the section value alone.
    pub fn compose(&self) -> Site {
        let business = self.business.clone();

        let mut header = self.header.clone();
        header.phone = business.hotline.clone();

        let mut hero = self.hero.clone();
        if !hero.secondary_cta_tel.is_empty() {
            hero.secondary_cta_tel = business.mobile.split_whitespace().collect();
        }

        let mut contact = self.contact.clone();
        contact.address = business.address.clone();
        if !business.phones.is_empty() {
            contact.phones = business.phones.clone();
        }
        if !business.emails.is_empty() {
            contact.emails = business.emails.clone();
        }
        contact.linkedin_url = business.linkedin_url.clone().or(contact.linkedin_url);

        let mut footer = self.footer.clone();
        footer.company_name = business.company_name.clone();
        footer.address = business.address.clone();
        footer.phone = business.mobile.clone();
        footer.email = business.primary_email();
        footer.linkedin_url = business.linkedin_url.clone().or(footer.linkedin_url);

        Site {
            business,
            header,
            hero,
            services: self.services.clone(),
            about: self.about.clone(),
            contact,
            footer,
        }
    }
}

/// Load `site.toml` and every document under its `content_dir`.
pub fn load_site(path: &Path) -> Result<(SiteConfig, Vec<Document>), ContentError> {
    let config = SiteConfig::load(path)?;
    let documents = load_documents(&config.build.content_dir)?;
    tracing::debug!("Loaded {} documents", documents.len());
    Ok((config, documents))
}
