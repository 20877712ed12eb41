//! Markdown documents (return policy and other static pages).

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use pulldown_cmark::{html, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use walkdir::WalkDir;

use crate::frontmatter::{extract_frontmatter, Frontmatter, FrontmatterError};
use crate::policy;

/// A parsed markdown document.
#[derive(Debug, Clone)]
pub struct Document {
    /// Parsed frontmatter (if present)
    pub frontmatter: Option<Frontmatter>,

    /// Markdown content (without frontmatter)
    pub content: String,

    /// Table of contents entries
    pub toc: Vec<TocEntry>,

    /// File the document was loaded from, `None` for built-in documents
    pub source_path: Option<PathBuf>,
}

/// A table of contents entry.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TocEntry {
    /// Heading text
    pub title: String,
    /// Anchor ID
    pub id: String,
    /// Heading level (1-6)
    pub level: u8,
}

/// Errors that can occur when loading documents.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Frontmatter error in {path}: {source}")]
    Frontmatter {
        path: String,
        #[source]
        source: FrontmatterError,
    },

    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Invalid slug {slug:?} in {path}: a slug is one non-empty path segment")]
    InvalidSlug { path: String, slug: String },

    #[error("{path} and {other} both use the slug {slug:?}")]
    DuplicateSlug {
        path: String,
        other: String,
        slug: String,
    },
}

impl Document {
    /// Display title: frontmatter title, else the first heading.
    pub fn title(&self) -> String {
        self.frontmatter
            .as_ref()
            .map(|f| f.title.clone())
            .filter(|t| !t.is_empty())
            .or_else(|| self.toc.first().map(|e| e.title.clone()))
            .unwrap_or_else(|| "بدون عنوان".to_string())
    }

    /// URL slug: frontmatter override, else file stem, else the slugified title.
    pub fn slug(&self) -> String {
        if let Some(slug) = self.frontmatter.as_ref().and_then(|f| f.slug.clone()) {
            return slug.trim_matches('/').to_string();
        }

        self.source_path
            .as_ref()
            .and_then(|p| p.file_stem())
            .and_then(|s| s.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| slugify(&self.title()))
    }

    /// Sort key for listings.
    pub fn order(&self) -> i32 {
        self.frontmatter
            .as_ref()
            .and_then(|f| f.order)
            .unwrap_or(999)
    }

    /// Whether the document appears in the footer listing.
    pub fn in_nav(&self) -> bool {
        self.frontmatter.as_ref().map(|f| f.nav).unwrap_or(true)
    }
}

/// Parse a markdown document with optional frontmatter.
pub fn parse_document(source: &str) -> Result<Document, FrontmatterError> {
    let (frontmatter, content) = extract_frontmatter(source)?;

    let mut toc = Vec::new();
    let mut current_heading: Option<(u8, String)> = None;

    for event in Parser::new_ext(content, markdown_options()) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current_heading = Some((heading_level(level), String::new()));
            }

            Event::Text(text) | Event::Code(text) => {
                if let Some((_, ref mut heading_text)) = current_heading {
                    heading_text.push_str(&text);
                }
            }

            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, title)) = current_heading.take() {
                    let id = slugify(&title);
                    toc.push(TocEntry { title, id, level });
                }
            }

            _ => {}
        }
    }

    Ok(Document {
        frontmatter,
        content: content.to_string(),
        toc,
        source_path: None,
    })
}

/// Load the built-in documents plus every `.md` file under `content_dir`.
///
/// A file whose slug matches a built-in document replaces it. The result is
/// sorted by frontmatter `order`.
pub fn load_documents(content_dir: &Path) -> Result<Vec<Document>, DocumentError> {
    let mut documents = vec![builtin(policy::RETURN_POLICY)?];
    let mut seen: HashMap<String, PathBuf> = HashMap::new();

    if !content_dir.exists() {
        tracing::debug!(
            "Content directory {} not found, using built-in documents",
            content_dir.display()
        );
        return Ok(documents);
    }

    for entry in WalkDir::new(content_dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if ext != "md" && ext != "markdown" {
            continue;
        }

        let source = fs::read_to_string(path).map_err(|e| DocumentError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let mut doc = parse_document(&source).map_err(|e| DocumentError::Frontmatter {
            path: path.display().to_string(),
            source: e,
        })?;
        doc.source_path = Some(path.to_path_buf());

        let slug = doc.slug();
        if !is_valid_slug(&slug) {
            return Err(DocumentError::InvalidSlug {
                path: path.display().to_string(),
                slug,
            });
        }
        if let Some(other) = seen.insert(slug.clone(), path.to_path_buf()) {
            return Err(DocumentError::DuplicateSlug {
                path: path.display().to_string(),
                other: other.display().to_string(),
                slug,
            });
        }

        if let Some(existing) = documents.iter_mut().find(|d| d.slug() == slug) {
            tracing::info!("{} overrides built-in page /{}/", path.display(), slug);
            *existing = doc;
        } else {
            documents.push(doc);
        }
    }

    documents.sort_by_key(Document::order);

    Ok(documents)
}

fn builtin(source: &str) -> Result<Document, DocumentError> {
    parse_document(source).map_err(|e| DocumentError::Frontmatter {
        path: "<built-in>".to_string(),
        source: e,
    })
}

/// Render markdown to HTML, giving every heading an anchor id.
pub fn markdown_to_html(content: &str) -> String {
    let events: Vec<Event<'_>> = Parser::new_ext(content, markdown_options()).collect();
    let mut anchored = Vec::with_capacity(events.len());

    for (index, event) in events.iter().enumerate() {
        match event {
            Event::Start(Tag::Heading {
                level,
                id: None,
                classes,
                attrs,
            }) => {
                let title = heading_text(&events[index + 1..]);
                anchored.push(Event::Start(Tag::Heading {
                    level: *level,
                    id: Some(slugify(&title).into()),
                    classes: classes.clone(),
                    attrs: attrs.clone(),
                }));
            }
            other => anchored.push(other.clone()),
        }
    }

    let mut html_output = String::new();
    html::push_html(&mut html_output, anchored.into_iter());

    html_output
}

fn heading_text(events: &[Event<'_>]) -> String {
    events
        .iter()
        .take_while(|e| !matches!(e, Event::End(TagEnd::Heading(_))))
        .filter_map(|e| match e {
            Event::Text(text) | Event::Code(text) => Some(&**text),
            _ => None,
        })
        .collect()
}

fn markdown_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH
}

fn heading_level(level: HeadingLevel) -> u8 {
    level as u8
}

/// A slug becomes one directory under the output root, so it must be a
/// single non-empty segment with no separators or dot segments.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug != "."
        && !slug.contains("..")
        && !slug.contains(['/', '\\', ':'])
        && !slug.chars().any(char::is_control)
}

/// Convert a heading to a URL-safe slug. Arabic letters are kept as-is.
fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c
            } else if c.is_whitespace() || c == '-' || c == '_' {
                '-'
            } else {
                '\0'
            }
        })
        .filter(|c| *c != '\0')
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
