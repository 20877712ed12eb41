//! YAML header of a content page.

use chrono::NaiveDate;
use serde::Deserialize;

/// Page metadata between the `---` fences.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Frontmatter {
    /// Shown as the page heading and in the footer listing
    pub title: String,

    /// `<meta name="description">`
    #[serde(default)]
    pub description: Option<String>,

    /// Position in the footer listing, lower first
    #[serde(default)]
    pub order: Option<i32>,

    /// `false` hides the page from the footer (it is still built)
    #[serde(default = "listed")]
    pub nav: bool,

    /// Output directory name instead of the file stem
    #[serde(default)]
    pub slug: Option<String>,

    /// "Last updated" date (YYYY-MM-DD)
    #[serde(default)]
    pub updated: Option<NaiveDate>,
}

fn listed() -> bool {
    true
}

impl Default for Frontmatter {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: None,
            order: None,
            nav: listed(),
            slug: None,
            updated: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    #[error("Frontmatter opened with --- but never closed")]
    MissingClosingFence,

    #[error("Frontmatter is not valid: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Split `source` into its frontmatter and the markdown body.
///
/// A page without an opening `---` line has no frontmatter and is returned
/// untouched. The fences must sit on their own lines; CRLF endings and a
/// leading byte-order mark are accepted.
pub fn extract_frontmatter(source: &str) -> Result<(Option<Frontmatter>, &str), FrontmatterError> {
    let text = source.trim_start_matches('\u{feff}').trim_start();

    let Some(header) = text
        .strip_prefix("---\n")
        .or_else(|| text.strip_prefix("---\r\n"))
    else {
        return Ok((None, source));
    };

    let mut offset = 0;
    for line in header.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let frontmatter = serde_yaml::from_str(&header[..offset])?;
            let body = &header[offset + line.len()..];
            return Ok((Some(frontmatter), body.trim_start()));
        }
        offset += line.len();
    }

    Err(FrontmatterError::MissingClosingFence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_every_page_field() {
        let source = "---\n\
            title: الأسئلة الشائعة\n\
            description: إجابات سريعة\n\
            order: 20\n\
            nav: false\n\
            slug: /faq/\n\
            updated: 2025-03-01\n\
            ---\n\
            \n\
            ## كم تستغرق مدة الاستقدام؟\n";

        let (fm, body) = extract_frontmatter(source).unwrap();
        let fm = fm.unwrap();

        assert_eq!(fm.title, "الأسئلة الشائعة");
        assert_eq!(fm.order, Some(20));
        assert!(!fm.nav);
        assert_eq!(fm.slug.as_deref(), Some("/faq/"));
        assert_eq!(fm.updated, NaiveDate::from_ymd_opt(2025, 3, 1));
        assert_eq!(body, "## كم تستغرق مدة الاستقدام؟\n");
    }

    #[test]
    fn pages_are_listed_unless_hidden() {
        let (fm, _) = extract_frontmatter("---\ntitle: الشروط\n---\n").unwrap();

        assert!(fm.unwrap().nav);
        assert!(Frontmatter::default().nav);
    }

    #[test]
    fn plain_markdown_passes_through() {
        let source = "## سياسة الخصوصية\n\n--- \n\nنص.";

        let (fm, body) = extract_frontmatter(source).unwrap();

        assert!(fm.is_none());
        assert_eq!(body, source);
    }

    #[test]
    fn accepts_windows_line_endings() {
        let source = "\u{feff}---\r\ntitle: سياسة الإرجاع\r\n---\r\nنص السياسة";

        let (fm, body) = extract_frontmatter(source).unwrap();

        assert_eq!(fm.unwrap().title, "سياسة الإرجاع");
        assert_eq!(body, "نص السياسة");
    }

    #[test]
    fn horizontal_rule_in_body_is_not_a_fence() {
        let source = "---\ntitle: الشروط\n---\nأولاً\n\n---\n\nثانياً";

        let (_, body) = extract_frontmatter(source).unwrap();

        assert_eq!(body, "أولاً\n\n---\n\nثانياً");
    }

    #[test]
    fn missing_closing_fence_is_an_error() {
        let source = "---\ntitle: الأسئلة الشائعة\n\n## كم تستغرق مدة الاستقدام؟";

        assert!(matches!(
            extract_frontmatter(source),
            Err(FrontmatterError::MissingClosingFence)
        ));
    }

    #[test]
    fn page_without_title_is_rejected() {
        let source = "---\nslug: faq\n---\n";

        assert!(matches!(
            extract_frontmatter(source),
            Err(FrontmatterError::Yaml(_))
        ));
    }
}
