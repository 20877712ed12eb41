//! Page rendering: the home page and one page per document.

use chrono::Datelike;
use minijinja::context;
use rayon::prelude::*;
use serde::Serialize;

use masader_content::{is_valid_slug, markdown_to_html, Document, NavLink, Site, TocEntry};

use crate::templates::{RenderError, TemplateEngine};

/// Options shared by every rendered page.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Prefix for asset and API URLs, always ending in `/`
    pub base_url: String,
    /// Extra stylesheet hrefs linked after `main.css`
    pub styles: Vec<String>,
    /// Include the dev-server reload client
    pub live_reload: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            base_url: "/".to_string(),
            styles: vec![],
            live_reload: false,
        }
    }
}

/// A rendered page and the URL path it is served at.
#[derive(Debug, Clone)]
pub struct Page {
    pub path: String,
    pub html: String,
}

#[derive(Debug, Serialize)]
struct PageMeta {
    title: String,
    description: Option<String>,
    path: String,
    updated: Option<String>,
}

/// A document listed in the footer next to the configured quick links.
#[derive(Debug, Serialize)]
struct DocLink {
    title: String,
    href: String,
}

#[derive(Serialize)]
struct PageContext<'a> {
    page: PageMeta,
    site: &'a Site,
    nav: Vec<NavLink>,
    documents: Vec<DocLink>,
    base_url: &'a str,
    styles: &'a [String],
    live_reload: bool,
    year: i32,
    license_line: String,
    content: String,
    toc: &'a [TocEntry],
}

/// Renders the site's pages from the composed sections and documents.
pub struct SiteRenderer {
    site: Site,
    documents: Vec<Document>,
    engine: TemplateEngine,
    options: RenderOptions,
}

impl SiteRenderer {
    pub fn new(
        site: Site,
        documents: Vec<Document>,
        options: RenderOptions,
    ) -> Result<Self, RenderError> {
        if let Some(doc) = documents.iter().find(|d| !is_valid_slug(&d.slug())) {
            return Err(RenderError::InvalidSlug(doc.slug()));
        }

        Ok(Self {
            site,
            documents,
            engine: TemplateEngine::new()?,
            options,
        })
    }

    pub fn site(&self) -> &Site {
        &self.site
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// URL path of a document, e.g. `/return-policy/`.
    pub fn document_path(&self, doc: &Document) -> String {
        format!("{}{}/", self.options.base_url, doc.slug())
    }

    /// Every URL path the site serves, home first.
    pub fn paths(&self) -> Vec<String> {
        std::iter::once(self.options.base_url.clone())
            .chain(self.documents.iter().map(|d| self.document_path(d)))
            .collect()
    }

    pub fn render_home(&self) -> Result<String, RenderError> {
        let page = PageMeta {
            title: self.site.business.short_name.clone(),
            description: Some(self.site.hero.subtitle.clone()),
            path: self.options.base_url.clone(),
            updated: None,
        };

        self.engine
            .render("home.html", self.context(page, String::new(), &[]))
    }

    pub fn render_document(&self, doc: &Document) -> Result<String, RenderError> {
        let slug = doc.slug();

        // Bodies may reference business data, so they are templates first.
        let body = self
            .engine
            .render_str(
                &doc.content,
                context! { business => &self.site.business, site => &self.site },
            )
            .map_err(|source| RenderError::Document {
                slug: slug.clone(),
                source,
            })?;

        let frontmatter = doc.frontmatter.as_ref();
        let page = PageMeta {
            title: doc.title(),
            description: frontmatter.and_then(|f| f.description.clone()),
            path: self.document_path(doc),
            updated: frontmatter
                .and_then(|f| f.updated)
                .map(|d| d.format("%Y-%m-%d").to_string()),
        };

        self.engine.render(
            "document.html",
            self.context(page, markdown_to_html(&body), &doc.toc),
        )
    }

    /// Render whatever lives at `path`, or `None` if nothing does.
    ///
    /// Accepts `/slug`, `/slug/` and `/slug/index.html`.
    pub fn render_path(&self, path: &str) -> Result<Option<String>, RenderError> {
        let relative = path
            .strip_prefix(self.options.base_url.as_str())
            .unwrap_or(path.trim_start_matches('/'));
        let slug = relative
            .trim_end_matches("index.html")
            .trim_matches('/');

        if slug.is_empty() {
            return self.render_home().map(Some);
        }

        match self.documents.iter().find(|d| d.slug() == slug) {
            Some(doc) => self.render_document(doc).map(Some),
            None => Ok(None),
        }
    }

    /// Render the home page and every document in parallel.
    pub fn render_all(&self) -> Result<Vec<Page>, RenderError> {
        let home = Page {
            path: self.options.base_url.clone(),
            html: self.render_home()?,
        };

        let documents: Vec<Page> = self
            .documents
            .par_iter()
            .map(|doc| {
                Ok(Page {
                    path: self.document_path(doc),
                    html: self.render_document(doc)?,
                })
            })
            .collect::<Result<_, RenderError>>()?;

        Ok(std::iter::once(home).chain(documents).collect())
    }

    fn context<'a>(
        &'a self,
        page: PageMeta,
        content: String,
        toc: &'a [TocEntry],
    ) -> PageContext<'a> {
        let nav = self.site.header.nav_links(Some(page.path.as_str()));

        PageContext {
            page,
            site: &self.site,
            nav,
            documents: self.footer_documents(),
            base_url: &self.options.base_url,
            styles: &self.options.styles,
            live_reload: self.options.live_reload,
            year: chrono::Local::now().year(),
            license_line: self.site.footer.license_numbers.display(),
            content,
            toc,
        }
    }

    /// Listed documents that the footer's quick links don't already cover.
    fn footer_documents(&self) -> Vec<DocLink> {
        self.documents
            .iter()
            .filter(|d| d.in_nav())
            .map(|d| DocLink {
                title: d.title(),
                href: self.document_path(d),
            })
            .filter(|link| {
                !self
                    .site
                    .footer
                    .quick_links
                    .iter()
                    .any(|q| q.href == link.href)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use masader_content::{parse_document, policy, AboutLayout, SiteConfig};

    fn renderer_with(config: SiteConfig, documents: Vec<Document>) -> SiteRenderer {
        SiteRenderer::new(config.compose(), documents, RenderOptions::default()).unwrap()
    }

    fn default_renderer() -> SiteRenderer {
        let policy = parse_document(policy::RETURN_POLICY).unwrap();
        renderer_with(SiteConfig::default(), vec![policy])
    }

    #[test]
    fn rejects_documents_that_would_leave_the_site_root() {
        let escaping = parse_document("---\ntitle: x\nslug: ../escaped\n---\n").unwrap();
        let home = parse_document("---\ntitle: x\nslug: /\n---\n").unwrap();

        for doc in [escaping, home] {
            let result =
                SiteRenderer::new(SiteConfig::default().compose(), vec![doc], RenderOptions::default());
            assert!(matches!(result, Err(RenderError::InvalidSlug(_))));
        }
    }

    #[test]
    fn home_page_renders_every_section() {
        let html = default_renderer().render_home().unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="ar" dir="rtl">"#));
        for id in ["home", "services", "about", "contact"] {
            assert!(html.contains(&format!(r#"id="{id}""#)), "section {id} missing");
        }
        assert!(html.contains("خدمات استقدام موثوقة للعمالة المنزلية"));
        assert!(html.contains("سياسات وإجراءات خدمة العملاء"));
        assert!(html.contains("class=\"site-footer\""));
    }

    #[test]
    fn home_page_marks_home_nav_active() {
        let html = default_renderer().render_home().unwrap();

        assert!(html.contains(r#"<a href="/" class="active" aria-current="page">الرئيسية</a>"#));
        assert!(!html.contains(r#"<a href="/#services" class="active""#));
    }

    #[test]
    fn header_uses_business_hotline() {
        let html = default_renderer().render_home().unwrap();

        assert!(html.contains(r#"href="tel:920012345""#));
        assert!(html.contains("9200 123 45"));
    }

    #[test]
    fn contact_form_lists_catalog() {
        let html = default_renderer().render_home().unwrap();

        assert!(html.contains(r#"data-endpoint="/api/contact""#));
        assert!(html.contains(r#"<option value="driver">استقدام سائق خاص</option>"#));
        assert!(html.contains(r#"<option value="other">أخرى</option>"#));
    }

    #[test]
    fn testimonials_show_initials_and_badge() {
        let html = default_renderer().render_home().unwrap();

        assert!(html.contains(r#"<span class="avatar" aria-hidden="true">أس</span>"#));
        assert!(html.contains("top-rated"));
    }

    #[test]
    fn badge_needs_five_stars() {
        let mut config = SiteConfig::default();
        for t in &mut config.about.testimonials {
            t.rating = Some(4);
        }

        let html = renderer_with(config, vec![]).render_home().unwrap();

        assert!(!html.contains("top-rated"));
    }

    #[test]
    fn compact_layout_adds_class() {
        let mut config = SiteConfig::default();
        config.about.layout = AboutLayout::Compact;

        let html = renderer_with(config, vec![]).render_home().unwrap();

        assert!(html.contains("section about is-compact"));
    }

    #[test]
    fn external_quick_links_open_in_new_tab() {
        let mut config = SiteConfig::default();
        config.footer.quick_links = vec![masader_content::QuickLink {
            label: "مساند".to_string(),
            href: "https://musaned.com.sa".to_string(),
        }];

        let html = renderer_with(config, vec![]).render_home().unwrap();

        assert!(html.contains(
            r#"<a href="https://musaned.com.sa" target="_blank" rel="noopener noreferrer">مساند</a>"#
        ));
    }

    #[test]
    fn footer_shows_year_and_licenses() {
        let html = default_renderer().render_home().unwrap();
        let year = chrono::Local::now().year();

        assert!(html.contains(&format!("© {year} ")));
        assert!(html.contains("سجل تجاري: 1010XXXXX • ترخيص استقدام: 12XXXX"));
    }

    #[test]
    fn social_link_hidden_when_disabled() {
        let mut config = SiteConfig::default();
        config.footer.show_social = false;
        config.contact.show_social = false;

        let html = renderer_with(config, vec![]).render_home().unwrap();

        assert!(!html.contains("linkedin.com/company/masader"));
    }

    #[test]
    fn return_policy_substitutes_business_data() {
        let renderer = default_renderer();

        let html = renderer.render_path("/return-policy/").unwrap().unwrap();

        assert!(html.contains("<title>سياسة الإرجاع | مكتب مصادر لإستقدام العمالة المنزلية</title>"));
        assert!(html.contains("نحرص في مكتب مصادر لإستقدام العمالة المنزلية على رضا العملاء"));
        assert!(html.contains(r#"href="tel:920012345""#));
        assert!(html.contains(r#"href="mailto:info@masader.sa""#));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn render_path_accepts_variants() {
        let renderer = default_renderer();

        assert!(renderer.render_path("/").unwrap().is_some());
        assert!(renderer.render_path("/index.html").unwrap().is_some());
        assert!(renderer.render_path("/return-policy").unwrap().is_some());
        assert!(renderer
            .render_path("/return-policy/index.html")
            .unwrap()
            .is_some());
        assert!(renderer.render_path("/missing/").unwrap().is_none());
    }

    #[test]
    fn footer_lists_documents_not_in_quick_links() {
        let extra = parse_document("---\ntitle: الأسئلة الشائعة\nslug: faq\n---\n\nنص").unwrap();
        let hidden =
            parse_document("---\ntitle: مسودة\nslug: draft\nnav: false\n---\n\nنص").unwrap();
        let policy = parse_document(policy::RETURN_POLICY).unwrap();

        let html = renderer_with(SiteConfig::default(), vec![policy, extra, hidden])
            .render_home()
            .unwrap();

        assert!(html.contains(r#"<li><a href="/faq/">الأسئلة الشائعة</a></li>"#));
        assert!(!html.contains("/draft/"));
        assert_eq!(html.matches(r#"href="/return-policy/""#).count(), 2);
    }

    #[test]
    fn live_reload_script_only_in_dev() {
        let policy = parse_document(policy::RETURN_POLICY).unwrap();
        let dev = SiteRenderer::new(
            SiteConfig::default().compose(),
            vec![policy],
            RenderOptions {
                live_reload: true,
                ..Default::default()
            },
        )
        .unwrap();

        assert!(dev.render_home().unwrap().contains("/__reload.js"));
        assert!(!default_renderer().render_home().unwrap().contains("/__reload.js"));
    }

    #[test]
    fn render_all_covers_every_path() {
        let renderer = default_renderer();

        let pages = renderer.render_all().unwrap();

        let paths: Vec<&str> = pages.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/return-policy/"]);
        assert_eq!(renderer.paths(), vec!["/", "/return-policy/"]);
    }
}
