//! Stylesheet and client script for the site.

use std::path::Path;

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// The site stylesheet (RTL, design tokens as custom properties).
    pub fn generate_css() -> String {
        SITE_CSS.to_string()
    }

    /// Client script: mobile menu, toasts and the contact form.
    pub fn generate_js() -> String {
        SITE_JS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }

    /// Served href of an extra stylesheet: `{base_url}assets/{file name}`.
    pub fn style_href(base_url: &str, path: &Path) -> String {
        let filename = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("style.css");
        format!("{}assets/{}", base_url, filename)
    }
}

const SITE_CSS: &str = r#"/* Masader site theme */

:root {
  --background: #f8faf9;
  --foreground: #0f1f1a;
  --card: #ffffff;
  --muted: #eef3f1;
  --muted-foreground: #52625c;
  --primary: #0f766e;
  --primary-foreground: #ffffff;
  --secondary: #e6f2ef;
  --accent: #d97706;
  --border: #d9e3df;
  --ring: #14b8a6;
  --success: #15803d;
  --danger: #b91c1c;
  --radius: 0.75rem;
  --container: 1200px;
  --font-sans: "Tajawal", "IBM Plex Sans Arabic", "Segoe UI", Tahoma, sans-serif;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: var(--font-sans);
  background: var(--background);
  color: var(--foreground);
  line-height: 1.8;
  direction: rtl;
  text-align: right;
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}

ul,
ol {
  list-style: none;
}

:focus-visible {
  outline: 2px solid var(--ring);
  outline-offset: 2px;
}

.container {
  width: 100%;
  max-width: var(--container);
  margin: 0 auto;
  padding: 0 1.25rem;
}

.container.narrow {
  max-width: 820px;
}

.skip-link {
  position: absolute;
  top: -3rem;
  right: 1rem;
  background: var(--primary);
  color: var(--primary-foreground);
  padding: 0.5rem 1rem;
  border-radius: var(--radius);
  z-index: 100;
}

.skip-link:focus {
  top: 1rem;
}

.icon {
  width: 1.25rem;
  height: 1.25rem;
  flex-shrink: 0;
}

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 0.625rem 1.25rem;
  border-radius: var(--radius);
  border: 1px solid transparent;
  font: inherit;
  font-weight: 600;
  cursor: pointer;
  transition: background 0.15s, color 0.15s, border-color 0.15s;
}

.btn:hover {
  text-decoration: none;
}

.btn-primary {
  background: var(--primary);
  color: var(--primary-foreground);
}

.btn-primary:hover {
  background: #115e59;
}

.btn-outline {
  background: transparent;
  color: var(--primary);
  border-color: var(--primary);
}

.btn-outline:hover {
  background: var(--secondary);
}

.btn-lg {
  padding: 0.875rem 1.75rem;
  font-size: 1.05rem;
}

.btn-block {
  width: 100%;
}

.btn[disabled] {
  opacity: 0.6;
  cursor: progress;
}

/* Header */
.site-header {
  background: rgba(255, 255, 255, 0.95);
  border-bottom: 1px solid var(--border);
  backdrop-filter: blur(8px);
}

.site-header.is-sticky {
  position: sticky;
  top: 0;
  z-index: 50;
}

.header-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  padding-top: 0.75rem;
  padding-bottom: 0.75rem;
}

.brand {
  display: inline-flex;
  align-items: center;
  gap: 0.75rem;
  color: var(--foreground);
}

.brand:hover {
  text-decoration: none;
}

.brand-mark {
  display: grid;
  place-items: center;
  width: 2.25rem;
  height: 2.25rem;
  border-radius: 0.5rem;
  background: var(--secondary);
  border: 1px solid var(--border);
}

.brand-mark span {
  width: 0.75rem;
  height: 0.75rem;
  border-radius: 0.375rem;
  background: var(--primary);
}

.brand-text {
  display: flex;
  flex-direction: column;
  line-height: 1.3;
}

.brand-text small {
  color: var(--muted-foreground);
}

.main-nav ul {
  display: flex;
  gap: 0.25rem;
}

.main-nav a,
.mobile-nav a {
  display: block;
  padding: 0.5rem 0.875rem;
  border-radius: var(--radius);
  color: var(--muted-foreground);
}

.main-nav a:hover,
.mobile-nav a:hover {
  background: var(--muted);
  color: var(--foreground);
  text-decoration: none;
}

.main-nav a.active,
.mobile-nav a.active {
  background: var(--secondary);
  color: var(--primary);
  font-weight: 700;
}

.header-actions {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.menu-toggle {
  display: none;
  background: transparent;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 0.5rem;
  color: var(--foreground);
  cursor: pointer;
}

.mobile-nav {
  border-top: 1px solid var(--border);
  padding: 1rem 1.25rem;
  background: var(--card);
}

.mobile-nav ul {
  margin-bottom: 1rem;
}

/* Sections */
.section {
  padding: 4.5rem 0;
}

.section-head {
  max-width: 720px;
  margin: 0 auto 2.5rem;
  text-align: center;
}

.section-head h2 {
  font-size: 2rem;
  line-height: 1.4;
  margin-bottom: 0.75rem;
}

.section-head p {
  color: var(--muted-foreground);
}

.eyebrow,
.badge {
  display: inline-flex;
  align-items: center;
  gap: 0.375rem;
  padding: 0.25rem 0.875rem;
  margin-bottom: 1rem;
  border-radius: 999px;
  background: var(--secondary);
  color: var(--primary);
  font-size: 0.875rem;
  font-weight: 600;
}

.card {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1.5rem;
}

.card-icon {
  display: inline-grid;
  place-items: center;
  width: 2.75rem;
  height: 2.75rem;
  margin-bottom: 1rem;
  border-radius: var(--radius);
  background: var(--secondary);
  color: var(--primary);
}

.cards {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
  gap: 1.25rem;
}

.cards .card strong,
.cards .card small {
  display: block;
}

.cards .card small {
  color: var(--muted-foreground);
}

.checklist li {
  display: flex;
  align-items: flex-start;
  gap: 0.5rem;
  margin-top: 0.5rem;
}

.checklist .icon {
  color: var(--success);
  margin-top: 0.3rem;
}

/* Hero */
.hero {
  padding: 5rem 0 4rem;
  background: linear-gradient(180deg, var(--secondary), var(--background));
}

.hero-grid {
  display: grid;
  grid-template-columns: 3fr 2fr;
  gap: 3rem;
  align-items: center;
}

.hero h1 {
  font-size: 2.75rem;
  line-height: 1.35;
  margin-bottom: 1rem;
}

.lead {
  font-size: 1.125rem;
  color: var(--muted-foreground);
  margin-bottom: 2rem;
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
  margin-bottom: 2rem;
}

.hero-stats {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1rem;
}

.hero-stats li {
  display: flex;
  gap: 0.625rem;
  align-items: flex-start;
}

.stat-icon {
  color: var(--primary);
}

.hero-stats small {
  display: block;
  color: var(--muted-foreground);
}

.device-card {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  padding: 3rem 2rem;
  border-radius: 1.5rem;
  background: var(--card);
  border: 1px solid var(--border);
  box-shadow: 0 20px 40px rgba(15, 118, 110, 0.12);
  text-align: center;
  color: var(--muted-foreground);
}

.device-card .icon {
  width: 4rem;
  height: 4rem;
  color: var(--primary);
}

/* Services */
.service-card h3 {
  margin-bottom: 0.5rem;
}

.service-card p {
  color: var(--muted-foreground);
}

.info-panel {
  margin-top: 2rem;
  background: var(--secondary);
}

.info-panel dl {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: 1rem;
  margin-top: 1rem;
}

.info-panel dt {
  font-weight: 700;
}

.info-panel dd {
  color: var(--muted-foreground);
}

/* About */
.about-grid {
  display: grid;
  grid-template-columns: 3fr 2fr;
  gap: 1.5rem;
  margin-bottom: 2.5rem;
}

.stats {
  display: grid;
  gap: 1rem;
}

.stat {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 1.25rem;
  border-radius: var(--radius);
  background: var(--primary);
  color: var(--primary-foreground);
}

.stat dd {
  font-size: 2rem;
  font-weight: 800;
  direction: ltr;
}

.about-block {
  margin-bottom: 2.5rem;
}

.about-block > h3 {
  margin-bottom: 1rem;
  font-size: 1.375rem;
}

.about-block .card p {
  margin-top: 0.5rem;
  color: var(--muted-foreground);
}

.testimonial blockquote {
  font-size: 1.05rem;
  margin-bottom: 1rem;
}

.testimonial figcaption {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.avatar {
  display: grid;
  place-items: center;
  width: 2.75rem;
  height: 2.75rem;
  border-radius: 50%;
  background: var(--secondary);
  color: var(--primary);
  font-weight: 700;
}

.top-rated {
  margin-inline-start: auto;
  color: var(--accent);
}

.top-rated .icon {
  fill: currentColor;
}

.trust-badges {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.75rem;
}

.trust-badges li {
  display: inline-flex;
  align-items: center;
  gap: 0.375rem;
  padding: 0.375rem 1rem;
  border-radius: 999px;
  border: 1px solid var(--border);
  background: var(--card);
  font-size: 0.9rem;
}

.about.is-compact {
  padding: 2.5rem 0;
}

.about.is-compact .section-head,
.about.is-compact .about-grid,
.about.is-compact .about-block {
  margin-bottom: 1.25rem;
}

.about.is-compact .card {
  padding: 1rem;
}

/* Contact */
.contact-grid {
  display: grid;
  grid-template-columns: 3fr 2fr;
  gap: 1.5rem;
}

.field {
  margin-bottom: 1rem;
}

.field label {
  display: block;
  margin-bottom: 0.375rem;
  font-weight: 600;
}

.field input,
.field select,
.field textarea {
  width: 100%;
  padding: 0.625rem 0.875rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: var(--card);
  color: var(--foreground);
  font: inherit;
}

.field textarea {
  resize: vertical;
}

.contact-details {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.contact-details h3 {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 0.5rem;
  font-size: 1.05rem;
}

.contact-details .link {
  display: inline-flex;
  align-items: center;
  gap: 0.25rem;
  margin-top: 0.5rem;
}

.hours div {
  display: flex;
  justify-content: space-between;
  gap: 1rem;
  padding: 0.25rem 0;
  border-bottom: 1px dashed var(--border);
}

.hours dd {
  color: var(--muted-foreground);
}

.map {
  margin-top: 2rem;
  border-radius: var(--radius);
  overflow: hidden;
  border: 1px solid var(--border);
}

.map iframe {
  display: block;
  width: 100%;
  height: 360px;
  border: 0;
}

/* Documents */
.breadcrumb {
  display: flex;
  gap: 0.5rem;
  margin-bottom: 1.5rem;
  color: var(--muted-foreground);
  font-size: 0.9rem;
}

.doc-head {
  margin-bottom: 2rem;
}

.doc-head h1 {
  font-size: 2.25rem;
  margin-bottom: 0.5rem;
}

.muted {
  color: var(--muted-foreground);
  font-size: 0.9rem;
}

.toc {
  margin-bottom: 2rem;
}

.toc h2 {
  font-size: 1rem;
  margin-bottom: 0.5rem;
}

.toc .toc-level-3 {
  padding-inline-start: 1rem;
}

.prose h2 {
  font-size: 1.5rem;
  margin: 2rem 0 0.75rem;
}

.prose h3 {
  font-size: 1.2rem;
  margin: 1.5rem 0 0.5rem;
}

.prose p {
  margin-bottom: 1rem;
}

.prose ul {
  list-style: disc;
  padding-inline-start: 1.5rem;
  margin-bottom: 1rem;
}

.prose ol {
  list-style: decimal;
  padding-inline-start: 1.5rem;
  margin-bottom: 1rem;
}

.doc-cta {
  margin-top: 2.5rem;
}

/* Footer */
.site-footer {
  background: var(--foreground);
  color: #d6e2de;
  padding-top: 3.5rem;
}

.site-footer a {
  color: #ffffff;
}

.footer-grid {
  display: grid;
  grid-template-columns: 2fr 1fr 1.5fr 1.5fr;
  gap: 2rem;
  padding-bottom: 2.5rem;
}

.footer-title {
  font-size: 1.25rem;
  color: #ffffff;
  margin-bottom: 0.75rem;
}

.site-footer h3 {
  color: #ffffff;
  font-size: 1rem;
  margin-bottom: 0.75rem;
}

.site-footer li {
  display: flex;
  gap: 0.5rem;
  margin-bottom: 0.5rem;
}

.social {
  display: inline-grid;
  place-items: center;
  width: 2.5rem;
  height: 2.5rem;
  margin-top: 1rem;
  border-radius: 50%;
  border: 1px solid rgba(255, 255, 255, 0.3);
}

.footer-bottom {
  border-top: 1px solid rgba(255, 255, 255, 0.15);
  padding-top: 1.25rem;
  padding-bottom: 1.5rem;
  font-size: 0.875rem;
  text-align: center;
}

.footer-bottom p + p {
  margin-top: 0.25rem;
}

/* Toasts */
.toasts {
  position: fixed;
  bottom: 1.5rem;
  left: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  z-index: 200;
}

.toast {
  min-width: 260px;
  max-width: 360px;
  padding: 0.875rem 1.125rem;
  border-radius: var(--radius);
  color: #ffffff;
  box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
}

.toast-success {
  background: var(--success);
}

.toast-error {
  background: var(--danger);
}

@media (max-width: 900px) {
  .main-nav,
  .header-call {
    display: none;
  }

  .menu-toggle {
    display: inline-flex;
  }

  .hero-grid,
  .about-grid,
  .contact-grid {
    grid-template-columns: 1fr;
  }

  .hero h1 {
    font-size: 2rem;
  }

  .hero-stats {
    grid-template-columns: 1fr;
  }

  .footer-grid {
    grid-template-columns: 1fr 1fr;
  }
}

@media (max-width: 560px) {
  .footer-grid {
    grid-template-columns: 1fr;
  }

  .toasts {
    left: 1rem;
    right: 1rem;
  }
}
"#;

const SITE_JS: &str = r#"// Masader site client
(function () {
  'use strict';

  var FAILED_MESSAGE = 'حدث خطأ أثناء الإرسال. حاول مرة أخرى.';
  var SENDING_LABEL = 'جاري الإرسال...';
  var MISSING_FIELDS_MESSAGE = 'يرجى تعبئة جميع الحقول المطلوبة.';
  var MISSING_SERVICE_MESSAGE = 'يرجى اختيار نوع الخدمة.';

  // Mobile menu
  var toggle = document.querySelector('.menu-toggle');
  var mobileNav = document.getElementById('mobile-nav');

  function setMenu(open) {
    if (!toggle || !mobileNav) return;
    toggle.setAttribute('aria-expanded', String(open));
    toggle.setAttribute('aria-label', open ? 'إغلاق القائمة' : 'فتح القائمة');
    mobileNav.hidden = !open;
  }

  if (toggle && mobileNav) {
    toggle.addEventListener('click', function () {
      setMenu(toggle.getAttribute('aria-expanded') !== 'true');
    });

    mobileNav.querySelectorAll('a').forEach(function (link) {
      link.addEventListener('click', function () { setMenu(false); });
    });

    document.addEventListener('keydown', function (event) {
      if (event.key === 'Escape') setMenu(false);
    });
  }

  // Toasts
  var toasts = document.querySelector('.toasts');

  function notify(kind, message) {
    if (!toasts || !message) return;
    var toast = document.createElement('div');
    toast.className = 'toast toast-' + kind;
    toast.setAttribute('role', kind === 'error' ? 'alert' : 'status');
    toast.textContent = message;
    toasts.appendChild(toast);
    setTimeout(function () { toast.remove(); }, 5000);
  }

  // Contact form
  document.querySelectorAll('form.contact-form').forEach(function (form) {
    var button = form.querySelector('button[type="submit"]');
    var label = button ? button.querySelector('span') : null;
    var idleLabel = label ? label.textContent : '';
    var submitting = false;

    function setSubmitting(value) {
      submitting = value;
      if (button) button.disabled = value;
      if (label) label.textContent = value ? SENDING_LABEL : idleLabel;
      form.setAttribute('aria-busy', String(value));
    }

    function readPayload() {
      var data = new FormData(form);
      var service = String(data.get('service') || '').trim();
      return {
        name: String(data.get('name') || '').trim(),
        phone: String(data.get('phone') || '').trim(),
        email: String(data.get('email') || '').trim(),
        service: service || null,
        message: String(data.get('message') || '').trim()
      };
    }

    // Same order as the server: text fields first, then the service.
    function validate(payload) {
      if (!payload.name || !payload.phone || !payload.email || !payload.message) {
        return MISSING_FIELDS_MESSAGE;
      }
      if (!payload.service) return MISSING_SERVICE_MESSAGE;
      return null;
    }

    form.addEventListener('submit', async function (event) {
      event.preventDefault();
      if (submitting) return;

      var payload = readPayload();
      var problem = validate(payload);
      if (problem) {
        notify('error', problem);
        return;
      }

      setSubmitting(true);
      try {
        var response = await fetch(form.dataset.endpoint, {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify(payload)
        });
        var body = await response.json();
        (body.notifications || []).forEach(function (n) { notify(n.kind, n.message); });
        if (body.outcome === 'sent') form.reset();
      } catch (err) {
        notify('error', FAILED_MESSAGE);
      } finally {
        setSubmitting(false);
      }
    });
  });
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use masader_contact::messages;

    #[test]
    fn generates_rtl_css() {
        let css = AssetPipeline::generate_css();
        assert!(css.contains(":root"));
        assert!(css.contains("direction: rtl"));
        assert!(css.contains("--primary"));
    }

    #[test]
    fn js_posts_to_contact_endpoint() {
        let js = AssetPipeline::generate_js();
        assert!(js.contains("form.dataset.endpoint"));
        assert!(js.contains("button.disabled = value"));
        assert!(js.contains("form.reset()"));
    }

    #[test]
    fn js_checks_fields_before_posting() {
        let js = AssetPipeline::generate_js();

        assert!(js.contains(&format!("'{}'", messages::MISSING_FIELDS)));
        assert!(js.contains(&format!("'{}'", messages::MISSING_SERVICE)));
        assert!(js.contains(&format!("'{}'", messages::FAILED)));

        let check = js.find("var problem = validate(payload);").unwrap();
        let post = js.find("await fetch(").unwrap();
        assert!(check < post, "fields must be checked before the request");
        assert!(js.contains("String(data.get('message') || '').trim()"));
    }

    #[test]
    fn minifies_site_css() {
        let css = AssetPipeline::generate_css();

        let minified = AssetPipeline::minify_css(&css).unwrap();

        assert!(minified.len() < css.len());
        assert!(!minified.contains('\n'));
        assert!(minified.contains(".site-header"));
    }

    #[test]
    fn style_href_uses_file_name() {
        assert_eq!(
            AssetPipeline::style_href("/", Path::new("styles/brand.css")),
            "/assets/brand.css"
        );
    }
}
