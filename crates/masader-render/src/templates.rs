//! Template engine for rendering the site's pages.

use std::fmt::Write;

use minijinja::{AutoEscape, Environment, Output, State, Value};
use serde::Serialize;

use masader_content::is_internal_href;
use masader_content::phone::{format_phone, mailto_href, maps_search_url, tel_href};

use crate::icons::icon_svg;

/// Errors raised while rendering pages.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Failed to render document {slug}: {source}")]
    Document {
        slug: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Document slug {0:?} is not a single path segment")]
    InvalidSlug(String),
}

/// Template engine using minijinja.
///
/// Page templates end in `.html` and are auto-escaped. Document bodies go
/// through [`TemplateEngine::render_str`], which does not escape, before
/// markdown conversion.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create an engine with every page and section template registered.
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.set_formatter(html_formatter);

        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }

        env.add_filter("tel", |value: Value| map_str(&value, tel_href));
        env.add_filter("mailto", |value: Value| map_str(&value, mailto_href));
        env.add_filter("phone", |value: Value| map_str(&value, format_phone));
        env.add_filter("maps_url", |value: Value| map_str(&value, maps_search_url));
        env.add_filter("initials", |value: Value| {
            map_str(&value, masader_content::initials)
        });
        env.add_test("internal", |value: Value| {
            value.as_str().is_some_and(is_internal_href)
        });
        env.add_function("icon", |name: Value| {
            Value::from_safe_string(icon_svg(name.as_str().unwrap_or_default()))
        });

        Ok(Self { env })
    }

    /// Render a registered template.
    pub fn render<S: Serialize>(&self, template: &str, context: S) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(template)?;
        Ok(tmpl.render(context)?)
    }

    /// Render an ad-hoc template source with the engine's filters.
    pub fn render_str<S: Serialize>(
        &self,
        source: &str,
        context: S,
    ) -> Result<String, minijinja::Error> {
        self.env.render_str(source, context)
    }
}

/// HTML auto-escaping that leaves `/` alone so hrefs stay readable.
fn html_formatter(out: &mut Output, state: &State, value: &Value) -> Result<(), minijinja::Error> {
    match value.as_str() {
        Some(s) if matches!(state.auto_escape(), AutoEscape::Html) && !value.is_safe() => {
            for c in s.chars() {
                match c {
                    '&' => out.write_str("&amp;")?,
                    '<' => out.write_str("&lt;")?,
                    '>' => out.write_str("&gt;")?,
                    '"' => out.write_str("&quot;")?,
                    '\'' => out.write_str("&#x27;")?,
                    c => out.write_char(c)?,
                }
            }
            Ok(())
        }
        _ => minijinja::escape_formatter(out, state, value),
    }
}

/// Apply `f` to string values; anything else (including undefined) renders empty.
fn map_str(value: &Value, f: impl Fn(&str) -> String) -> String {
    value.as_str().map(f).unwrap_or_default()
}

const TEMPLATES: [(&str, &str); 9] = [
    ("base.html", BASE_TEMPLATE),
    ("header.html", HEADER_TEMPLATE),
    ("hero.html", HERO_TEMPLATE),
    ("services.html", SERVICES_TEMPLATE),
    ("about.html", ABOUT_TEMPLATE),
    ("contact.html", CONTACT_TEMPLATE),
    ("footer.html", FOOTER_TEMPLATE),
    ("home.html", HOME_TEMPLATE),
    ("document.html", DOCUMENT_TEMPLATE),
];

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="ar" dir="rtl">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{% if page.title %}{{ page.title }} | {% endif %}{{ site.business.company_name }}</title>
  {% if page.description %}<meta name="description" content="{{ page.description }}">
  {% endif %}<link rel="stylesheet" href="{{ base_url }}assets/main.css">
  {% for style in styles %}<link rel="stylesheet" href="{{ style }}">
  {% endfor %}
</head>
<body>
  <a class="skip-link" href="#main">تخطَّ إلى المحتوى</a>
  {% include "header.html" %}
  <main id="main">
    {% block content %}{% endblock %}
  </main>
  {% include "footer.html" %}
  <div class="toasts" aria-live="polite"></div>
  <script src="{{ base_url }}assets/main.js" defer></script>
  {% if live_reload %}<script src="/__reload.js"></script>{% endif %}
</body>
</html>"##;

const HEADER_TEMPLATE: &str = r##"{% set header = site.header %}
<header class="site-header{% if header.sticky %} is-sticky{% endif %}" aria-label="رأس الصفحة">
  <div class="container header-inner">
    <a href="/" class="brand" aria-label="الانتقال إلى الصفحة الرئيسية">
      <span class="brand-mark" aria-hidden="true"><span></span></span>
      <span class="brand-text">
        <strong>{{ site.business.short_name }}</strong>
        <small>{{ site.business.tagline }}</small>
      </span>
    </a>
    <nav class="main-nav" aria-label="التنقل الرئيسي">
      <ul>
      {% for link in nav %}
        <li><a href="{{ link.href }}"{% if link.active %} class="active" aria-current="page"{% endif %}>{{ link.label }}</a></li>
      {% endfor %}
      </ul>
    </nav>
    <div class="header-actions">
      <a class="btn btn-primary header-call" href="{{ header.phone | tel }}" aria-label="اتصل بنا على {{ header.phone | phone }}">
        {{ icon("phone") }}<span dir="ltr">{{ header.phone | phone }}</span>
      </a>
      <button type="button" class="menu-toggle" aria-expanded="false" aria-controls="mobile-nav" aria-label="فتح القائمة">
        {{ icon("menu") }}
      </button>
    </div>
  </div>
  <nav id="mobile-nav" class="mobile-nav" aria-label="قائمة الجوال" hidden>
    <ul>
    {% for link in nav %}
      <li><a href="{{ link.href }}"{% if link.active %} class="active" aria-current="page"{% endif %}>{{ link.label }}</a></li>
    {% endfor %}
    </ul>
    <a class="btn btn-primary btn-block" href="{{ header.phone | tel }}">
      {{ icon("phone") }}<span>اتصل بنا</span> <span dir="ltr">{{ header.phone | phone }}</span>
    </a>
  </nav>
</header>"##;

const HERO_TEMPLATE: &str = r##"{% set hero = site.hero %}
<section id="home" class="hero" aria-labelledby="hero-title">
  <div class="container hero-grid">
    <div class="hero-copy">
      {% if hero.badge %}<span class="badge">{{ icon("shield") }}{{ hero.badge }}</span>{% endif %}
      <h1 id="hero-title">{{ hero.title }}</h1>
      <p class="lead">{{ hero.subtitle }}</p>
      <div class="hero-actions">
        {% if hero.primary_cta_href %}
        <a class="btn btn-primary btn-lg" href="{{ hero.primary_cta_href }}">{{ hero.primary_cta_label }}</a>
        {% else %}
        <button type="button" class="btn btn-primary btn-lg">{{ hero.primary_cta_label }}</button>
        {% endif %}
        {% if hero.secondary_cta_tel %}
        <a class="btn btn-outline btn-lg" href="{{ hero.secondary_cta_tel | tel }}">{{ icon("phone") }}{{ hero.secondary_cta_label }}</a>
        {% endif %}
      </div>
      {% if hero.stats %}
      <ul class="hero-stats">
      {% for stat in hero.stats %}
        <li id="hero-stat-{{ stat.id }}">
          <span class="stat-icon">{{ icon(stat.icon) }}</span>
          <span>
            <strong>{{ stat.label }}</strong>
            {% if stat.description %}<small>{{ stat.description }}</small>{% endif %}
          </span>
        </li>
      {% endfor %}
      </ul>
      {% endif %}
    </div>
    <div class="hero-visual" aria-hidden="true">
      <div class="device-card">
        {{ icon("device") }}
        <p>{{ hero.device_hint }}</p>
      </div>
    </div>
  </div>
</section>"##;

const SERVICES_TEMPLATE: &str = r##"{% set services = site.services %}
<section id="services" class="section services" aria-labelledby="services-title">
  <div class="container">
    <header class="section-head">
      {% if services.eyebrow %}<span class="eyebrow">{{ services.eyebrow }}</span>{% endif %}
      <h2 id="services-title">{{ services.heading }}</h2>
      {% if services.subheading %}<p>{{ services.subheading }}</p>{% endif %}
    </header>
    <div class="cards">
    {% for service in services.services %}
      <article class="card service-card" id="service-{{ service.id }}">
        <span class="card-icon">{{ icon(service.icon) }}</span>
        <h3>{{ service.title }}</h3>
        <p>{{ service.description }}</p>
        {% if service.benefits %}
        <ul class="checklist">
        {% for benefit in service.benefits %}
          <li>{{ icon("check") }}{{ benefit }}</li>
        {% endfor %}
        </ul>
        {% endif %}
      </article>
    {% endfor %}
    </div>
    {% if services.info_items %}
    <aside class="card info-panel" aria-labelledby="services-info-title">
      <h3 id="services-info-title">{{ services.info_title }}</h3>
      {% if services.info_text %}<p>{{ services.info_text }}</p>{% endif %}
      <dl>
      {% for item in services.info_items %}
        <div id="info-{{ item.id }}">
          <dt>{{ item.title }}</dt>
          <dd>{{ item.text }}</dd>
        </div>
      {% endfor %}
      </dl>
    </aside>
    {% endif %}
  </div>
</section>"##;

const ABOUT_TEMPLATE: &str = r##"{% set about = site.about %}
<section id="about" class="section about{% if about.layout == "compact" %} is-compact{% endif %}" aria-labelledby="about-title">
  <div class="container">
    <header class="section-head">
      {% if about.eyebrow %}<span class="eyebrow">{{ icon("shield") }}{{ about.eyebrow }}</span>{% endif %}
      <h2 id="about-title">{{ about.heading }}</h2>
      {% if about.subheading %}<p>{{ about.subheading }}</p>{% endif %}
    </header>

    <div class="about-grid">
      <article class="card mission">
        <h3>{{ about.mission_title }}</h3>
        <p>{{ about.mission_body }}</p>
        {% if about.highlights %}
        <ul class="checklist">
        {% for highlight in about.highlights %}
          <li>{{ icon("check") }}{{ highlight }}</li>
        {% endfor %}
        </ul>
        {% endif %}
      </article>
      {% if about.stats %}
      <dl class="stats">
      {% for stat in about.stats %}
        <div class="stat" id="stat-{{ stat.id }}">
          <dd{% if stat.aria_label %} aria-label="{{ stat.aria_label }}"{% endif %}>{{ stat.value }}</dd>
          <dt>{{ stat.label }}</dt>
        </div>
      {% endfor %}
      </dl>
      {% endif %}
    </div>

    {% if about.certifications %}
    <div class="about-block">
      <h3>الشهادات والتراخيص</h3>
      <ul class="cards">
      {% for cert in about.certifications %}
        <li class="card" id="cert-{{ cert.id }}">
          <span class="card-icon">{{ icon("award") }}</span>
          <strong>{{ cert.title }}</strong>
          <small>{{ cert.issuer }}</small>
          {% if cert.description %}<p>{{ cert.description }}</p>{% endif %}
        </li>
      {% endfor %}
      </ul>
    </div>
    {% endif %}

    {% if about.partnerships %}
    <div class="about-block">
      <h3>شراكات وتكاملات</h3>
      <ul class="cards">
      {% for partner in about.partnerships %}
        <li class="card" id="partner-{{ partner.id }}">
          <span class="card-icon">{{ icon("handshake") }}</span>
          <strong>{{ partner.name }}</strong>
          {% if partner.role %}<small>{{ partner.role }}</small>{% endif %}
          {% if partner.description %}<p>{{ partner.description }}</p>{% endif %}
        </li>
      {% endfor %}
      </ul>
    </div>
    {% endif %}

    {% if about.team_credentials %}
    <div class="about-block">
      <h3>فريق العمل</h3>
      <ul class="cards">
      {% for credential in about.team_credentials %}
        <li class="card" id="team-{{ credential.id }}">
          <span class="card-icon">{{ icon("users") }}</span>
          <strong>{{ credential.title }}</strong>
          <small>{{ credential.authority }}</small>
          {% if credential.detail %}<p>{{ credential.detail }}</p>{% endif %}
        </li>
      {% endfor %}
      </ul>
    </div>
    {% endif %}

    {% if about.testimonials %}
    <div class="about-block">
      <h3>آراء العملاء</h3>
      <div class="cards">
      {% for testimonial in about.testimonials %}
        <figure class="card testimonial" id="testimonial-{{ testimonial.id }}">
          <blockquote>{{ testimonial.quote }}</blockquote>
          <figcaption>
            <span class="avatar" aria-hidden="true">{{ testimonial.name | initials }}</span>
            <span>
              <strong>{{ testimonial.name }}</strong>
              {% if testimonial.role %}<small>{{ testimonial.role }}</small>{% endif %}
            </span>
            {% if testimonial.top_rated %}
            <span class="top-rated" aria-label="تقييم خمس نجوم">{{ icon("star") }}</span>
            {% endif %}
          </figcaption>
        </figure>
      {% endfor %}
      </div>
    </div>
    {% endif %}

    {% if about.trust_badges %}
    <ul class="trust-badges" aria-label="مؤشرات الثقة">
    {% for badge in about.trust_badges %}
      <li>{{ icon("shield") }}{{ badge }}</li>
    {% endfor %}
    </ul>
    {% endif %}
  </div>
</section>"##;

const CONTACT_TEMPLATE: &str = r##"{% set contact = site.contact %}
<section id="contact" class="section contact" aria-labelledby="contact-title">
  <div class="container">
    <header class="section-head">
      <h2 id="contact-title">{{ contact.heading }}</h2>
      {% if contact.subheading %}<p>{{ contact.subheading }}</p>{% endif %}
    </header>
    <div class="contact-grid">
      <form class="card contact-form" data-endpoint="{{ base_url }}api/contact" novalidate>
        <div class="field">
          <label for="contact-name">الاسم الكامل</label>
          <input id="contact-name" name="name" type="text" autocomplete="name" required>
        </div>
        <div class="field">
          <label for="contact-phone">رقم الجوال</label>
          <input id="contact-phone" name="phone" type="tel" dir="ltr" autocomplete="tel" placeholder="05XXXXXXXX" required>
        </div>
        <div class="field">
          <label for="contact-email">البريد الإلكتروني</label>
          <input id="contact-email" name="email" type="email" dir="ltr" autocomplete="email" required>
        </div>
        <div class="field">
          <label for="contact-service">نوع الخدمة</label>
          <select id="contact-service" name="service" required>
            <option value="">اختر نوع الخدمة</option>
            {% for option in contact.services %}
            <option value="{{ option.value }}">{{ option.label }}</option>
            {% endfor %}
          </select>
        </div>
        <div class="field">
          <label for="contact-message">الرسالة</label>
          <textarea id="contact-message" name="message" rows="5" required></textarea>
        </div>
        <button type="submit" class="btn btn-primary btn-block">{{ icon("send") }}<span>إرسال الطلب</span></button>
      </form>

      <div class="contact-details">
        <div class="card">
          <h3>{{ icon("map-pin") }}العنوان</h3>
          <p>{{ contact.address }}</p>
          <a class="link" href="{{ contact.address | maps_url }}" target="_blank" rel="noopener noreferrer">فتح في الخرائط {{ icon("external") }}</a>
        </div>
        {% if contact.phones %}
        <div class="card">
          <h3>{{ icon("phone") }}الهاتف</h3>
          <ul>
          {% for phone in contact.phones %}
            <li><a href="{{ phone | tel }}" dir="ltr">{{ phone | phone }}</a></li>
          {% endfor %}
          </ul>
        </div>
        {% endif %}
        {% if contact.emails %}
        <div class="card">
          <h3>{{ icon("mail") }}البريد الإلكتروني</h3>
          <ul>
          {% for email in contact.emails %}
            <li><a href="{{ email | mailto }}" dir="ltr">{{ email }}</a></li>
          {% endfor %}
          </ul>
        </div>
        {% endif %}
        {% if contact.working_hours %}
        <div class="card">
          <h3>{{ icon("clock") }}ساعات العمل</h3>
          <dl class="hours">
          {% for row in contact.working_hours %}
            <div><dt>{{ row.days }}</dt><dd>{{ row.hours }}</dd></div>
          {% endfor %}
          </dl>
        </div>
        {% endif %}
        {% if contact.show_social and contact.linkedin_url %}
        <a class="btn btn-outline" href="{{ contact.linkedin_url }}" target="_blank" rel="noopener noreferrer" aria-label="لينكدإن">{{ icon("linkedin") }}<span>تابعنا على لينكدإن</span></a>
        {% endif %}
      </div>
    </div>
    {% if contact.map_embed_src %}
    <div class="map">
      <iframe src="{{ contact.map_embed_src }}" title="موقع المكتب على الخريطة" loading="lazy" referrerpolicy="no-referrer-when-downgrade" allowfullscreen></iframe>
    </div>
    {% endif %}
  </div>
</section>"##;

const FOOTER_TEMPLATE: &str = r##"{% set footer = site.footer %}
<footer class="site-footer" aria-label="تذييل الصفحة">
  <div class="container footer-grid">
    <div>
      <h2 class="footer-title">{{ footer.company_name }}</h2>
      <p>{{ footer.description }}</p>
      {% if footer.show_social and footer.linkedin_url %}
      <a class="social" href="{{ footer.linkedin_url }}" target="_blank" rel="noopener noreferrer" aria-label="لينكدإن">{{ icon("linkedin") }}</a>
      {% endif %}
    </div>
    <nav aria-label="روابط سريعة">
      <h3>روابط سريعة</h3>
      <ul>
      {% for link in footer.quick_links %}
        <li>
        {% if link.href is internal %}
          <a href="{{ link.href }}">{{ link.label }}</a>
        {% else %}
          <a href="{{ link.href }}" target="_blank" rel="noopener noreferrer">{{ link.label }}</a>
        {% endif %}
        </li>
      {% endfor %}
      {% for doc in documents %}
        <li><a href="{{ doc.href }}">{{ doc.title }}</a></li>
      {% endfor %}
      </ul>
    </nav>
    <div>
      <h3>تواصل معنا</h3>
      <ul class="footer-contact">
        <li>{{ icon("map-pin") }}<span>{{ footer.address }}</span></li>
        <li>{{ icon("phone") }}<a href="{{ footer.phone | tel }}" dir="ltr">{{ footer.phone | phone }}</a></li>
        <li>{{ icon("mail") }}<a href="{{ footer.email | mailto }}" dir="ltr">{{ footer.email }}</a></li>
      </ul>
    </div>
    <div>
      <h3>ساعات العمل</h3>
      <ul class="footer-hours">
        {% if footer.working_hours.weekdays %}<li>{{ icon("clock") }}{{ footer.working_hours.weekdays }}</li>{% endif %}
        {% if footer.working_hours.weekend %}<li>{{ icon("clock") }}{{ footer.working_hours.weekend }}</li>{% endif %}
      </ul>
    </div>
  </div>
  <div class="container footer-bottom">
    <p>© {{ year }} {{ footer.company_name }}. جميع الحقوق محفوظة.</p>
    {% if license_line %}<p class="licenses">{{ license_line }}</p>{% endif %}
    <p>باستخدامك لهذا الموقع فإنك توافق على <a href="{{ footer.terms_link.href }}">{{ footer.terms_link.label }}</a>.</p>
  </div>
</footer>"##;

const HOME_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
{% include "hero.html" %}
{% include "services.html" %}
{% include "about.html" %}
{% include "contact.html" %}
{% endblock %}"##;

const DOCUMENT_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<article class="section document">
  <div class="container narrow">
    <nav class="breadcrumb" aria-label="مسار التنقل">
      <a href="/">الرئيسية</a>
      <span aria-hidden="true">/</span>
      <span aria-current="page">{{ page.title }}</span>
    </nav>
    <header class="doc-head">
      <h1>{{ page.title }}</h1>
      {% if page.description %}<p class="lead">{{ page.description }}</p>{% endif %}
      {% if page.updated %}<p class="muted">آخر تحديث: <time datetime="{{ page.updated }}">{{ page.updated }}</time></p>{% endif %}
    </header>
    {% if toc | length > 1 %}
    <aside class="card toc" aria-label="محتويات الصفحة">
      <h2>محتويات الصفحة</h2>
      <ol>
      {% for entry in toc %}
        <li class="toc-level-{{ entry.level }}"><a href="#{{ entry.id }}">{{ entry.title }}</a></li>
      {% endfor %}
      </ol>
    </aside>
    {% endif %}
    <div class="prose">
      {{ content | safe }}
    </div>
    <p class="doc-cta"><a class="btn btn-outline" href="/#contact">{{ icon("mail") }}<span>تواصل معنا</span></a></p>
  </div>
</article>
{% endblock %}"##;
