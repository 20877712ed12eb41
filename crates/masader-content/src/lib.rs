//! Content model for the Masader recruitment-office website.
//!
//! Every section of the site is described by a plain configuration struct with
//! Arabic defaults. `site.toml` can override any field; the composition root
//! ([`SiteConfig::compose`]) then applies the shared business data the way the
//! home page wires it into each section.

pub mod config;
pub mod document;
pub mod frontmatter;
pub mod phone;
pub mod policy;
pub mod sections;

pub use config::{
    load_site, BuildSettings, ContentError, ServerSettings, Site, SiteConfig, SubmissionKind,
    SubmissionSettings,
};
pub use document::{
    is_valid_slug, load_documents, markdown_to_html, parse_document, Document, DocumentError,
    TocEntry,
};
pub use frontmatter::{Frontmatter, FrontmatterError};
pub use sections::{
    initials, is_internal_href, AboutConfig, AboutLayout, Business, Certification, ContactConfig,
    FooterConfig, FooterHours, HeaderConfig, HeroConfig, HeroIcon, HeroStat, InfoItem,
    LicenseNumbers, NavItem, NavLink, Partnership, QuickLink, Service, ServiceOption,
    ServicesConfig, Stat, TeamCredential, Testimonial, WorkingHour,
};
