//! Per-section configuration with the site's default copy.
//!
//! Every struct is `#[serde(default)]`, so `site.toml` only needs the fields
//! it wants to change.

mod about;
mod contact;
mod footer;
mod header;
mod hero;
mod services;

use serde::{Deserialize, Serialize};

pub use about::{
    initials, AboutConfig, AboutLayout, Certification, Partnership, Stat, TeamCredential,
    Testimonial,
};
pub use contact::{ContactConfig, ServiceOption, WorkingHour};
pub use footer::{is_internal_href, FooterConfig, FooterHours, LicenseNumbers, QuickLink};
pub use header::{HeaderConfig, NavItem, NavLink};
pub use hero::{HeroConfig, HeroIcon, HeroStat};
pub use services::{InfoItem, Service, ServicesConfig};

/// Fixed business data shared by every section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Business {
    pub company_name: String,
    /// Short brand name shown in the header logo
    pub short_name: String,
    /// Second line under the brand name
    pub tagline: String,
    pub city: String,
    /// Unified hotline shown in the header
    pub hotline: String,
    /// Mobile number used for call-to-action links
    pub mobile: String,
    pub address: String,
    pub phones: Vec<String>,
    pub emails: Vec<String>,
    pub linkedin_url: Option<String>,
}

impl Default for Business {
    fn default() -> Self {
        Self {
            company_name: "مكتب مصادر لإستقدام العمالة المنزلية".to_string(),
            short_name: "مكتب مصادر".to_string(),
            tagline: "لإستقدام العمالة المنزلية".to_string(),
            city: "الرياض".to_string(),
            hotline: "920012345".to_string(),
            mobile: "+966 55 123 4567".to_string(),
            address: "الرياض، حي الياسمين، طريق أنس بن مالك، مكتب مصادر لإستقدام العمالة المنزلية"
                .to_string(),
            phones: vec!["+966 55 123 4567".to_string(), "+966 11 234 5678".to_string()],
            emails: vec!["info@masader.sa".to_string(), "support@masader.sa".to_string()],
            linkedin_url: Some("https://www.linkedin.com/company/masader".to_string()),
        }
    }
}

impl Business {
    /// First listed email, falling back to the footer default.
    pub fn primary_email(&self) -> String {
        self.emails
            .first()
            .cloned()
            .unwrap_or_else(|| FooterConfig::default().email)
    }
}
