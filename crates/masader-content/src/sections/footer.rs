use serde::{Deserialize, Serialize};

/// A footer link. Hrefs not starting with `/` open in a new tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickLink {
    pub label: String,
    pub href: String,
}

impl QuickLink {
    pub fn is_internal(&self) -> bool {
        is_internal_href(&self.href)
    }
}

/// Site-relative links stay in the tab; everything else opens a new one.
pub fn is_internal_href(href: &str) -> bool {
    href.starts_with('/')
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterHours {
    pub weekdays: Option<String>,
    pub weekend: Option<String>,
}

impl Default for FooterHours {
    fn default() -> Self {
        Self {
            weekdays: Some("الأحد - الخميس: 9:00 ص - 6:00 م".to_string()),
            weekend: Some("الجمعة - السبت: إجازة".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LicenseNumbers {
    pub commercial: Option<String>,
    pub recruitment: Option<String>,
}

impl Default for LicenseNumbers {
    fn default() -> Self {
        Self {
            commercial: Some("سجل تجاري: 1010XXXXX".to_string()),
            recruitment: Some("ترخيص استقدام: 12XXXX".to_string()),
        }
    }
}

impl LicenseNumbers {
    /// Both numbers on one line, separated by a bullet.
    pub fn display(&self) -> String {
        let parts: Vec<&str> = [self.commercial.as_deref(), self.recruitment.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();
        parts.join(" • ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub company_name: String,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub working_hours: FooterHours,
    pub license_numbers: LicenseNumbers,
    pub quick_links: Vec<QuickLink>,
    /// Target of the "by using this site you agree to..." line
    pub terms_link: QuickLink,
    pub show_social: bool,
    pub linkedin_url: Option<String>,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            company_name: "مكتب مصادر لإستقدام العمالة المنزلية".to_string(),
            description: "نقدم حلولاً مهنية وموثوقة لاستقدام العمالة المنزلية بما يحقق أعلى معايير الجودة والالتزام في المملكة العربية السعودية.".to_string(),
            address: "الرياض، المملكة العربية السعودية".to_string(),
            phone: "+966 5 5555 5555".to_string(),
            email: "info@masader-sa.com".to_string(),
            working_hours: FooterHours::default(),
            license_numbers: LicenseNumbers::default(),
            quick_links: vec![
                link("الرئيسية", "/"),
                link("خدماتنا", "/#services"),
                link("من نحن", "/#about"),
                link("اتصل بنا", "/#contact"),
                link("سياسة الإرجاع", "/return-policy/"),
            ],
            terms_link: link("سياسة الإرجاع", "/return-policy/"),
            show_social: true,
            linkedin_url: None,
        }
    }
}

fn link(label: &str, href: &str) -> QuickLink {
    QuickLink {
        label: label.to_string(),
        href: href.to_string(),
    }
}
