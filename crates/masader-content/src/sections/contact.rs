use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHour {
    pub days: String,
    pub hours: String,
}

/// An entry in the contact form's service catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOption {
    /// Stable key submitted with the form
    pub value: String,
    /// Display label
    pub label: String,
}

impl ServiceOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// The catalog used when none is configured.
    pub fn default_catalog() -> Vec<Self> {
        vec![
            Self::new("housemaid", "استقدام عاملة منزلية"),
            Self::new("driver", "استقدام سائق خاص"),
            Self::new("nanny", "استقدام مربية أطفال"),
            Self::new("cook", "استقدام طباخة منزلية"),
            Self::new("other", "أخرى"),
        ]
    }
}

/// Static half of the contact section: contact details, map and the form's catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub heading: String,
    pub subheading: String,
    pub address: String,
    pub map_embed_src: String,
    pub phones: Vec<String>,
    pub emails: Vec<String>,
    pub working_hours: Vec<WorkingHour>,
    pub services: Vec<ServiceOption>,
    pub show_social: bool,
    pub linkedin_url: Option<String>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            heading: "تواصل معنا".to_string(),
            subheading: "يسعدنا خدمتكم والإجابة على استفساراتكم حول خدمات الاستقدام.".to_string(),
            address: "الرياض، حي الياسمين، طريق أنس بن مالك، مكتب مصادر لإستقدام العمالة المنزلية"
                .to_string(),
            map_embed_src: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3620.688169293428!2d46.6162466!3d24.8371578!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3e2efd2b2e7f5fcd%3A0x2f5c1d6e8e2ae9ab!5e0!3m2!1sar!2ssa!4v1735945600000!5m2!1sar!2ssa".to_string(),
            phones: vec!["+966 55 123 4567".to_string(), "+966 11 234 5678".to_string()],
            emails: vec!["info@masader.sa".to_string(), "support@masader.sa".to_string()],
            working_hours: vec![
                hours("الأحد - الخميس", "9:00 صباحاً - 6:00 مساءً"),
                hours("السبت", "10:00 صباحاً - 2:00 مساءً"),
                hours("الجمعة", "مغلق"),
            ],
            services: ServiceOption::default_catalog(),
            show_social: true,
            linkedin_url: None,
        }
    }
}

impl ContactConfig {
    /// Look up a catalog entry by its key.
    pub fn find_service(&self, value: &str) -> Option<&ServiceOption> {
        self.services.iter().find(|s| s.value == value)
    }
}

fn hours(days: &str, hours: &str) -> WorkingHour {
    WorkingHour {
        days: days.to_string(),
        hours: hours.to_string(),
    }
}
