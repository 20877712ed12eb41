use serde::{Deserialize, Serialize};

/// A service card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub benefits: Vec<String>,
    /// Icon name understood by the renderer
    #[serde(default = "default_service_icon")]
    pub icon: String,
}

/// A row in the "additional information" panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoItem {
    pub id: String,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesConfig {
    pub eyebrow: String,
    pub heading: String,
    pub subheading: String,
    pub services: Vec<Service>,
    pub info_title: String,
    pub info_text: String,
    pub info_items: Vec<InfoItem>,
}

fn default_service_icon() -> String {
    "check".to_string()
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            eyebrow: "خدماتنا".to_string(),
            heading: "خدمات الاستقدام المنزلية".to_string(),
            subheading: "نقدّم حلول استقدام احترافية تلائم احتياجات الأسرة السعودية بمعايير عالية من الجودة والالتزام.".to_string(),
            services: vec![
                service(
                    "housekeepers",
                    "عامــلات منــازل",
                    "توفير عاملات منزل مدربات على الأعمال اليومية وإدارة شؤون المنزل بأسلوب احترافي.",
                    &["خبرة عملية موثقة", "انضباط والتزام بالمواعيد", "مرونة في المهام اليومية"],
                    "house",
                ),
                service(
                    "nannies",
                    "مربيات أطفال",
                    "رعاية آمنة ومهنية للأطفال مع اهتمام بالتربية السليمة والأنشطة التعليمية.",
                    &["رعاية شاملة ومتابعة يومية", "خبرة مع مختلف الأعمار", "أساليب تواصل تربوية"],
                    "grid",
                ),
                service(
                    "elderly-care",
                    "رعاية كبار السن",
                    "مقدمو رعاية ذوو خبرة لتقديم الدعم الصحي واليومي مع مراعاة الخصوصية والاحترام.",
                    &["معرفة بأساسيات الرعاية الصحية", "تعامل إنساني وصبور", "متابعة الأدوية والمواعيد"],
                    "panels",
                ),
                service(
                    "cooks",
                    "طهاة منزليون",
                    "طهاة متخصصون بإعداد وجبات متنوعة وصحية تلائم الأذواق والأنظمة الغذائية.",
                    &["إعداد قوائم طعام متنوعة", "معايير نظافة عالية", "خبرة في المأكولات المحلية والعالمية"],
                    "platter",
                ),
                service(
                    "drivers",
                    "سائقيـن",
                    "سائقون محترفون يتمتعون بالالتزام ومعرفة جيدة بالطرق داخل مدينة الرياض وخارجها.",
                    &["التزام بقواعد السلامة", "معرفة بالمناطق والطرق", "انضباط ودقة في المواعيد"],
                    "layout",
                ),
            ],
            info_title: "معلومات إضافية".to_string(),
            info_text: "نلتزم بتقديم تجربة سلسة وآمنة منذ تقديم الطلب وحتى مباشرة العمل.".to_string(),
            info_items: vec![
                info(
                    "visa",
                    "إجراءات التأشيرات",
                    "نتولى إدارة جميع معاملات التأشيرات والتفويض الإلكتروني بدقة وسرعة وفق اللوائح المعتمدة.",
                ),
                info(
                    "training",
                    "برامج تدريب",
                    "اختبارات ومراجعات قبل الوصول، مع برامج تعريفية لضمان جاهزية العمل من اليوم الأول.",
                ),
                info(
                    "guarantee",
                    "سياسة ضمان",
                    "ضمان استبدال خلال فترة محددة وشروط واضحة للعقد لضمان راحة وحقوق العميل.",
                ),
            ],
        }
    }
}

fn service(id: &str, title: &str, description: &str, benefits: &[&str], icon: &str) -> Service {
    Service {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        benefits: benefits.iter().map(|b| b.to_string()).collect(),
        icon: icon.to_string(),
    }
}

fn info(id: &str, title: &str, text: &str) -> InfoItem {
    InfoItem {
        id: id.to_string(),
        title: title.to_string(),
        text: text.to_string(),
    }
}
