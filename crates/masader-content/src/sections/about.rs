use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub id: String,
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub aria_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub id: String,
    pub title: String,
    pub issuer: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partnership {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    pub quote: String,
    /// 1-5
    #[serde(default)]
    pub rating: Option<u8>,
}

impl Testimonial {
    /// Five-star reviews get a badge.
    pub fn is_top_rated(&self) -> bool {
        self.rating.is_some_and(|r| r >= 5)
    }
}

/// Serialized with a computed `top_rated` flag for the templates.
impl Serialize for Testimonial {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Testimonial", 6)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("role", &self.role)?;
        state.serialize_field("quote", &self.quote)?;
        state.serialize_field("rating", &self.rating)?;
        state.serialize_field("top_rated", &self.is_top_rated())?;
        state.end()
    }
}

/// First letter of each of the first two words of `name`.
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter(|w| !w.is_empty())
        .take(2)
        .filter_map(|w| w.chars().next())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamCredential {
    pub id: String,
    pub title: String,
    pub authority: String,
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AboutLayout {
    Compact,
    #[default]
    Full,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutConfig {
    pub eyebrow: String,
    pub heading: String,
    pub subheading: String,
    pub mission_title: String,
    pub mission_body: String,
    pub highlights: Vec<String>,
    pub stats: Vec<Stat>,
    pub certifications: Vec<Certification>,
    pub partnerships: Vec<Partnership>,
    pub team_credentials: Vec<TeamCredential>,
    pub testimonials: Vec<Testimonial>,
    pub trust_badges: Vec<String>,
    pub layout: AboutLayout,
}

impl Default for AboutConfig {
    fn default() -> Self {
        Self {
            eyebrow: "موثوقية وامتثال قانوني".to_string(),
            heading: "من نحن".to_string(),
            subheading: "مكتب مصادر لإستقدام العمالة المنزلية - الرياض".to_string(),
            mission_title: "رسالتنا".to_string(),
            mission_body: "نسعى لتقديم حلول استقدام موثوقة، متوافقة مع الأنظمة، وبمعايير جودة عالية، لضمان راحة عملائنا وتلبية احتياجاتهم بفعالية واحترام.".to_string(),
            highlights: strings(&[
                "التزام كامل بأنظمة منصة مساند ولوائح الاستقدام",
                "عقود واضحة ومواعيد تسليم محددة",
                "مطابقة دقيقة للمرشحين لاحتياجات الأسرة",
                "دعم ما بعد الوصول وضمانات الخدمة",
            ]),
            stats: vec![
                Stat {
                    id: "years".to_string(),
                    label: "سنوات من الخبرة".to_string(),
                    value: "10+".to_string(),
                    aria_label: Some("أكثر من عشر سنوات من الخبرة".to_string()),
                },
                Stat {
                    id: "placements".to_string(),
                    label: "توظيفات ناجحة".to_string(),
                    value: "7,500+".to_string(),
                    aria_label: Some("أكثر من سبعة آلاف وخمسمائة توظيف ناجح".to_string()),
                },
                Stat {
                    id: "satisfaction".to_string(),
                    label: "رضا العملاء".to_string(),
                    value: "98%".to_string(),
                    aria_label: Some("نسبة رضا العملاء ثمانية وتسعون بالمائة".to_string()),
                },
            ],
            certifications: vec![
                Certification {
                    id: "misa-license".to_string(),
                    title: "ترخيص مكتب استقدام".to_string(),
                    issuer: "وزارة الموارد البشرية والتنمية الاجتماعية".to_string(),
                    description: Some(
                        "مصرح لنا بمزاولة نشاط الاستقدام وفق الأنظمة واللوائح المعمول بها."
                            .to_string(),
                    ),
                },
                Certification {
                    id: "chamber".to_string(),
                    title: "عضوية الغرفة التجارية".to_string(),
                    issuer: "غرفة الرياض".to_string(),
                    description: Some("التزام مهني وتجاري موثق.".to_string()),
                },
                Certification {
                    id: "iso".to_string(),
                    title: "إدارة جودة داخلية".to_string(),
                    issuer: "سياسات وإجراءات خدمة العملاء".to_string(),
                    description: Some("عمليات قياسية لمتابعة الطلبات وضمان الجودة.".to_string()),
                },
            ],
            partnerships: vec![
                Partnership {
                    id: "mhrsd".to_string(),
                    name: "وزارة الموارد البشرية والتنمية الاجتماعية".to_string(),
                    role: Some("تنظيم وترخيص".to_string()),
                    description: Some(
                        "التوافق الكامل مع متطلبات منصة مساند وأنظمة الاستقدام.".to_string(),
                    ),
                },
                Partnership {
                    id: "gov".to_string(),
                    name: "الجهات الحكومية ذات العلاقة".to_string(),
                    role: Some("تكامل وتحقق".to_string()),
                    description: Some("التكامل مع منصات حكومية لتحديث البيانات والتحقق.".to_string()),
                },
            ],
            team_credentials: vec![
                TeamCredential {
                    id: "consultants".to_string(),
                    title: "مستشارو استقدام معتمدون".to_string(),
                    authority: "خبرة سوقية وإجرائية".to_string(),
                    detail: Some(
                        "فهم عميق لأنظمة العمل وإجراءات إصدار التأشيرات والعقود.".to_string(),
                    ),
                },
                TeamCredential {
                    id: "compliance".to_string(),
                    title: "التزام قانوني وأمني".to_string(),
                    authority: "سياسات تدقيق داخلية".to_string(),
                    detail: Some("تدقيق دوري للعقود، حفظ السجلات، وحماية بيانات العملاء.".to_string()),
                },
            ],
            testimonials: vec![
                Testimonial {
                    id: "t1".to_string(),
                    name: "أبو سعود".to_string(),
                    role: Some("عميل أفراد - الرياض".to_string()),
                    quote: "تجربة سلسة وشفافية كاملة في المدد والتكاليف. تم توفير عاملة منزلية مناسبة خلال وقت قياسي.".to_string(),
                    rating: Some(5),
                },
                Testimonial {
                    id: "t2".to_string(),
                    name: "أم ريان".to_string(),
                    role: Some("عميلة أفراد - شمال الرياض".to_string()),
                    quote: "خدمة ما بعد البيع ممتازة ومتابعة مستمرة حتى بعد الوصول.".to_string(),
                    rating: Some(5),
                },
            ],
            trust_badges: strings(&["امتثال مساند", "عقود واضحة", "حماية بيانات", "خدمة ما بعد الوصول"]),
            layout: AboutLayout::Full,
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
