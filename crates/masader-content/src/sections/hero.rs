use serde::{Deserialize, Deserializer, Serialize};

/// Icon shown next to a hero trust indicator. Unknown names fall back to the shield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeroIcon {
    #[default]
    Shield,
    Phone,
    Device,
}

impl<'de> Deserialize<'de> for HeroIcon {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.trim().to_lowercase().as_str() {
            "phone" => Self::Phone,
            "device" => Self::Device,
            _ => Self::Shield,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroStat {
    pub id: String,
    #[serde(default)]
    pub icon: HeroIcon,
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub title: String,
    pub subtitle: String,
    pub badge: String,
    pub primary_cta_label: String,
    /// Link target for the primary button; empty renders a plain button
    pub primary_cta_href: String,
    pub secondary_cta_label: String,
    /// Phone number for the secondary button; empty hides it
    pub secondary_cta_tel: String,
    pub stats: Vec<HeroStat>,
    pub device_hint: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            title: "خدمات استقدام موثوقة للعمالة المنزلية".to_string(),
            subtitle: "نوفّر في مكتب مصادر لإستقدام العمالة المنزلية كفاءات مختارة بعناية، مع إجراءات موثوقة وسريعة، ودعم كامل حتى مباشرة العمل. خبرتنا تمتد لسنوات في تلبية احتياجات الأسر في الرياض والمملكة.".to_string(),
            badge: "مكتب مصادر لإستقدام العمالة المنزلية — الرياض".to_string(),
            primary_cta_label: "طلب استشارة".to_string(),
            primary_cta_href: "/#contact".to_string(),
            secondary_cta_label: "اتصل بنا الآن".to_string(),
            secondary_cta_tel: "+966555555555".to_string(),
            stats: vec![
                stat("exp", HeroIcon::Shield, "أكثر من 10 سنوات خبرة"),
                stat("licensed", HeroIcon::Shield, "منشأة مرخّصة ومعتمدة"),
                stat("support", HeroIcon::Phone, "دعم واستجابة سريعة"),
            ],
            device_hint: "واجهة متوافقة مع الجوال — سهولة في الطلب والمتابعة".to_string(),
        }
    }
}

fn stat(id: &str, icon: HeroIcon, label: &str) -> HeroStat {
    HeroStat {
        id: id.to_string(),
        icon,
        label: label.to_string(),
        description: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        stat: HeroStat,
    }

    #[test]
    fn unknown_icons_fall_back_to_shield() {
        let parsed: Wrapper =
            toml::from_str("[stat]\nid = \"x\"\nicon = \"rocket\"\nlabel = \"y\"").unwrap();

        assert_eq!(parsed.stat.icon, HeroIcon::Shield);
    }

    #[test]
    fn known_icons_parse() {
        let parsed: Wrapper =
            toml::from_str("[stat]\nid = \"x\"\nicon = \"device\"\nlabel = \"y\"").unwrap();

        assert_eq!(parsed.stat.icon, HeroIcon::Device);
    }
}
