use serde::{Deserialize, Serialize};

/// A navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

/// A navigation entry resolved against the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// Site header: brand block, main navigation and the call button.
///
/// The mobile menu's open/closed flag lives in the browser; the header
/// itself has no other state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub phone: String,
    pub nav_items: Vec<NavItem>,
    pub sticky: bool,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            phone: "920000000".to_string(),
            nav_items: vec![
                nav("الرئيسية", "/"),
                nav("خدماتنا", "/#services"),
                nav("من نحن", "/#about"),
                nav("اتصل بنا", "/#contact"),
            ],
            sticky: true,
        }
    }
}

impl HeaderConfig {
    /// Navigation with the entry matching `current_path` marked active.
    pub fn nav_links(&self, current_path: Option<&str>) -> Vec<NavLink> {
        self.nav_items
            .iter()
            .map(|item| NavLink {
                label: item.label.clone(),
                href: item.href.clone(),
                active: current_path == Some(item.href.as_str()),
            })
            .collect()
    }
}

fn nav(label: &str, href: &str) -> NavItem {
    NavItem {
        label: label.to_string(),
        href: href.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_only_the_current_path_active() {
        let header = HeaderConfig::default();

        let links = header.nav_links(Some("/"));

        assert_eq!(links.len(), 4);
        assert!(links[0].active);
        assert!(links[1..].iter().all(|l| !l.active));
    }

    #[test]
    fn nothing_is_active_without_a_path() {
        let links = HeaderConfig::default().nav_links(None);

        assert!(links.iter().all(|l| !l.active));
    }
}
