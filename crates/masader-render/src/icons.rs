//! Inline SVG icons (24x24, stroke based).

const SHIELD: &str = r#"<path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"/><path d="m9 12 2 2 4-4"/>"#;
const PHONE: &str = r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z"/>"#;
const DEVICE: &str = r#"<rect x="5" y="2" width="14" height="20" rx="2"/><path d="M12 18h.01"/>"#;
const HOUSE: &str = r#"<path d="m3 10 9-7 9 7v10a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/><path d="M9 22V12h6v10"/>"#;
const GRID: &str = r#"<rect x="3" y="3" width="7" height="7" rx="1"/><rect x="14" y="3" width="7" height="7" rx="1"/><rect x="3" y="14" width="7" height="7" rx="1"/><rect x="14" y="14" width="7" height="7" rx="1"/>"#;
const PANELS: &str = r#"<rect x="3" y="3" width="18" height="18" rx="2"/><path d="M9 3v18"/><path d="M9 12h12"/>"#;
const PLATTER: &str = r#"<path d="M3 17h18"/><path d="M5 17a7 7 0 0 1 14 0"/><path d="M12 10V8"/><path d="M4 20h16"/>"#;
const LAYOUT: &str = r#"<rect x="3" y="3" width="18" height="18" rx="2"/><path d="M3 9h18"/><path d="M12 9v12"/>"#;
const CHECK: &str = r#"<path d="M20 6 9 17l-5-5"/>"#;
const MAIL: &str = r#"<rect x="2" y="4" width="20" height="16" rx="2"/><path d="m22 7-10 6L2 7"/>"#;
const MAP_PIN: &str = r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z"/><circle cx="12" cy="10" r="3"/>"#;
const CLOCK: &str = r#"<circle cx="12" cy="12" r="10"/><path d="M12 6v6l4 2"/>"#;
const LINKEDIN: &str = r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z"/><rect x="2" y="9" width="4" height="12"/><circle cx="4" cy="4" r="2"/>"#;
const MENU: &str = r#"<path d="M4 6h16"/><path d="M4 12h16"/><path d="M4 18h16"/>"#;
const CLOSE: &str = r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#;
const STAR: &str = r#"<path d="m12 2 3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01z"/>"#;
const AWARD: &str = r#"<circle cx="12" cy="8" r="6"/><path d="M15.48 12.89 17 22l-5-3-5 3 1.52-9.11"/>"#;
const USERS: &str = r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#;
const HANDSHAKE: &str = r#"<path d="m11 17 2 2a1 1 0 1 0 3-3"/><path d="m14 14 2.5 2.5a1 1 0 1 0 3-3l-3.88-3.88a3 3 0 0 0-4.24 0l-.88.88a1 1 0 1 1-3-3l2.81-2.81a5.79 5.79 0 0 1 7.06-.87l.47.28a2 2 0 0 0 1.42.25L21 4"/><path d="m21 3 1 11h-2"/><path d="M3 3 2 14l6.5 6.5a1 1 0 1 0 3-3"/><path d="M3 4h8"/>"#;
const SEND: &str = r#"<path d="m22 2-7 20-4-9-9-4z"/><path d="M22 2 11 13"/>"#;
const EXTERNAL: &str = r#"<path d="M15 3h6v6"/><path d="M10 14 21 3"/><path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>"#;

/// Inner SVG markup for `name`, or `None` if the icon is unknown.
fn paths(name: &str) -> Option<&'static str> {
    let paths = match name {
        "shield" => SHIELD,
        "phone" => PHONE,
        "device" => DEVICE,
        "house" => HOUSE,
        "grid" => GRID,
        "panels" => PANELS,
        "platter" => PLATTER,
        "layout" => LAYOUT,
        "check" => CHECK,
        "mail" => MAIL,
        "map-pin" => MAP_PIN,
        "clock" => CLOCK,
        "linkedin" => LINKEDIN,
        "menu" => MENU,
        "close" => CLOSE,
        "star" => STAR,
        "award" => AWARD,
        "users" => USERS,
        "handshake" => HANDSHAKE,
        "send" => SEND,
        "external" => EXTERNAL,
        _ => return None,
    };
    Some(paths)
}

/// A complete `<svg>` element. Unknown names render the check mark.
pub fn icon_svg(name: &str) -> String {
    let inner = paths(name).unwrap_or_else(|| {
        tracing::debug!("Unknown icon {:?}, using check", name);
        CHECK
    });

    format!(
        r#"<svg class="icon icon-{name}" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">{inner}</svg>"#,
        name = if paths(name).is_some() { name } else { "check" },
    )
}
