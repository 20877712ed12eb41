//! Phone number display formatting and contact link helpers.

use url::form_urlencoded::byte_serialize;

/// Group a phone number for display.
///
/// Everything except digits and `+` is dropped first. International numbers
/// (leading `+`) are returned as-is after stripping. Two local patterns are
/// grouped: mobile numbers `05XXXXXXXX` as `05X XXX XXXX` and unified
/// numbers `920XXXXXX` as `9200 XXX XX`. Anything else passes through
/// stripped.
pub fn format_phone(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    if digits.starts_with('+') {
        return digits;
    }

    // ASCII only from here on, so byte slicing is safe.
    if digits.len() == 10 && digits.starts_with("05") {
        return format!("{} {} {}", &digits[..3], &digits[3..6], &digits[6..]);
    }

    if digits.len() == 9 && digits.starts_with("920") {
        return format!("{} {} {}", &digits[..4], &digits[4..7], &digits[7..]);
    }

    digits
}

/// `tel:` URI with all whitespace removed.
pub fn tel_href(phone: &str) -> String {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{compact}")
}

/// `mailto:` URI.
pub fn mailto_href(email: &str) -> String {
    format!("mailto:{}", email.trim())
}

/// Google Maps search link for a free-text address.
pub fn maps_search_url(address: &str) -> String {
    let query: String = byte_serialize(address.as_bytes()).collect();
    format!("https://maps.google.com/?q={query}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_local_mobile_numbers() {
        assert_eq!(format_phone("0551234567"), "055 123 4567");
        assert_eq!(format_phone("055-123-4567"), "055 123 4567");
    }

    #[test]
    fn groups_unified_numbers() {
        assert_eq!(format_phone("920012345"), "9200 123 45");
        assert_eq!(format_phone("9200 123 45"), "9200 123 45");
    }

    #[test]
    fn international_numbers_are_only_stripped() {
        assert_eq!(format_phone("+966 55 123 4567"), "+966551234567");
    }

    #[test]
    fn unknown_patterns_pass_through_stripped() {
        assert_eq!(format_phone("011 234 5678"), "0112345678");
        assert_eq!(format_phone("92001234"), "92001234");
        assert_eq!(format_phone(""), "");
    }

    #[test]
    fn builds_contact_links() {
        assert_eq!(tel_href("+966 55 123 4567"), "tel:+966551234567");
        assert_eq!(mailto_href("info@masader.sa"), "mailto:info@masader.sa");
    }

    #[test]
    fn encodes_map_queries() {
        let url = maps_search_url("الرياض، حي الياسمين");

        assert!(url.starts_with("https://maps.google.com/?q=%D8%A7"));
        assert!(!url.contains(' '));
    }
}
