//! Field normalization for store links: count annotations, href segments, title-casing.

/// Count used when `data-count` is missing or carries no digits.
pub(crate) const DEFAULT_STORE_COUNT: u64 = 1;

/// Parses a count annotation such as `"(12)"` by keeping only ASCII digits.
///
/// No digits or a literal zero yield [`DEFAULT_STORE_COUNT`]; counts past
/// `u64::MAX` saturate.
pub fn parse_store_count(raw: &str) -> u64 {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return DEFAULT_STORE_COUNT;
    }
    match digits.parse::<u64>().unwrap_or(u64::MAX) {
        0 => DEFAULT_STORE_COUNT,
        n => n,
    }
}

/// Positional segments of a store href: `/state/suburb/address-slug`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HrefSegments<'a> {
    pub state: &'a str,
    pub suburb: &'a str,
    pub address_slug: &'a str,
}

/// Splits `href` on `/` after trimming slashes at both ends. Missing segments are `""`.
pub fn split_href(href: &str) -> HrefSegments<'_> {
    let mut parts = href.trim_matches('/').split('/');
    HrefSegments {
        state: parts.next().unwrap_or(""),
        suburb: parts.next().unwrap_or(""),
        address_slug: parts.next().unwrap_or(""),
    }
}

/// Capitalizes the first character of each whitespace- or hyphen-separated word and
/// lowercases the rest. Separators are kept as they are.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_whitespace() || c == '-' {
            out.push(c);
            at_word_start = true;
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Human-readable address from a slug: `123-main-street` → `123 Main Street`.
pub fn address_from_slug(slug: &str) -> String {
    title_case(&slug.replace('-', " "))
}
