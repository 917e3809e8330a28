//! Filename stem from a source URL.

/// Flattens a URL into a filename stem: scheme and a leading `www.` are dropped,
/// trailing slashes removed, and the remaining `/` separators turned into `-`.
///
/// Query strings and ports are kept as they appear.
pub fn stem_from_url(url: &str) -> String {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let rest = rest.strip_prefix("www.").unwrap_or(rest);
    rest.trim_end_matches('/').replace('/', "-")
}
