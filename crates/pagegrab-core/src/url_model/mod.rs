//! URL validation and destination filename derivation.
//!
//! The filename is the URL itself flattened into one path component, so pages
//! from the same site land side by side with readable names.

mod sanitize;
mod stem;

pub use sanitize::{sanitize_stem, NAME_MAX};
pub use stem::stem_from_url;

use crate::error::GrabError;
use crate::sniff::ContentKind;

/// Stem used when the URL flattens to nothing usable.
pub const DEFAULT_STEM: &str = "download";

/// Replaces the extension when the saved file holds extracted store data.
pub const STORES_SUFFIX: &str = "-stores.json";

/// True if `s` matches `^https?://`.
pub fn is_http_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Validates a user-supplied URL before any network activity.
pub fn parse_http_url(s: &str) -> Result<url::Url, GrabError> {
    if !is_http_url(s) {
        return Err(GrabError::Usage(format!(
            "URL must start with http:// or https:// (got {s:?})"
        )));
    }
    url::Url::parse(s).map_err(|e| GrabError::Usage(format!("invalid URL {s:?}: {e}")))
}

/// Destination filename for `url` holding content of `kind`.
///
/// With `extract_stores` set and html content, the name ends in `-stores.json`
/// instead of the content extension.
///
/// # Examples
///
/// - `build_filename("https://www.example.com/page/", ContentKind::Html, false)` → `"example.com-page.html"`
/// - `build_filename("https://www.example.com/page/", ContentKind::Html, true)` → `"example.com-page-stores.json"`
pub fn build_filename(url: &str, kind: ContentKind, extract_stores: bool) -> String {
    let suffix = if extract_stores && kind.is_html() {
        STORES_SUFFIX.to_string()
    } else {
        format!(".{}", kind.extension())
    };

    let stem = sanitize_stem(&stem_from_url(url), suffix.len());
    let stem = if stem.is_empty() { DEFAULT_STEM } else { stem.as_str() };
    format!("{stem}{suffix}")
}
