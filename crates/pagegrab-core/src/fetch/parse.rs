//! Parse HTTP response header lines into ResponseMeta.

use super::ResponseMeta;

/// Parse collected header lines into ResponseMeta.
///
/// With redirects followed, libcurl reports one header block per hop. Each status
/// line starts a new block, so only the final response's headers survive.
pub(crate) fn parse_headers(lines: &[String]) -> ResponseMeta {
    let mut meta = ResponseMeta::default();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            meta = ResponseMeta::default();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-type") && !value.is_empty() {
                meta.content_type = Some(value.to_string());
            }
        }
    }

    meta
}
