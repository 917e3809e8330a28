//! Content type sniffing from downloaded bytes.
//!
//! Magic numbers decide binary formats; a few text heuristics catch markup and JSON;
//! the response `Content-Type` only breaks ties the bytes could not settle.

/// How many leading bytes the text heuristics look at.
const TEXT_PROBE_LEN: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Html,
    Json,
    PlainText,
    Javascript,
    Xml,
    Pdf,
    Jpeg,
    Png,
    Gif,
    Svg,
    Zip,
    Gzip,
    Tar,
    Bzip2,
    Unknown,
}

impl ContentKind {
    /// File extension (without the dot). Unknown content is saved as html.
    pub fn extension(self) -> &'static str {
        match self {
            ContentKind::Html | ContentKind::Unknown => "html",
            ContentKind::Json => "json",
            ContentKind::PlainText => "txt",
            ContentKind::Javascript => "js",
            ContentKind::Xml => "xml",
            ContentKind::Pdf => "pdf",
            ContentKind::Jpeg => "jpg",
            ContentKind::Png => "png",
            ContentKind::Gif => "gif",
            ContentKind::Svg => "svg",
            ContentKind::Zip => "zip",
            ContentKind::Gzip => "gz",
            ContentKind::Tar => "tar",
            ContentKind::Bzip2 => "bz2",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            ContentKind::Html | ContentKind::Unknown => "text/html",
            ContentKind::Json => "application/json",
            ContentKind::PlainText => "text/plain",
            ContentKind::Javascript => "application/javascript",
            ContentKind::Xml => "application/xml",
            ContentKind::Pdf => "application/pdf",
            ContentKind::Jpeg => "image/jpeg",
            ContentKind::Png => "image/png",
            ContentKind::Gif => "image/gif",
            ContentKind::Svg => "image/svg+xml",
            ContentKind::Zip => "application/zip",
            ContentKind::Gzip => "application/gzip",
            ContentKind::Tar => "application/x-tar",
            ContentKind::Bzip2 => "application/x-bzip2",
        }
    }

    /// Unknown content falls back to html, so it is eligible for extraction too.
    pub fn is_html(self) -> bool {
        matches!(self, ContentKind::Html | ContentKind::Unknown)
    }
}

/// Classifies `data`, consulting `content_type` (a raw `Content-Type` header value)
/// only when the bytes are inconclusive.
pub fn sniff(data: &[u8], content_type: Option<&str>) -> ContentKind {
    if let Some(kind) = detect_magic(data) {
        return kind;
    }
    if let Some(kind) = detect_text(data) {
        return kind;
    }
    content_type
        .and_then(kind_from_media_type)
        .unwrap_or(ContentKind::Unknown)
}

fn detect_magic(data: &[u8]) -> Option<ContentKind> {
    match data {
        [b'%', b'P', b'D', b'F', b'-', ..] => Some(ContentKind::Pdf),
        [0xFF, 0xD8, 0xFF, ..] => Some(ContentKind::Jpeg),
        [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, ..] => Some(ContentKind::Png),
        [b'G', b'I', b'F', b'8', b'7' | b'9', b'a', ..] => Some(ContentKind::Gif),
        [0x50, 0x4B, 0x03, 0x04, ..] | [0x50, 0x4B, 0x05, 0x06, ..] | [0x50, 0x4B, 0x07, 0x08, ..] => {
            Some(ContentKind::Zip)
        }
        [0x1F, 0x8B, ..] => Some(ContentKind::Gzip),
        [b'B', b'Z', b'h', ..] => Some(ContentKind::Bzip2),
        _ if is_tar_header(data) => Some(ContentKind::Tar),
        _ => None,
    }
}

fn is_tar_header(data: &[u8]) -> bool {
    data.len() >= 262 && &data[257..262] == b"ustar"
}

fn detect_text(data: &[u8]) -> Option<ContentKind> {
    let data = data.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(data);
    let start = data.iter().position(|b| !b.is_ascii_whitespace())?;
    let body = &data[start..];
    let probe = &body[..body.len().min(TEXT_PROBE_LEN)];
    let head = String::from_utf8_lossy(probe).to_ascii_lowercase();

    if head.starts_with("<svg") || (head.starts_with("<?xml") && head.contains("<svg")) {
        return Some(ContentKind::Svg);
    }
    if head.starts_with("<?xml") {
        return Some(ContentKind::Xml);
    }
    const HTML_OPENERS: [&str; 4] = ["<!doctype html", "<html", "<head", "<body"];
    if HTML_OPENERS.iter().any(|p| head.starts_with(p)) {
        return Some(ContentKind::Html);
    }
    if matches!(body.first(), Some(b'{' | b'[')) && serde_json::from_slice::<serde_json::Value>(body).is_ok() {
        return Some(ContentKind::Json);
    }
    None
}

/// Maps a `Content-Type` value (parameters allowed) to a kind.
pub fn kind_from_media_type(content_type: &str) -> Option<ContentKind> {
    let media = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    let kind = match media.as_str() {
        "text/html" | "application/xhtml+xml" => ContentKind::Html,
        "application/json" | "text/json" => ContentKind::Json,
        "text/plain" => ContentKind::PlainText,
        "application/javascript" | "text/javascript" | "application/ecmascript"
        | "application/x-javascript" => ContentKind::Javascript,
        "image/svg+xml" => ContentKind::Svg,
        "application/xml" | "text/xml" => ContentKind::Xml,
        "application/pdf" => ContentKind::Pdf,
        "image/jpeg" | "image/jpg" => ContentKind::Jpeg,
        "image/png" => ContentKind::Png,
        "image/gif" => ContentKind::Gif,
        "application/zip" | "application/x-zip-compressed" => ContentKind::Zip,
        "application/gzip" | "application/x-gzip" => ContentKind::Gzip,
        "application/x-tar" => ContentKind::Tar,
        "application/x-bzip2" => ContentKind::Bzip2,
        m if m.ends_with("+json") => ContentKind::Json,
        m if m.ends_with("+xml") => ContentKind::Xml,
        _ => return None,
    };
    Some(kind)
}
