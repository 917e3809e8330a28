//! Linux-safe filename stem sanitization.

/// Longest filename Linux accepts (NAME_MAX), in bytes.
pub const NAME_MAX: usize = 255;

/// Sanitizes a filename stem for safe use on Linux, leaving room for `reserve`
/// bytes of suffix (extension or `-stores.json`).
///
/// - Replaces NUL, `\`, and control characters with `_` (`/` is already gone)
/// - Trims leading/trailing spaces and dots
/// - Truncates on a char boundary so stem + suffix fits in NAME_MAX
pub fn sanitize_stem(stem: &str, reserve: usize) -> String {
    let replaced: String = stem
        .chars()
        .map(|c| {
            if c == '\0' || c == '\\' || c == '/' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    let trimmed = replaced.trim_matches(|c| c == ' ' || c == '.');

    let limit = NAME_MAX.saturating_sub(reserve);
    if trimmed.len() > limit {
        let mut take = limit;
        while take > 0 && !trimmed.is_char_boundary(take) {
            take -= 1;
        }
        trimmed[..take].to_string()
    } else {
        trimmed.to_string()
    }
}
