//! Disk I/O and file lifecycle.
//!
//! Downloads land in a `.part` temp file next to the destination. Passthrough
//! output is moved into place with an atomic rename; re-encoded output (pretty
//! JSON, store listings) is written fresh and the temp file is dropped.

mod temp;
mod writer;

pub use temp::TempDownload;
pub use writer::{pretty_json, write_extraction, write_passthrough};

/// Temporary file suffix used before the final rename.
pub const TEMP_SUFFIX: &str = ".part";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{extract_stores, ExtractionResult};
    use crate::sniff::ContentKind;
    use std::io::Write;
    use std::path::Path;

    fn temp_with(dir: &Path, body: &[u8]) -> TempDownload {
        let mut temp = TempDownload::create_in(dir).unwrap();
        temp.file_mut().write_all(body).unwrap();
        temp.file_mut().flush().unwrap();
        temp
    }

    fn leftover_parts(dir: &Path) -> usize {
        std::fs::read_dir(dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(TEMP_SUFFIX))
            .count()
    }

    #[test]
    fn temp_is_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let temp = temp_with(dir.path(), b"partial");
        let path = temp.path().to_path_buf();
        assert!(path.exists());
        assert!(path.to_string_lossy().ends_with(".part"));
        drop(temp);
        assert!(!path.exists());
    }

    #[test]
    fn passthrough_moves_bytes_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let body: Vec<u8> = (0u8..=255).cycle().take(10_000).collect();
        let temp = temp_with(dir.path(), &body);
        let dest = dir.path().join("example.com-file.zip");
        write_passthrough(temp, ContentKind::Zip, &dest).unwrap();
        assert_eq!(std::fs::read(&dest).unwrap(), body);
        assert_eq!(leftover_parts(dir.path()), 0);
    }

    #[test]
    fn passthrough_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("example.com.html");
        std::fs::write(&dest, b"old").unwrap();
        let temp = temp_with(dir.path(), b"<html>new</html>");
        write_passthrough(temp, ContentKind::Html, &dest).unwrap();
        assert_eq!(std::fs::read(&dest).unwrap(), b"<html>new</html>");
    }

    #[test]
    fn json_is_pretty_printed_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let temp = temp_with(dir.path(), r#"{"zeta":1,"alpha":{"name":"Café"}}"#.as_bytes());
        let dest = dir.path().join("api.json");
        write_passthrough(temp, ContentKind::Json, &dest).unwrap();
        let text = std::fs::read_to_string(&dest).unwrap();
        assert_eq!(
            text,
            "{\n  \"zeta\": 1,\n  \"alpha\": {\n    \"name\": \"Café\"\n  }\n}\n"
        );
        assert_eq!(leftover_parts(dir.path()), 0);
    }

    #[test]
    fn invalid_json_kept_as_is() {
        let dir = tempfile::tempdir().unwrap();
        let temp = temp_with(dir.path(), b"{\"broken\": ");
        let dest = dir.path().join("broken.json");
        write_passthrough(temp, ContentKind::Json, &dest).unwrap();
        assert_eq!(std::fs::read(&dest).unwrap(), b"{\"broken\": ");
    }

    #[test]
    fn pretty_json_rejects_garbage() {
        assert!(pretty_json(b"not json").is_none());
        assert_eq!(pretty_json(b"[1,2]").unwrap(), b"[\n  1,\n  2\n]\n");
    }

    #[test]
    fn bom_prefixed_json_is_pretty_printed() {
        assert_eq!(pretty_json(b"\xEF\xBB\xBF{\"a\":1}").unwrap(), b"{\n  \"a\": 1\n}\n");

        let dir = tempfile::tempdir().unwrap();
        let temp = temp_with(dir.path(), b"\xEF\xBB\xBF[true]");
        let dest = dir.path().join("bom.json");
        write_passthrough(temp, ContentKind::Json, &dest).unwrap();
        assert_eq!(std::fs::read(&dest).unwrap(), b"[\n  true\n]\n");
        assert_eq!(leftover_parts(dir.path()), 0);
    }

    #[test]
    fn extraction_written_as_indented_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let html = r#"<span class="Hero-geo">Mönchengladbach</span>
            <a class="Directory-listLink" href="/nrw/mg/1-hauptstrasse" data-count="(2)"><span class="Directory-listLinkText">Zentrum</span></a>"#;
        let result = extract_stores(html);
        let dest = dir.path().join("stores-stores.json");
        write_extraction(&result, &dest).unwrap();
        let text = std::fs::read_to_string(&dest).unwrap();
        assert!(text.contains("\"location\": \"Mönchengladbach\""));
        assert!(text.contains("\n  \"total_stores\": 1,\n"));
        let parsed: ExtractionResult = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, result);
    }
}
