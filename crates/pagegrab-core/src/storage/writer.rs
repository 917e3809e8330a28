//! Output writers: raw passthrough and extracted store listings.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::TempDownload;
use crate::extract::ExtractionResult;
use crate::sniff::ContentKind;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Best-effort pretty-print of a JSON document. `None` if `data` is not valid JSON.
///
/// Key order and non-ASCII text are preserved. A leading UTF-8 BOM is dropped.
pub fn pretty_json(data: &[u8]) -> Option<Vec<u8>> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    let value: serde_json::Value = serde_json::from_slice(data).ok()?;
    let mut out = serde_json::to_vec_pretty(&value).ok()?;
    out.push(b'\n');
    Some(out)
}

/// Writes the download to `final_path` unchanged, except JSON which is re-indented
/// when it parses. A JSON body that does not parse is saved as-is without error.
pub fn write_passthrough(temp: TempDownload, kind: ContentKind, final_path: &Path) -> Result<()> {
    if kind == ContentKind::Json {
        let raw = temp.read_all()?;
        match pretty_json(&raw) {
            Some(pretty) => {
                fs::write(final_path, pretty)
                    .with_context(|| format!("failed to write {}", final_path.display()))?;
                return Ok(());
            }
            None => tracing::debug!("JSON pretty-print failed; keeping original bytes"),
        }
    }
    temp.persist(final_path)
}

/// Serializes `result` as indented UTF-8 JSON to `final_path`.
pub fn write_extraction(result: &ExtractionResult, final_path: &Path) -> Result<()> {
    let mut out = serde_json::to_vec_pretty(result).context("failed to serialize store listing")?;
    out.push(b'\n');
    fs::write(final_path, out).with_context(|| format!("failed to write {}", final_path.display()))?;
    Ok(())
}
