//! One run: validate → fetch → sniff → (extract | passthrough) → write.

use anyhow::Context;
use std::path::{Path, PathBuf};

use crate::config::GrabConfig;
use crate::error::GrabError;
use crate::extract::extract_stores;
use crate::fetch::{fetch_to_file, FetchOptions};
use crate::sniff::{sniff, ContentKind};
use crate::storage::{write_extraction, write_passthrough, TempDownload};
use crate::url_model::{build_filename, parse_http_url};

/// What the user asked for.
#[derive(Debug, Clone)]
pub struct GrabRequest {
    pub url: String,
    pub extract_stores: bool,
    /// Directory the result is written to.
    pub output_dir: PathBuf,
}

/// What was written.
#[derive(Debug, Clone)]
pub struct GrabOutcome {
    pub path: PathBuf,
    pub kind: ContentKind,
    /// URL the body actually came from, after redirects.
    pub final_url: String,
    /// Body bytes received (after any content decoding).
    pub bytes: u64,
    /// Store count when the page was extracted.
    pub stores: Option<usize>,
}

/// Runs the whole pipeline for one URL.
///
/// The temp download is dropped (and deleted) on every error path before this
/// returns.
pub fn run(request: &GrabRequest, cfg: &GrabConfig) -> Result<GrabOutcome, GrabError> {
    let parsed = parse_http_url(&request.url)?;
    tracing::info!(
        url = %request.url,
        host = parsed.host_str().unwrap_or(""),
        extract_stores = request.extract_stores,
        "grab started"
    );

    ensure_dir(&request.output_dir)?;
    let mut temp = TempDownload::create_in(&request.output_dir)?;
    let fetched = fetch_to_file(&request.url, temp.file_mut(), &FetchOptions::from(cfg))?;

    let data = temp.read_all()?;
    let kind = sniff(&data, fetched.meta.content_type.as_deref());
    tracing::debug!(kind = ?kind, mime = kind.mime(), bytes = data.len(), "content sniffed");

    let extracting = request.extract_stores && kind.is_html();
    if request.extract_stores && !extracting {
        tracing::info!(kind = ?kind, "content is not html; --extract-stores ignored");
    }

    let file_name = build_filename(&request.url, kind, extracting);
    let path = request.output_dir.join(file_name);

    let stores = if extracting {
        let html = String::from_utf8_lossy(&data);
        let result = extract_stores(&html);
        write_extraction(&result, &path)?;
        drop(temp);
        Some(result.total_stores)
    } else {
        drop(data);
        write_passthrough(temp, kind, &path)?;
        None
    };

    tracing::info!(path = %path.display(), kind = ?kind, stores = ?stores, "grab finished");
    Ok(GrabOutcome {
        path,
        kind,
        final_url: fetched.effective_url,
        bytes: fetched.bytes_written,
        stores,
    })
}

fn ensure_dir(dir: &Path) -> Result<(), GrabError> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    Ok(())
}
