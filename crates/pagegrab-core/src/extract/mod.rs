//! Store-locator extraction.
//!
//! Recovers store records from a retailer's directory page by scanning the tag
//! stream for a few known class names. Malformed markup never fails the scan; it
//! only drops whatever could not be matched.

mod scanner;
mod text;

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::{BufferQueue, Tokenizer, TokenizerOpts};
use serde::{Deserialize, Serialize};

use scanner::StoreScanner;

pub use text::{address_from_slug, parse_store_count, split_href, title_case, HrefSegments};

/// Label written to `source` in every extraction result.
pub const EXTRACTION_SOURCE: &str = "store-locator";

/// One store link from the directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreRecord {
    /// `href` exactly as found in the markup.
    pub url_path: String,
    /// First href segment, uppercased.
    pub state: String,
    /// Second href segment, title-cased.
    pub suburb: String,
    /// Third href segment, untouched.
    pub address_slug: String,
    /// `address_slug` with hyphens as spaces, title-cased.
    pub address: String,
    /// Number of stores behind the link (`data-count`), at least 1.
    pub store_count: u64,
    /// Link text; `None` when the name span never produced text.
    pub name: Option<String>,
}

/// Everything recovered from one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub source: String,
    pub page_title: Option<String>,
    pub location: Option<String>,
    /// Always `stores.len()`.
    pub total_stores: usize,
    pub stores: Vec<StoreRecord>,
}

impl ExtractionResult {
    pub fn new(
        page_title: Option<String>,
        location: Option<String>,
        stores: Vec<StoreRecord>,
    ) -> Self {
        Self {
            source: EXTRACTION_SOURCE.to_string(),
            page_title,
            location,
            total_stores: stores.len(),
            stores,
        }
    }
}

/// Scans `html` and returns the store listing it contains.
///
/// Pure: each call owns a fresh scanner, so concurrent or repeated calls never
/// share state.
pub fn extract_stores(html: &str) -> ExtractionResult {
    let tokenizer = Tokenizer::new(StoreScanner::default(), TokenizerOpts::default());
    let input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(html));
    // The sink never asks to suspend for scripts, so one feed drains the queue.
    let _ = tokenizer.feed(&input);
    tokenizer.end();

    let result = tokenizer.sink.finish();
    tracing::debug!(
        stores = result.total_stores,
        title = ?result.page_title,
        "extracted store listing"
    );
    result
}
