//! Flag-based scanner over the html5ever token stream.
//!
//! No tree is built. Each start/end tag toggles a handful of flags and text between
//! tags is routed by whichever flags are set. Anything unrecognized is skipped.

use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{Tag, TagKind, Token, TokenSink, TokenSinkResult};
use std::cell::RefCell;

use super::text::{address_from_slug, parse_store_count, split_href, title_case};
use super::{ExtractionResult, StoreRecord};

const STORE_LINK_CLASS: &str = "Directory-listLink";
const STORE_NAME_CLASS: &str = "Directory-listLinkText";
const HERO_TITLE_CLASS: &str = "Hero-title";
const HERO_GEO_CLASS: &str = "Hero-geo";
const DEFAULT_DATA_COUNT: &str = "(1)";

/// Mutable cursor of one extraction run.
#[derive(Debug, Default)]
struct ScanState {
    in_store_link: bool,
    in_store_name: bool,
    in_title: bool,
    in_geo: bool,
    current_store: Option<StoreRecord>,
    /// Character tokens seen since the last tag, delivered as one text event.
    pending_text: String,
    page_title: Option<String>,
    location: Option<String>,
    stores: Vec<StoreRecord>,
}

impl ScanState {
    fn open_tag(&mut self, tag: &Tag) {
        match &*tag.name {
            "span" => {
                let Some(class) = attr(tag, "class") else {
                    return;
                };
                if class.contains(HERO_TITLE_CLASS) {
                    self.in_title = true;
                }
                if class.contains(HERO_GEO_CLASS) {
                    self.in_geo = true;
                }
                if class.contains(STORE_NAME_CLASS) {
                    self.in_store_name = true;
                }
            }
            "a" => {
                if attr(tag, "class").is_some_and(|c| c.contains(STORE_LINK_CLASS)) {
                    self.in_store_link = true;
                    self.current_store = Some(store_from_link(tag));
                }
            }
            _ => {}
        }
    }

    fn close_tag(&mut self, name: &str) {
        match name {
            "a" if self.in_store_link => {
                if let Some(store) = self.current_store.take() {
                    tracing::trace!(url_path = %store.url_path, "store link closed");
                    self.stores.push(store);
                }
                self.in_store_link = false;
            }
            // Spans are assumed flat; any close resets every span flag.
            "span" => {
                self.in_store_name = false;
                self.in_title = false;
                self.in_geo = false;
            }
            _ => {}
        }
    }

    fn flush_text(&mut self) {
        if self.pending_text.is_empty() {
            return;
        }
        let raw = std::mem::take(&mut self.pending_text);
        let text = raw.trim();
        if self.in_store_name {
            if let Some(store) = self.current_store.as_mut() {
                store.name = Some(text.to_string());
            }
        }
        if self.in_title {
            self.page_title = Some(text.to_string());
        }
        if self.in_geo {
            self.location = Some(text.to_string());
        }
    }

    fn into_result(mut self) -> ExtractionResult {
        self.flush_text();
        if self.current_store.is_some() {
            tracing::debug!("discarding store link that never closed");
        }
        ExtractionResult::new(self.page_title, self.location, self.stores)
    }
}

fn attr<'t>(tag: &'t Tag, name: &str) -> Option<&'t str> {
    tag.attrs
        .iter()
        .find(|a| &*a.name.local == name)
        .map(|a| &*a.value)
}

fn store_from_link(tag: &Tag) -> StoreRecord {
    let href = attr(tag, "href").unwrap_or("");
    let count = attr(tag, "data-count").unwrap_or(DEFAULT_DATA_COUNT);
    let segments = split_href(href);
    StoreRecord {
        url_path: href.to_string(),
        state: segments.state.to_uppercase(),
        suburb: title_case(segments.suburb),
        address_slug: segments.address_slug.to_string(),
        address: address_from_slug(segments.address_slug),
        store_count: parse_store_count(count),
        name: None,
    }
}

/// Script and style bodies are raw text; without a tree builder the tokenizer has to
/// be told, or markup inside them would be scanned as tags.
fn raw_kind(tag_name: &str) -> Option<RawKind> {
    match tag_name {
        "script" => Some(RawKind::ScriptData),
        "style" | "xmp" | "iframe" | "noembed" | "noframes" => Some(RawKind::Rawtext),
        "title" | "textarea" => Some(RawKind::Rcdata),
        _ => None,
    }
}

/// Token sink owning the scan state for a single call to `extract_stores`.
#[derive(Default)]
pub(super) struct StoreScanner {
    state: RefCell<ScanState>,
}

impl StoreScanner {
    pub(super) fn finish(&self) -> ExtractionResult {
        self.state.take().into_result()
    }
}

impl TokenSink for StoreScanner {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        let mut state = self.state.borrow_mut();
        match token {
            Token::CharacterTokens(text) => state.pending_text.push_str(&text),
            Token::TagToken(tag) => {
                state.flush_text();
                match tag.kind {
                    TagKind::StartTag => {
                        state.open_tag(&tag);
                        if tag.self_closing {
                            state.close_tag(&tag.name);
                        } else if let Some(kind) = raw_kind(&tag.name) {
                            return TokenSinkResult::RawData(kind);
                        }
                    }
                    TagKind::EndTag => state.close_tag(&tag.name),
                }
            }
            Token::CommentToken(_) | Token::DoctypeToken(_) | Token::EOFToken => {
                state.flush_text();
            }
            Token::NullCharacterToken | Token::ParseError(_) => {}
        }
        TokenSinkResult::Continue
    }
}
