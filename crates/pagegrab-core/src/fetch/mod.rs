//! HTTP GET into a local file.
//!
//! Uses the curl crate (libcurl easy interface) in the current thread. The body is
//! streamed into the caller's file; the final response's `Content-Type` is kept as
//! a hint for sniffing.

mod parse;

use anyhow::Context;
use std::fs::File;
use std::io::{self, Write};
use std::str;
use std::time::Duration;

use crate::config::GrabConfig;
use crate::error::GrabError;

/// Request settings taken from config.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub user_agent: String,
    pub max_redirections: u32,
    pub connect_timeout: Option<Duration>,
}

impl From<&GrabConfig> for FetchOptions {
    fn from(cfg: &GrabConfig) -> Self {
        Self {
            user_agent: cfg.user_agent.clone(),
            max_redirections: cfg.max_redirections,
            connect_timeout: cfg.connect_timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Headers of interest from the final response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseMeta {
    /// Raw `Content-Type` value, parameters included.
    pub content_type: Option<String>,
}

/// Outcome of a completed 2xx GET.
#[derive(Debug, Clone)]
pub struct FetchResult {
    /// URL after redirects.
    pub effective_url: String,
    pub meta: ResponseMeta,
    pub bytes_written: u64,
}

/// Downloads `url` with a single GET, writing the body sequentially to `dest`.
///
/// Follows redirects. Transfer failures map to [`GrabError::Fetch`], non-2xx
/// statuses to [`GrabError::HttpStatus`], and local write failures to
/// [`GrabError::Io`].
pub fn fetch_to_file(url: &str, dest: &mut File, opts: &FetchOptions) -> Result<FetchResult, GrabError> {
    let mut headers: Vec<String> = Vec::new();
    let mut bytes_written: u64 = 0;
    let mut write_error: Option<io::Error> = None;

    let fetch_err = |source: anyhow::Error| GrabError::Fetch {
        url: url.to_string(),
        source,
    };

    let mut easy = curl::easy::Easy::new();
    configure(&mut easy, url, opts).map_err(fetch_err)?;

    let performed = {
        let mut transfer = easy.transfer();
        transfer
            .header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    headers.push(s.trim_end().to_string());
                }
                true
            })
            .context("curl header callback")
            .map_err(fetch_err)?;
        transfer
            .write_function(|data| match dest.write_all(data) {
                Ok(()) => {
                    bytes_written += data.len() as u64;
                    Ok(data.len())
                }
                Err(e) => {
                    write_error = Some(e);
                    Ok(0) // abort transfer
                }
            })
            .context("curl write callback")
            .map_err(fetch_err)?;
        transfer.perform()
    };

    if let Some(e) = write_error {
        return Err(GrabError::Io(
            anyhow::Error::new(e).context("failed to write download to temp file"),
        ));
    }
    performed.context("GET request failed").map_err(fetch_err)?;

    let status = easy
        .response_code()
        .context("no response code")
        .map_err(fetch_err)?;
    if !(200..300).contains(&status) {
        return Err(GrabError::HttpStatus {
            url: url.to_string(),
            code: status,
        });
    }

    dest.flush()
        .context("failed to flush temp file")
        .map_err(GrabError::Io)?;

    let effective_url = easy
        .effective_url()
        .ok()
        .flatten()
        .unwrap_or(url)
        .to_string();
    let meta = parse::parse_headers(&headers);

    tracing::info!(
        url,
        effective_url = %effective_url,
        status,
        bytes = bytes_written,
        content_type = ?meta.content_type,
        "fetch complete"
    );

    Ok(FetchResult {
        effective_url,
        meta,
        bytes_written,
    })
}

fn configure(easy: &mut curl::easy::Easy, url: &str, opts: &FetchOptions) -> anyhow::Result<()> {
    easy.url(url).context("invalid URL")?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(opts.max_redirections)?;
    easy.useragent(&opts.user_agent)?;
    // Empty string: advertise every encoding libcurl can decode.
    easy.accept_encoding("")?;
    if let Some(timeout) = opts.connect_timeout {
        easy.connect_timeout(timeout)?;
    }
    Ok(())
}
