//! Error taxonomy for a single pagegrab run.
//!
//! Every variant is terminal: the CLI prints it on one line and exits 1.
//! JSON pretty-print failures never reach this type; the writer swallows them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GrabError {
    /// Bad or missing arguments. Raised before any network activity.
    #[error("usage: {0}")]
    Usage(String),

    /// Transfer failed (DNS, connect, TLS, aborted write).
    #[error("failed to fetch {url}: {source:#}")]
    Fetch {
        url: String,
        #[source]
        source: anyhow::Error,
    },

    /// Transfer completed but the server answered with a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    HttpStatus { url: String, code: u32 },

    /// Local filesystem failure (temp file, destination write).
    #[error(transparent)]
    Io(#[from] anyhow::Error),
}

impl GrabError {
    /// Process exit code for this error. All failures are terminal to the run.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_message() {
        let err = GrabError::HttpStatus {
            url: "https://example.com/x".to_string(),
            code: 404,
        };
        assert_eq!(err.to_string(), "GET https://example.com/x returned HTTP 404");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn usage_message() {
        let err = GrabError::Usage("URL must start with http:// or https://".to_string());
        assert!(err.to_string().starts_with("usage: "));
    }
}
