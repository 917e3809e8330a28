//! Logging init: append to a file under the XDG state dir, or fall back to stderr.
//!
//! The log file is for diagnostics only; user-facing output stays on stdout/stderr
//! as a single line per run.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const FILE_FILTER: &str = "info,pagegrab=debug,pagegrab_core=debug";
// stderr is shared with the one-line user output; keep it quiet unless RUST_LOG says otherwise.
const STDERR_FILTER: &str = "warn";

/// Per-event writer: the shared log file, or stderr if the handle could not be cloned.
enum LogSink {
    File(fs::File),
    Stderr,
}

impl io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogSink::File(f) => f.write(buf),
            LogSink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogSink::File(f) => f.flush(),
            LogSink::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct SharedLogFile(fs::File);

impl<'a> MakeWriter<'a> for SharedLogFile {
    type Writer = LogSink;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(LogSink::File)
            .unwrap_or(LogSink::Stderr)
    }
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Path of the log file: `~/.local/state/pagegrab/pagegrab.log`. Creates the directory.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pagegrab")?;
    Ok(xdg_dirs.place_state_file("pagegrab.log")?)
}

/// Initialize structured logging to the XDG state log file.
/// Returns Err (without installing a subscriber) if the file cannot be opened,
/// so the caller can fall back to [`init_logging_stderr`].
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(FILE_FILTER))
        .with_writer(BoxMakeWriter::new(SharedLogFile(file)))
        .with_ansi(false)
        .init();

    tracing::debug!("pagegrab logging initialized at {}", path.display());
    Ok(path)
}

/// Initialize logging to stderr only (no file).
pub fn init_logging_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(STDERR_FILTER))
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

/// File logging with stderr fallback; never fails.
pub fn init() {
    if let Err(err) = init_logging() {
        init_logging_stderr();
        tracing::warn!("log file unavailable ({:#}); logging to stderr", err);
    }
}
