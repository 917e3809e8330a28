//! CLI for pagegrab.

use anyhow::Context;
use clap::{CommandFactory, Parser};
use pagegrab_core::config;
use pagegrab_core::error::GrabError;
use pagegrab_core::pipeline::{self, GrabOutcome, GrabRequest};
use pagegrab_core::url_model;
use std::path::PathBuf;

/// Top-level CLI: `pagegrab URL [--extract-stores]`.
#[derive(Debug, Parser)]
#[command(name = "pagegrab", version)]
#[command(
    about = "Download a URL and save it with an extension matching its content",
    long_about = None
)]
pub struct Cli {
    /// HTTP/HTTPS URL to download.
    pub url: Option<String>,

    /// Parse a store-locator HTML page into a JSON list of stores.
    #[arg(long)]
    pub extract_stores: bool,

    /// Directory to write the result into (default: config `output_dir`, else the current directory).
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

impl Cli {
    /// Validate arguments, load config, run the pipeline, and print the outcome.
    pub fn run(self) -> Result<(), GrabError> {
        let Some(url) = self.url else {
            // Help text goes out before the usage error so the user sees both.
            let _ = Cli::command().print_help();
            println!();
            return Err(GrabError::Usage("missing URL".to_string()));
        };
        url_model::parse_http_url(&url)?;

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let output_dir = match self.output_dir.or_else(|| cfg.output_dir.clone()) {
            Some(dir) => dir,
            None => std::env::current_dir().context("failed to read current directory")?,
        };
        let request = GrabRequest {
            url,
            extract_stores: self.extract_stores,
            output_dir,
        };

        let outcome = pipeline::run(&request, &cfg)?;
        report(&outcome);
        Ok(())
    }
}

fn report(outcome: &GrabOutcome) {
    println!("{}", outcome.path.display());
    if let Some(n) = outcome.stores {
        println!("{n} stores extracted");
    }
}

/// Parse `std::env::args`. Clap errors exit 1; `--help`/`--version` exit 0.
pub fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    }
}

#[cfg(test)]
mod tests;
