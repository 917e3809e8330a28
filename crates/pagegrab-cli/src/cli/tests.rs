//! CLI parse tests.

use super::Cli;
use clap::Parser;
use pagegrab_core::error::GrabError;
use std::path::Path;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_url_only() {
    let cli = parse(&["pagegrab", "https://example.com/page/"]);
    assert_eq!(cli.url.as_deref(), Some("https://example.com/page/"));
    assert!(!cli.extract_stores);
    assert!(cli.output_dir.is_none());
}

#[test]
fn cli_parse_extract_stores() {
    let cli = parse(&["pagegrab", "https://example.com/stores", "--extract-stores"]);
    assert!(cli.extract_stores);
    let cli = parse(&["pagegrab", "--extract-stores", "https://example.com/stores"]);
    assert_eq!(cli.url.as_deref(), Some("https://example.com/stores"));
    assert!(cli.extract_stores);
}

#[test]
fn cli_parse_output_dir() {
    let cli = parse(&["pagegrab", "http://example.com", "-o", "/tmp/out"]);
    assert_eq!(cli.output_dir.as_deref(), Some(Path::new("/tmp/out")));
    let cli = parse(&["pagegrab", "http://example.com", "--output-dir", "grabs"]);
    assert_eq!(cli.output_dir.as_deref(), Some(Path::new("grabs")));
}

#[test]
fn cli_parse_no_url() {
    let cli = parse(&["pagegrab"]);
    assert!(cli.url.is_none());
}

#[test]
fn cli_rejects_unknown_flag() {
    assert!(Cli::try_parse_from(["pagegrab", "https://example.com", "--bogus"]).is_err());
}

#[test]
fn cli_rejects_extra_positional() {
    assert!(Cli::try_parse_from(["pagegrab", "https://a.example", "https://b.example"]).is_err());
}

#[test]
fn run_rejects_non_http_url() {
    let cli = parse(&["pagegrab", "example.com/page"]);
    match cli.run() {
        Err(GrabError::Usage(msg)) => assert!(msg.contains("http://")),
        other => panic!("expected usage error, got {other:?}"),
    }
}

#[test]
fn run_without_url_is_usage_error() {
    let cli = parse(&["pagegrab", "--extract-stores"]);
    assert!(matches!(cli.run(), Err(GrabError::Usage(_))));
}

#[test]
fn cli_definition_is_valid() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
