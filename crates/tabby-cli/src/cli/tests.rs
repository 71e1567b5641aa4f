use std::path::Path;

use clap::Parser;

use super::*;

fn parse(args: &[&str]) -> Option<CliCommand> {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_bare_invocation() {
    // The spec'd contract: no arguments, no flags.
    assert!(parse(&["tabby"]).is_none());
}

#[test]
fn cli_parse_open() {
    match parse(&["tabby", "open"]) {
        Some(CliCommand::Open) => {}
        other => panic!("expected Open, got {other:?}"),
    }
}

#[test]
fn cli_parse_preview() {
    match parse(&["tabby", "preview"]) {
        Some(CliCommand::Preview) => {}
        other => panic!("expected Preview, got {other:?}"),
    }
}

#[test]
fn cli_parse_export_default_path() {
    match parse(&["tabby", "export"]) {
        Some(CliCommand::Export { path }) => {
            assert_eq!(path, Path::new("tabby_tabs.json"));
        }
        other => panic!("expected Export, got {other:?}"),
    }
}

#[test]
fn cli_parse_export_custom_path() {
    match parse(&["tabby", "export", "/tmp/mine.json"]) {
        Some(CliCommand::Export { path }) => {
            assert_eq!(path, Path::new("/tmp/mine.json"));
        }
        other => panic!("expected Export with path, got {other:?}"),
    }
}

#[test]
fn cli_parse_import() {
    match parse(&["tabby", "import", "tabby_tabs.json"]) {
        Some(CliCommand::Import { path }) => {
            assert_eq!(path, Path::new("tabby_tabs.json"));
        }
        other => panic!("expected Import, got {other:?}"),
    }
}

#[test]
fn cli_import_requires_a_path() {
    assert!(Cli::try_parse_from(["tabby", "import"]).is_err());
}
