//! Tests for the validate and snapshot subcommands.

use super::parse;
use crate::cli::CliCommand;

#[test]
fn cli_parse_validate() {
    match parse(&["logofetch", "validate", "https://example.com/logo.svg"]) {
        CliCommand::Validate { url } => assert_eq!(url, "https://example.com/logo.svg"),
        _ => panic!("expected Validate"),
    }
}

#[test]
fn cli_parse_snapshot() {
    match parse(&["logofetch", "snapshot", "https://example.com/gone.png"]) {
        CliCommand::Snapshot { url, json } => {
            assert_eq!(url, "https://example.com/gone.png");
            assert!(!json);
        }
        _ => panic!("expected Snapshot"),
    }
}

#[test]
fn cli_parse_snapshot_json() {
    match parse(&["logofetch", "snapshot", "https://example.com", "--json"]) {
        CliCommand::Snapshot { json, .. } => assert!(json),
        _ => panic!("expected Snapshot with --json"),
    }
}
