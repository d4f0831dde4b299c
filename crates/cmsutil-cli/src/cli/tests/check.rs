//! Tests for check and the global --config flag.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_check() {
    match parse(&["cmsutil", "check"]) {
        CliCommand::Check => {}
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_global_config() {
    let cli = Cli::try_parse_from(["cmsutil", "check", "--config", "/etc/cms.toml"]).unwrap();
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/etc/cms.toml"))
    );
    assert!(matches!(cli.command, CliCommand::Check));
}

#[test]
fn cli_parse_missing_subcommand() {
    assert!(Cli::try_parse_from(["cmsutil"]).is_err());
}
