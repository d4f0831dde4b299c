//! Tests for levelize, join, media and params.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_levelize() {
    match parse(&["cmsutil", "levelize", "/application/item/new"]) {
        CliCommand::Levelize { path } => assert_eq!(path, "/application/item/new"),
        _ => panic!("expected Levelize"),
    }
}

#[test]
fn cli_parse_join() {
    match parse(&["cmsutil", "join", "/a", "b/", ""]) {
        CliCommand::Join {
            segments,
            no_append_slash,
        } => {
            assert_eq!(segments, vec!["/a", "b/", ""]);
            assert!(!no_append_slash);
        }
        _ => panic!("expected Join"),
    }
}

#[test]
fn cli_parse_join_no_append_slash() {
    match parse(&["cmsutil", "join", "a", "--no-append-slash"]) {
        CliCommand::Join {
            segments,
            no_append_slash,
        } => {
            assert_eq!(segments, vec!["a"]);
            assert!(no_append_slash);
        }
        _ => panic!("expected Join with --no-append-slash"),
    }
}

#[test]
fn cli_parse_media() {
    match parse(&["cmsutil", "media", "/media/x.png", "--host", "cdn.example.com"]) {
        CliCommand::Media { path, host } => {
            assert_eq!(path, "/media/x.png");
            assert_eq!(host, "cdn.example.com");
        }
        _ => panic!("expected Media"),
    }
}

#[test]
fn cli_parse_media_default_host() {
    match parse(&["cmsutil", "media", "/media/"]) {
        CliCommand::Media { host, .. } => assert!(host.is_empty()),
        _ => panic!("expected Media"),
    }
}

#[test]
fn cli_parse_params() {
    match parse(&["cmsutil", "params", "/x", "-p", "a=1", "--param", "q=a b=c"]) {
        CliCommand::Params { url, params } => {
            assert_eq!(url, "/x");
            assert_eq!(
                params,
                vec![
                    ("a".to_string(), "1".to_string()),
                    ("q".to_string(), "a b=c".to_string()),
                ]
            );
        }
        _ => panic!("expected Params"),
    }
}

#[test]
fn cli_parse_params_rejects_missing_equals() {
    assert!(Cli::try_parse_from(["cmsutil", "params", "/x", "-p", "novalue"]).is_err());
}
