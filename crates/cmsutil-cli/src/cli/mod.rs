//! CLI for the cmsutil URL helpers.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cmsutil_core::config;
use std::path::PathBuf;

use commands::{run_check, run_join, run_levelize, run_media, run_params};

/// Top-level CLI for cmsutil.
#[derive(Debug, Parser)]
#[command(name = "cmsutil")]
#[command(about = "cmsutil: URL helpers and settings checks for the CMS", long_about = None)]
pub struct Cli {
    /// Settings file to use instead of ~/.config/cmsutil/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print every prefix of a path, longest first.
    Levelize {
        /// Path such as /application/item/new.
        path: String,
    },

    /// Join URL segments into one path.
    Join {
        /// Segments to join; leading/trailing slashes are collapsed.
        segments: Vec<String>,
        /// Never append a trailing slash, whatever append_slash says.
        #[arg(long)]
        no_append_slash: bool,
    },

    /// Tell whether a request would be served as media.
    Media {
        /// Request path.
        path: String,
        /// Host the request was sent to.
        #[arg(long, default_value = "")]
        host: String,
    },

    /// Append query parameters to a URL.
    Params {
        /// Base URL.
        url: String,
        /// Parameter to add; repeat for more. Later values win.
        #[arg(short = 'p', long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },

    /// Validate the settings the way the CMS does on startup.
    Check,
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Levelize { path } => run_levelize(&path)?,
            CliCommand::Join {
                segments,
                no_append_slash,
            } => run_join(&cfg, &segments, no_append_slash)?,
            CliCommand::Media { path, host } => run_media(&cfg, &path, &host)?,
            CliCommand::Params { url, params } => run_params(&url, params),
            CliCommand::Check => run_check(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
