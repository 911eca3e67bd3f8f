//! CLI argument definitions

use std::path::PathBuf;

use clap::Parser;
use clap::builder::BoolishValueParser;

/// teamkeys - Sync an SSH authorized_keys file with GitHub team members' keys
///
/// Every option can also be supplied through the environment variable shown
/// next to it; a flag takes precedence over its variable.
#[derive(Parser, Debug)]
#[command(name = "teamkeys")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// GitHub access token used to read the organization
    #[arg(long, env = "GITHUB_ACCESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Organization whose teams are enumerated
    #[arg(long, env = "GITHUB_ORGANIZATION")]
    pub org: Option<String>,

    /// Comma-separated team names to include (exact match; empty means all teams)
    #[arg(long, env = "GITHUB_TEAMS")]
    pub teams: Option<String>,

    /// authorized_keys file to overwrite [default: ~/.ssh/authorized_keys]
    #[arg(long, env = "AUTHORIZED_KEYS_FILE")]
    pub output: Option<PathBuf>,

    /// GitHub API root, for GitHub Enterprise Server [default: https://api.github.com]
    #[arg(long, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,

    /// Abort on the first API error instead of skipping the failed call
    #[arg(long, env = "TEAMKEYS_FAIL_FAST", value_parser = BoolishValueParser::new())]
    pub fail_fast: bool,

    /// Print the generated file to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(
        long,
        env = "TEAMKEYS_DEBUG",
        hide_env = true,
        value_parser = BoolishValueParser::new()
    )]
    pub debug: bool,
}
