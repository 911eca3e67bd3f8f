//! Run configuration resolved from flags and the environment

use std::path::PathBuf;

use crate::cli::Cli;
use crate::client::github::API_BASE_URL;
use crate::error::{ConfigError, Result};
use crate::sync::FetchPolicy;

/// Settings for one sync run. Read once at startup, immutable afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// GitHub access token
    pub access_token: String,

    /// Organization whose teams are enumerated
    pub organization: String,

    /// Raw comma-separated team filter; empty selects every team
    pub teams: String,

    /// Destination file, overwritten on each run
    pub authorized_keys_file: PathBuf,

    /// GitHub API root
    pub api_url: String,

    /// What to do when an API call fails
    pub policy: FetchPolicy,

    /// Print instead of writing the destination file
    pub dry_run: bool,
}

impl Config {
    /// Get the default authorized_keys path
    pub fn default_keys_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".ssh").join("authorized_keys"))
    }

    /// Resolve parsed CLI arguments into a run configuration.
    ///
    /// The token and organization are required; empty values count as
    /// missing. Empty optional values fall back to their defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let access_token = required(cli.token.as_deref(), "GITHUB_ACCESS_TOKEN")?;
        let organization = required(cli.org.as_deref(), "GITHUB_ORGANIZATION")?;

        let authorized_keys_file = match cli.output.as_ref().filter(|p| !p.as_os_str().is_empty()) {
            Some(path) => path.clone(),
            None => Self::default_keys_path()?,
        };

        Ok(Self {
            access_token,
            organization,
            teams: cli.teams.clone().unwrap_or_default(),
            authorized_keys_file,
            api_url: cli
                .api_url
                .clone()
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| API_BASE_URL.to_string()),
            policy: FetchPolicy::from_fail_fast(cli.fail_fast),
            dry_run: cli.dry_run,
        })
    }
}

fn required(value: Option<&str>, name: &'static str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ConfigError::MissingVar(name).into()),
    }
}
