//! Team key synchronization pipeline
//!
//! A run resolves the selected teams ([`membership`]), gathers their members
//! and keys ([`aggregate`]) and writes the result ([`writer`]).

pub mod aggregate;
pub mod membership;
pub mod policy;
pub mod writer;

use log::info;

use crate::client::DirectoryApi;
use crate::config::Config;
use crate::error::Result;

pub use policy::FetchPolicy;

/// A team member and their public keys, as discovered during one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Login handle
    pub name: String,

    /// Raw public keys in the order GitHub lists them
    pub keys: Vec<String>,
}

impl User {
    pub fn new(name: impl Into<String>, keys: Vec<String>) -> Self {
        Self {
            name: name.into(),
            keys,
        }
    }

    pub fn has_keys(&self) -> bool {
        !self.keys.is_empty()
    }

    /// One `<key> <name>-<index>` line per key, each newline-terminated.
    pub fn authorized_keys_lines(&self) -> String {
        self.keys
            .iter()
            .enumerate()
            .map(|(i, key)| format!("{} {}-{}\n", key, self.name, i))
            .collect()
    }
}

/// Counts reported after a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyncSummary {
    pub teams: usize,
    pub users: usize,
    pub keys: usize,
}

/// Run one full sync: select teams, gather users and write the keys file.
///
/// With `dry_run` set the rendered file goes to stdout and the destination
/// is left untouched.
pub async fn run<C>(client: &C, config: &Config) -> Result<SyncSummary>
where
    C: DirectoryApi + ?Sized,
{
    let teams = membership::resolve_teams(
        client,
        &config.organization,
        &config.teams,
        config.policy,
    )
    .await?;

    let users =
        aggregate::aggregate_users(client, &config.organization, &teams, config.policy).await?;

    let summary = SyncSummary {
        teams: teams.len(),
        users: users.iter().filter(|u| u.has_keys()).count(),
        keys: users.iter().map(|u| u.keys.len()).sum(),
    };

    let content = writer::render(&users);
    if config.dry_run {
        print!("{}", content);
    } else {
        writer::write_authorized_keys(&config.authorized_keys_file, &content)?;
        info!(
            "Wrote {} keys for {} users from {} teams to {}",
            summary.keys,
            summary.users,
            summary.teams,
            config.authorized_keys_file.display()
        );
    }

    Ok(summary)
}
