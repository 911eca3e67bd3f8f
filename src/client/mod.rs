//! GitHub directory client

use async_trait::async_trait;

use crate::error::Result;

pub mod github;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use github::GitHubClient;
#[cfg(test)]
pub use mock::MockDirectoryClient;
pub use models::{Member, PublicKey, Team};

/// Read-only view of an organization's teams, members and their keys.
///
/// Each call maps to a single request; no pagination is followed, so only
/// the first page GitHub returns is seen.
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    /// List the teams of an organization
    async fn list_teams(&self, org: &str) -> Result<Vec<Team>>;

    /// List the members of one of the organization's teams
    async fn list_team_members(&self, org: &str, team: &Team) -> Result<Vec<Member>>;

    /// List the public SSH keys of a user
    async fn list_user_keys(&self, login: &str) -> Result<Vec<PublicKey>>;
}
