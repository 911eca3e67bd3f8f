//! Mock GitHub directory client for testing
//!
//! Provides an in-memory implementation of [`DirectoryApi`] so the sync
//! pipeline can be exercised without making real API calls.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{DirectoryApi, Member, PublicKey, Team};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockDirectoryClient::new()
///     .with_teams(vec![Team::new(1, "infra")])
///     .with_members(1, &["alice"])
///     .with_keys("alice", &["ssh-ed25519 AAAA"]);
///
/// let teams = mock.list_teams("acme").await?;
/// assert_eq!(teams.len(), 1);
/// ```
#[derive(Default)]
pub struct MockDirectoryClient {
    /// Teams to return from list_teams
    teams: Vec<Team>,
    /// Members per team ID
    members: HashMap<u64, Vec<Member>>,
    /// Keys per login
    keys: HashMap<String, Vec<PublicKey>>,
    /// Fail list_teams
    fail_teams: bool,
    /// Team IDs whose member listing fails
    failing_teams: HashSet<u64>,
    /// Logins whose key listing fails
    failing_users: HashSet<String>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured requests in call order
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub list_teams: usize,
    pub list_team_members: usize,
    pub list_user_keys: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.list_teams + self.list_team_members + self.list_user_keys
    }
}

/// A captured API request for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapturedRequest {
    ListTeams(String),
    ListTeamMembers(u64),
    ListUserKeys(String),
}

impl MockDirectoryClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure teams to return from list_teams.
    pub fn with_teams(mut self, teams: Vec<Team>) -> Self {
        self.teams = teams;
        self
    }

    /// Configure the members of a team.
    pub fn with_members(mut self, team_id: u64, logins: &[&str]) -> Self {
        let members = logins
            .iter()
            .map(|login| Member {
                login: login.to_string(),
            })
            .collect();
        self.members.insert(team_id, members);
        self
    }

    /// Configure the public keys of a user.
    pub fn with_keys(mut self, login: &str, keys: &[&str]) -> Self {
        let keys = keys
            .iter()
            .map(|key| PublicKey {
                key: key.to_string(),
            })
            .collect();
        self.keys.insert(login.to_string(), keys);
        self
    }

    /// Make list_teams fail with a network error.
    pub fn failing_teams(mut self) -> Self {
        self.fail_teams = true;
        self
    }

    /// Make list_team_members fail for one team.
    pub fn failing_members(mut self, team_id: u64) -> Self {
        self.failing_teams.insert(team_id);
        self
    }

    /// Make list_user_keys fail for one user.
    pub fn failing_keys(mut self, login: &str) -> Self {
        self.failing_users.insert(login.to_string());
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    async fn capture(&self, request: CapturedRequest) {
        let mut counts = self.call_count.lock().await;
        match request {
            CapturedRequest::ListTeams(_) => counts.list_teams += 1,
            CapturedRequest::ListTeamMembers(_) => counts.list_team_members += 1,
            CapturedRequest::ListUserKeys(_) => counts.list_user_keys += 1,
        }
        drop(counts);

        self.captured_requests.lock().await.push(request);
    }
}

#[async_trait]
impl DirectoryApi for MockDirectoryClient {
    async fn list_teams(&self, org: &str) -> Result<Vec<Team>> {
        self.capture(CapturedRequest::ListTeams(org.to_string()))
            .await;

        if self.fail_teams {
            return Err(ApiError::Network("simulated failure listing teams".to_string()).into());
        }
        Ok(self.teams.clone())
    }

    async fn list_team_members(&self, _org: &str, team: &Team) -> Result<Vec<Member>> {
        self.capture(CapturedRequest::ListTeamMembers(team.id)).await;

        if self.failing_teams.contains(&team.id) {
            return Err(ApiError::Network(format!("simulated failure for team {}", team.id)).into());
        }
        Ok(self.members.get(&team.id).cloned().unwrap_or_default())
    }

    async fn list_user_keys(&self, login: &str) -> Result<Vec<PublicKey>> {
        self.capture(CapturedRequest::ListUserKeys(login.to_string()))
            .await;

        if self.failing_users.contains(login) {
            return Err(ApiError::NotFound(format!("user {}", login)).into());
        }
        Ok(self.keys.get(login).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_configured_data() {
        let mock = MockDirectoryClient::new()
            .with_teams(vec![Team::new(1, "infra")])
            .with_members(1, &["alice"])
            .with_keys("alice", &["ssh-ed25519 AAAA"]);

        assert_eq!(mock.list_teams("acme").await.unwrap().len(), 1);
        let infra = Team::new(1, "infra");
        assert_eq!(mock.list_team_members("acme", &infra).await.unwrap()[0].login, "alice");
        assert_eq!(mock.list_user_keys("alice").await.unwrap()[0].key, "ssh-ed25519 AAAA");
        assert!(mock.list_user_keys("nobody").await.unwrap().is_empty());

        let counts = mock.call_counts().await;
        assert_eq!(counts.list_teams, 1);
        assert_eq!(counts.list_team_members, 1);
        assert_eq!(counts.list_user_keys, 2);
        assert_eq!(counts.total(), 4);
    }

    #[tokio::test]
    async fn test_mock_injected_failures() {
        let mock = MockDirectoryClient::new()
            .failing_teams()
            .failing_members(3)
            .failing_keys("ghost");

        assert!(mock.list_teams("acme").await.is_err());
        assert!(mock.list_team_members("acme", &Team::new(3, "ops")).await.is_err());
        assert!(mock.list_team_members("acme", &Team::new(4, "dev")).await.is_ok());
        assert!(mock.list_user_keys("ghost").await.is_err());

        assert_eq!(
            mock.captured_requests().await,
            vec![
                CapturedRequest::ListTeams("acme".to_string()),
                CapturedRequest::ListTeamMembers(3),
                CapturedRequest::ListTeamMembers(4),
                CapturedRequest::ListUserKeys("ghost".to_string()),
            ]
        );
    }
}
