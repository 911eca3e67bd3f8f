//! Member and key aggregation across teams

use std::collections::HashSet;

use log::debug;

use crate::client::{DirectoryApi, Team};
use crate::error::Result;

use super::{FetchPolicy, User};

/// Collect the users of the given teams, each with their public keys.
///
/// Teams are processed in order and a login is kept at its first
/// appearance; later appearances are skipped without fetching keys again.
/// Users with no keys are included.
pub async fn aggregate_users<C>(
    client: &C,
    org: &str,
    teams: &[Team],
    policy: FetchPolicy,
) -> Result<Vec<User>>
where
    C: DirectoryApi + ?Sized,
{
    let mut users: Vec<User> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for team in teams {
        let members = policy.apply(
            client.list_team_members(org, team).await,
            &format!("listing members of team {}", team.name),
        )?;
        debug!("Team {} (id {}) has {} members", team.name, team.id, members.len());

        for member in members {
            if !seen.insert(member.login.clone()) {
                continue;
            }

            let keys = policy.apply(
                client.list_user_keys(&member.login).await,
                &format!("listing keys of {}", member.login),
            )?;
            users.push(User::new(
                member.login,
                keys.into_iter().map(|k| k.key).collect(),
            ));
        }
    }

    debug!("Collected {} distinct users", users.len());
    Ok(users)
}
