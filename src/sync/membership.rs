//! Team selection from the organization's team list

use log::{debug, warn};

use crate::client::{DirectoryApi, Team};
use crate::error::Result;

use super::FetchPolicy;

/// Pick the teams named in `filter`, in the order given by `teams`.
///
/// `filter` is split on commas and compared exactly: case-sensitive and
/// without trimming, so `"a, b"` does not select a team named `"b"`. An
/// empty filter selects every team.
pub fn select_teams(teams: &[Team], filter: &str) -> Vec<Team> {
    let wanted: Vec<&str> = filter.split(',').collect();

    teams
        .iter()
        .filter(|team| filter.is_empty() || wanted.contains(&team.name.as_str()))
        .cloned()
        .collect()
}

/// List the organization's teams and resolve the filter against them.
pub async fn resolve_teams<C>(
    client: &C,
    org: &str,
    filter: &str,
    policy: FetchPolicy,
) -> Result<Vec<Team>>
where
    C: DirectoryApi + ?Sized,
{
    debug!("Fetching teams for organization {}", org);
    let listed = client.list_teams(org).await;
    let listing_failed = listed.is_err();
    let teams = policy.apply(listed, &format!("listing teams of {}", org))?;
    debug!("Fetched {} teams", teams.len());

    if !filter.is_empty() && !listing_failed {
        for name in filter.split(',') {
            if !teams.iter().any(|team| team.name == name) {
                warn!("Team '{}' not found in organization {}", name, org);
            }
        }
    }

    Ok(select_teams(&teams, filter))
}
