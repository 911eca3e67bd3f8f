//! Team models

use serde::Deserialize;

/// Organization team as returned by `GET /orgs/{org}/teams`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Team {
    /// Team ID
    pub id: u64,

    /// Team display name, matched against the team filter
    pub name: String,

    /// URL-safe team name used in org-scoped team routes
    pub slug: String,
}

#[cfg(test)]
impl Team {
    /// Build a team whose slug is derived from its name the way GitHub does
    /// for simple names.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id,
            slug: name.to_lowercase().replace(' ', "-"),
            name,
        }
    }
}
