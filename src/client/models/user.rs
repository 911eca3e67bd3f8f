//! Member and public key models

use serde::Deserialize;

/// Team member as returned by `GET /orgs/{org}/teams/{team_slug}/members`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Member {
    /// Login handle, unique per account
    pub login: String,
}

/// Public SSH key as returned by `GET /users/{login}/keys`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PublicKey {
    /// Raw key material, e.g. `ssh-ed25519 AAAA...`
    pub key: String,
}
