//! GitHub API data models
//!
//! Only the fields teamkeys reads are modelled; serde ignores the rest of
//! each GitHub payload.

mod team;
mod user;

pub use team::Team;
pub use user::{Member, PublicKey};
