//! Team data structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team (used in matches and lookups).
pub type TeamId = Uuid;

/// A team in the league. Wins/losses are never stored here; they are derived
/// from the recorded matches on every read.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    /// Display name, unique across the league (case-insensitive).
    pub name: String,
    pub logo_url: Option<String>,
    pub captain_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Team {
    /// Create a new team with the given name. Optional fields start unset.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            logo_url: None,
            captain_name: None,
            created_at: Utc::now(),
        }
    }
}
