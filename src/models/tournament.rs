//! Tournament record and status.

use crate::models::team::TeamId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Name given to a tournament created on demand.
pub const DEFAULT_TOURNAMENT_NAME: &str = "League Season";

/// Where the tournament stands. Every transition is an explicit operator
/// action; nothing here changes on its own.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    #[default]
    Upcoming,
    InProgress,
    Completed,
}

impl TournamentStatus {
    /// Upcoming and in-progress tournaments count as the current one.
    pub fn is_active(self) -> bool {
        matches!(self, TournamentStatus::Upcoming | TournamentStatus::InProgress)
    }

    /// Parse the wire value ("upcoming", "in_progress", "completed").
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "upcoming" => Some(TournamentStatus::Upcoming),
            "in_progress" => Some(TournamentStatus::InProgress),
            "completed" => Some(TournamentStatus::Completed),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TournamentStatus::Upcoming => "upcoming",
            TournamentStatus::InProgress => "in_progress",
            TournamentStatus::Completed => "completed",
        }
    }
}

/// One season of the league: name, status, and eventual champion.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub status: TournamentStatus,
    /// Set by the operator; setting it completes the tournament.
    pub champion: Option<TeamId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tournament {
    /// Create a new upcoming tournament with no champion.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            status: TournamentStatus::Upcoming,
            champion: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record that this tournament was mutated.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
