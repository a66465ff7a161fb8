//! MatchDay (round) and Match data structures.

use crate::models::team::TeamId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match day.
pub type MatchDayId = Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// A round of the league (e.g. "Jornada 1"), owning zero or more matches.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchDay {
    pub id: MatchDayId,
    /// Round number, unique and starting at 1.
    pub day_number: u32,
    pub date: Option<NaiveDate>,
    pub name: String,
}

impl MatchDay {
    pub fn new(day_number: u32, name: impl Into<String>, date: Option<NaiveDate>) -> Self {
        Self {
            id: Uuid::new_v4(),
            day_number,
            date,
            name: name.into(),
        }
    }
}

/// A match between two distinct teams inside one match day.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub match_day: MatchDayId,
    pub team_a: TeamId,
    pub team_b: TeamId,
    /// None until a result is recorded; one of team_a/team_b when set.
    pub winner: Option<TeamId>,
    /// Stamped when the winner is recorded, cleared on reset.
    pub played_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Match {
    pub fn new(match_day: MatchDayId, team_a: TeamId, team_b: TeamId) -> Self {
        Self {
            id: Uuid::new_v4(),
            match_day,
            team_a,
            team_b,
            winner: None,
            played_at: None,
            created_at: Utc::now(),
        }
    }

    /// Whether the given team plays in this match.
    pub fn involves(&self, team: TeamId) -> bool {
        self.team_a == team || self.team_b == team
    }

    /// Whether a winner has been recorded.
    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }
}
