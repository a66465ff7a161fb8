//! League store: in-memory snapshot of teams, match days, matches, and
//! tournaments, plus the referential-integrity rules between them.

use crate::models::schedule::{Match, MatchDay, MatchDayId, MatchId};
use crate::models::team::{Team, TeamId};
use crate::models::tournament::Tournament;
use chrono::NaiveDate;

/// Errors that can occur during league operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LeagueError {
    /// A team cannot play against itself.
    SelfPlay,
    /// The recorded winner must be one of the two teams in the match.
    WinnerNotParticipant,
    /// Status value is not one of upcoming/in_progress/completed.
    InvalidStatus(String),
    /// A team with this name already exists (names are unique, case-insensitive).
    DuplicateTeamName,
    /// Team name must not be empty.
    EmptyTeamName,
    /// A match day with this day number already exists.
    DuplicateDayNumber(u32),
    /// Day numbers start at 1.
    InvalidDayNumber,
    /// Match day name must not be empty.
    EmptyMatchDayName,
    /// Fixture generation needs at least two teams.
    NotEnoughTeams,
    /// Referenced team does not exist.
    TeamNotFound(TeamId),
    /// Referenced match does not exist.
    MatchNotFound(MatchId),
    /// Referenced match day does not exist.
    MatchDayNotFound(MatchDayId),
}

impl LeagueError {
    /// Whether this error means a referenced record does not exist, as opposed
    /// to invalid input. The web layer maps these to 404 instead of 400.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LeagueError::TeamNotFound(_)
                | LeagueError::MatchNotFound(_)
                | LeagueError::MatchDayNotFound(_)
        )
    }
}

impl std::fmt::Display for LeagueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeagueError::SelfPlay => write!(f, "A team cannot play against itself"),
            LeagueError::WinnerNotParticipant => {
                write!(f, "The winner must be one of the teams playing the match")
            }
            LeagueError::InvalidStatus(value) => write!(f, "Invalid status value: {value}"),
            LeagueError::DuplicateTeamName => write!(f, "A team with this name already exists"),
            LeagueError::EmptyTeamName => write!(f, "Team name is required"),
            LeagueError::DuplicateDayNumber(n) => {
                write!(f, "A match day with day number {n} already exists")
            }
            LeagueError::InvalidDayNumber => write!(f, "Day number must be at least 1"),
            LeagueError::EmptyMatchDayName => write!(f, "Match day name is required"),
            LeagueError::NotEnoughTeams => write!(f, "Need at least 2 teams to generate fixtures"),
            LeagueError::TeamNotFound(_) => write!(f, "Team not found"),
            LeagueError::MatchNotFound(_) => write!(f, "Match not found"),
            LeagueError::MatchDayNotFound(_) => write!(f, "Match day not found"),
        }
    }
}

/// The whole league in memory: every table plus the integrity rules that a
/// relational store would enforce between them.
#[derive(Clone, Debug, Default)]
pub struct League {
    pub teams: Vec<Team>,
    pub match_days: Vec<MatchDay>,
    pub matches: Vec<Match>,
    pub tournaments: Vec<Tournament>,
}

impl League {
    pub fn new() -> Self {
        Self::default()
    }

    // --- teams ---

    /// Add a team. The name is trimmed and must be unique (case-insensitive).
    /// Empty optional fields are stored as None.
    pub fn add_team(
        &mut self,
        name: &str,
        logo_url: Option<String>,
        captain_name: Option<String>,
    ) -> Result<TeamId, LeagueError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LeagueError::EmptyTeamName);
        }
        if self.teams.iter().any(|t| t.name.eq_ignore_ascii_case(name)) {
            return Err(LeagueError::DuplicateTeamName);
        }
        let mut team = Team::new(name);
        team.logo_url = logo_url.filter(|s| !s.trim().is_empty());
        team.captain_name = captain_name.filter(|s| !s.trim().is_empty());
        let id = team.id;
        self.teams.push(team);
        Ok(id)
    }

    /// Update a team's fields. The name keeps the same uniqueness rules,
    /// excluding the team itself.
    pub fn update_team(
        &mut self,
        id: TeamId,
        name: &str,
        logo_url: Option<String>,
        captain_name: Option<String>,
    ) -> Result<(), LeagueError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LeagueError::EmptyTeamName);
        }
        if self
            .teams
            .iter()
            .any(|t| t.id != id && t.name.eq_ignore_ascii_case(name))
        {
            return Err(LeagueError::DuplicateTeamName);
        }
        let team = self
            .teams
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(LeagueError::TeamNotFound(id))?;
        team.name = name.to_string();
        team.logo_url = logo_url.filter(|s| !s.trim().is_empty());
        team.captain_name = captain_name.filter(|s| !s.trim().is_empty());
        Ok(())
    }

    /// Delete a team: null out champion and winner references, then remove
    /// every match the team plays in.
    pub fn delete_team(&mut self, id: TeamId) -> Result<(), LeagueError> {
        if !self.teams.iter().any(|t| t.id == id) {
            return Err(LeagueError::TeamNotFound(id));
        }
        for t in &mut self.tournaments {
            if t.champion == Some(id) {
                t.champion = None;
                t.touch();
            }
        }
        for m in &mut self.matches {
            if m.winner == Some(id) {
                m.winner = None;
            }
        }
        self.matches.retain(|m| !m.involves(id));
        self.teams.retain(|t| t.id != id);
        Ok(())
    }

    pub fn get_team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Teams in display order (by name, case-insensitive). This is also the
    /// order the standings computation receives, so fully tied teams rank
    /// alphabetically.
    pub fn teams_by_name(&self) -> Vec<Team> {
        let mut teams = self.teams.clone();
        teams.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        teams
    }

    // --- match days ---

    /// Add a match day. Day numbers start at 1 and are unique.
    pub fn add_match_day(
        &mut self,
        day_number: u32,
        name: &str,
        date: Option<NaiveDate>,
    ) -> Result<MatchDayId, LeagueError> {
        if day_number == 0 {
            return Err(LeagueError::InvalidDayNumber);
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(LeagueError::EmptyMatchDayName);
        }
        if self.match_days.iter().any(|d| d.day_number == day_number) {
            return Err(LeagueError::DuplicateDayNumber(day_number));
        }
        let day = MatchDay::new(day_number, name, date);
        let id = day.id;
        self.match_days.push(day);
        Ok(id)
    }

    /// Delete a match day and every match scheduled in it.
    pub fn delete_match_day(&mut self, id: MatchDayId) -> Result<(), LeagueError> {
        if !self.match_days.iter().any(|d| d.id == id) {
            return Err(LeagueError::MatchDayNotFound(id));
        }
        self.matches.retain(|m| m.match_day != id);
        self.match_days.retain(|d| d.id != id);
        Ok(())
    }

    pub fn get_match_day(&self, id: MatchDayId) -> Option<&MatchDay> {
        self.match_days.iter().find(|d| d.id == id)
    }

    /// Match days in round order.
    pub fn match_days_in_order(&self) -> Vec<MatchDay> {
        let mut days = self.match_days.clone();
        days.sort_by_key(|d| d.day_number);
        days
    }

    // --- matches ---

    pub fn delete_match(&mut self, id: MatchId) -> Result<(), LeagueError> {
        if !self.matches.iter().any(|m| m.id == id) {
            return Err(LeagueError::MatchNotFound(id));
        }
        self.matches.retain(|m| m.id != id);
        Ok(())
    }

    pub fn get_match(&self, id: MatchId) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub fn get_match_mut(&mut self, id: MatchId) -> Option<&mut Match> {
        self.matches.iter_mut().find(|m| m.id == id)
    }

    /// Matches in (round, creation) order.
    pub fn matches_in_order(&self) -> Vec<Match> {
        let mut matches = self.matches.clone();
        matches.sort_by_key(|m| (self.day_number_of(m.match_day), m.created_at));
        matches
    }

    /// Matches scheduled in one match day, oldest first.
    pub fn matches_for_day(&self, day: MatchDayId) -> Vec<Match> {
        let mut matches: Vec<Match> = self
            .matches
            .iter()
            .filter(|m| m.match_day == day)
            .cloned()
            .collect();
        matches.sort_by_key(|m| m.created_at);
        matches
    }

    fn day_number_of(&self, id: MatchDayId) -> u32 {
        self.match_days
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.day_number)
            .unwrap_or(u32::MAX)
    }
}
