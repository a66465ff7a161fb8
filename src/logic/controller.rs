//! Tournament state transitions and result recording.
//!
//! Every function validates before it mutates, so a failed call leaves the
//! league untouched.

use crate::models::{
    League, LeagueError, Match, MatchDayId, MatchId, TeamId, Tournament, TournamentStatus,
    DEFAULT_TOURNAMENT_NAME,
};
use chrono::Utc;

/// The current tournament: the one still upcoming or in progress. Creates one
/// with the default name when none exists, so repeated calls return the same
/// record until it completes.
pub fn current_tournament(league: &mut League) -> &mut Tournament {
    let idx = match league.tournaments.iter().position(|t| t.status.is_active()) {
        Some(idx) => idx,
        None => {
            league.tournaments.push(Tournament::new(DEFAULT_TOURNAMENT_NAME));
            league.tournaments.len() - 1
        }
    };
    &mut league.tournaments[idx]
}

/// Record a match result. The winner must be one of the two teams playing.
/// Recording again overwrites the previous result.
pub fn record_result(
    league: &mut League,
    match_id: MatchId,
    winner_id: TeamId,
) -> Result<(), LeagueError> {
    if league.get_team(winner_id).is_none() {
        return Err(LeagueError::TeamNotFound(winner_id));
    }
    let m = league
        .get_match_mut(match_id)
        .ok_or(LeagueError::MatchNotFound(match_id))?;
    if !m.involves(winner_id) {
        return Err(LeagueError::WinnerNotParticipant);
    }
    m.winner = Some(winner_id);
    m.played_at = Some(Utc::now());
    Ok(())
}

/// Schedule a match between two distinct teams inside a match day. The same
/// pair may be scheduled more than once.
pub fn create_match(
    league: &mut League,
    match_day_id: MatchDayId,
    team_a_id: TeamId,
    team_b_id: TeamId,
) -> Result<MatchId, LeagueError> {
    if team_a_id == team_b_id {
        return Err(LeagueError::SelfPlay);
    }
    if league.get_match_day(match_day_id).is_none() {
        return Err(LeagueError::MatchDayNotFound(match_day_id));
    }
    for id in [team_a_id, team_b_id] {
        if league.get_team(id).is_none() {
            return Err(LeagueError::TeamNotFound(id));
        }
    }
    let m = Match::new(match_day_id, team_a_id, team_b_id);
    let id = m.id;
    league.matches.push(m);
    Ok(id)
}

/// Set the current tournament's status from its wire value.
pub fn set_status(league: &mut League, value: &str) -> Result<(), LeagueError> {
    let status = TournamentStatus::parse(value)
        .ok_or_else(|| LeagueError::InvalidStatus(value.to_string()))?;
    let t = current_tournament(league);
    t.status = status;
    t.touch();
    Ok(())
}

/// Crown a champion on the current tournament. Completion is implied.
pub fn set_champion(league: &mut League, team_id: TeamId) -> Result<(), LeagueError> {
    if league.get_team(team_id).is_none() {
        return Err(LeagueError::TeamNotFound(team_id));
    }
    let t = current_tournament(league);
    t.champion = Some(team_id);
    t.status = TournamentStatus::Completed;
    t.touch();
    Ok(())
}

/// Wipe every recorded result and return the current tournament to upcoming.
/// Teams and the schedule stay in place. Destructive; callers gate it behind
/// explicit operator confirmation.
pub fn reset(league: &mut League) {
    for m in &mut league.matches {
        m.winner = None;
        m.played_at = None;
    }
    let t = current_tournament(league);
    t.champion = None;
    t.status = TournamentStatus::Upcoming;
    t.touch();
}
