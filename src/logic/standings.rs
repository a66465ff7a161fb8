//! Standings: derived per-team results and ranking.
//!
//! Pure functions over a snapshot of teams and matches. Nothing here is
//! cached; every read recomputes from the data it is handed, since results
//! change between reads.

use crate::models::{Match, Team};
use serde::Serialize;

/// One row of the standings table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TeamStanding {
    pub team: Team,
    pub wins: u32,
    pub losses: u32,
    /// Decided matches only; wins + losses.
    pub total_matches: u32,
    /// Percentage of decided matches won, rounded to one decimal place.
    pub win_rate: f64,
}

/// Compute the ranked standings for `teams` from the decided matches in
/// `matches`.
///
/// Sorted descending by (wins, win_rate). The sort is stable, so teams tied
/// on both keys keep the order they arrived in.
pub fn compute_standings(teams: &[Team], matches: &[Match]) -> Vec<TeamStanding> {
    let mut standings: Vec<TeamStanding> =
        teams.iter().map(|team| standing_for(team, matches)).collect();
    standings.sort_by(|a, b| b.wins.cmp(&a.wins).then(b.win_rate.total_cmp(&a.win_rate)));
    standings
}

fn standing_for(team: &Team, matches: &[Match]) -> TeamStanding {
    let mut wins = 0;
    let mut losses = 0;
    for m in matches {
        let Some(winner) = m.winner else { continue };
        if !m.involves(team.id) {
            continue;
        }
        if winner == team.id {
            wins += 1;
        } else {
            losses += 1;
        }
    }
    TeamStanding {
        team: team.clone(),
        wins,
        losses,
        total_matches: wins + losses,
        win_rate: win_rate(wins, wins + losses),
    }
}

/// Percentage of wins over decided matches, one decimal place. Zero when the
/// team has no decided match yet.
pub fn win_rate(wins: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (f64::from(wins) * 1000.0 / f64::from(total)).round() / 10.0
}

/// Decided matches, most recently played first (creation time breaks ties),
/// truncated to `limit`.
pub fn recent_results(matches: &[Match], limit: usize) -> Vec<Match> {
    let mut decided: Vec<Match> = matches.iter().filter(|m| m.is_decided()).cloned().collect();
    decided.sort_by(|a, b| {
        b.played_at
            .cmp(&a.played_at)
            .then(b.created_at.cmp(&a.created_at))
    });
    decided.truncate(limit);
    decided
}
