//! Round-robin fixture generation.
//!
//! Circle method: one slot stays fixed while the rest rotate each round. Odd
//! team counts get a bye slot. The initial ordering is shuffled so repeated
//! generations pair the rounds differently.

use crate::models::{League, LeagueError, Match, MatchDay, MatchDayId, TeamId};
use rand::seq::SliceRandom;

/// Generate a full single round-robin over all teams: one match day per
/// round, numbered consecutively from `start_day` and named "Jornada N".
/// Returns the created match day ids in round order.
///
/// Every target day number must be free; nothing is written otherwise.
pub fn generate_round_robin(
    league: &mut League,
    start_day: u32,
) -> Result<Vec<MatchDayId>, LeagueError> {
    if start_day == 0 {
        return Err(LeagueError::InvalidDayNumber);
    }
    if league.teams.len() < 2 {
        return Err(LeagueError::NotEnoughTeams);
    }

    let mut slots: Vec<Option<TeamId>> = league.teams.iter().map(|t| Some(t.id)).collect();
    slots.shuffle(&mut rand::thread_rng());
    if slots.len() % 2 == 1 {
        slots.push(None); // bye
    }
    let rounds = slots.len() - 1;

    for offset in 0..rounds as u32 {
        let day_number = start_day + offset;
        if league.match_days.iter().any(|d| d.day_number == day_number) {
            return Err(LeagueError::DuplicateDayNumber(day_number));
        }
    }

    let mut created = Vec::with_capacity(rounds);
    for round in 0..rounds {
        let day_number = start_day + round as u32;
        let day = MatchDay::new(day_number, format!("Jornada {day_number}"), None);
        let day_id = day.id;
        league.match_days.push(day);

        let half = slots.len() / 2;
        for i in 0..half {
            if let (Some(a), Some(b)) = (slots[i], slots[slots.len() - 1 - i]) {
                league.matches.push(Match::new(day_id, a, b));
            }
        }
        slots[1..].rotate_right(1);
        created.push(day_id);
    }
    Ok(created)
}
