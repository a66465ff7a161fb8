//! Demo data: a small league to click around in, loaded at startup when
//! DEMO_DATA=1.

use crate::logic::controller;
use crate::models::{League, TournamentStatus};

const DEMO_TEAMS: &[&str] = &[
    "Las ratas",
    "FA1",
    "Papois",
    "Guaro Squad",
    "FA2",
    "FA3",
    "The Uwu Team",
    "Cascaras Blanca",
    "Los 9",
];

/// Populate an empty league with demo teams, three match days, and a few
/// first-day fixtures. Does nothing and returns false when any teams already
/// exist, so running it twice is safe.
pub fn seed_demo(league: &mut League) -> bool {
    if !league.teams.is_empty() {
        return false;
    }

    let mut team_ids = Vec::new();
    for name in DEMO_TEAMS {
        if let Ok(id) = league.add_team(name, None, None) {
            team_ids.push(id);
        }
    }

    let mut day_ids = Vec::new();
    for n in 1..=3u32 {
        if let Ok(id) = league.add_match_day(n, &format!("Jornada {n}"), None) {
            day_ids.push(id);
        }
    }

    if team_ids.len() >= 6 {
        if let Some(&first_day) = day_ids.first() {
            for pair in team_ids.chunks_exact(2).take(3) {
                let _ = controller::create_match(league, first_day, pair[0], pair[1]);
            }
        }
    }

    let t = controller::current_tournament(league);
    t.name = "League Season 1".to_string();
    t.status = TournamentStatus::InProgress;
    t.touch();
    true
}
