//! Integration tests for round-robin fixture generation.

use league_tracker_web::{generate_round_robin, League, LeagueError, TeamId};
use std::collections::HashSet;

fn league_with_n_teams(n: usize) -> League {
    let mut league = League::new();
    for i in 0..n {
        league.add_team(&format!("T{i}"), None, None).unwrap();
    }
    league
}

fn pairings(league: &League) -> Vec<(TeamId, TeamId)> {
    league
        .matches
        .iter()
        .map(|m| {
            if m.team_a < m.team_b {
                (m.team_a, m.team_b)
            } else {
                (m.team_b, m.team_a)
            }
        })
        .collect()
}

#[test]
fn even_team_count_plays_every_pair_once() {
    let mut league = league_with_n_teams(4);
    let days = generate_round_robin(&mut league, 1).unwrap();

    assert_eq!(days.len(), 3);
    assert_eq!(league.matches.len(), 6);
    for &day in &days {
        assert_eq!(league.matches_for_day(day).len(), 2);
    }

    let pairs = pairings(&league);
    let unique: HashSet<_> = pairs.iter().collect();
    assert_eq!(unique.len(), 6);
    assert!(league.matches.iter().all(|m| m.team_a != m.team_b));
}

#[test]
fn odd_team_count_gets_a_bye_each_round() {
    let mut league = league_with_n_teams(5);
    let days = generate_round_robin(&mut league, 1).unwrap();

    assert_eq!(days.len(), 5);
    assert_eq!(league.matches.len(), 10);
    for &day in &days {
        assert_eq!(league.matches_for_day(day).len(), 2);
    }

    let pairs = pairings(&league);
    let unique: HashSet<_> = pairs.iter().collect();
    assert_eq!(unique.len(), 10);
}

#[test]
fn needs_at_least_two_teams() {
    let mut league = league_with_n_teams(1);
    assert!(matches!(
        generate_round_robin(&mut league, 1),
        Err(LeagueError::NotEnoughTeams)
    ));
}

#[test]
fn day_numbers_run_consecutively_from_start() {
    let mut league = league_with_n_teams(4);
    generate_round_robin(&mut league, 4).unwrap();

    let numbers: Vec<_> = league
        .match_days_in_order()
        .iter()
        .map(|d| (d.day_number, d.name.clone()))
        .collect();
    assert_eq!(
        numbers,
        vec![
            (4, "Jornada 4".to_string()),
            (5, "Jornada 5".to_string()),
            (6, "Jornada 6".to_string()),
        ]
    );
}

#[test]
fn refuses_day_numbers_already_in_use() {
    let mut league = league_with_n_teams(4);
    league.add_match_day(2, "Jornada 2", None).unwrap();

    assert!(matches!(
        generate_round_robin(&mut league, 1),
        Err(LeagueError::DuplicateDayNumber(2))
    ));
    // Nothing was created.
    assert_eq!(league.match_days.len(), 1);
    assert!(league.matches.is_empty());
}
