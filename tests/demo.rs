//! Integration tests for demo seeding.

use league_tracker_web::{current_tournament, seed_demo, League, TournamentStatus};

#[test]
fn seeding_populates_an_empty_league() {
    let mut league = League::new();
    assert!(seed_demo(&mut league));

    assert_eq!(league.teams.len(), 9);
    assert_eq!(league.match_days.len(), 3);
    assert_eq!(league.matches.len(), 3);
    // All demo fixtures sit in the first match day.
    let first = league
        .match_days_in_order()
        .first()
        .map(|d| d.id)
        .unwrap();
    assert!(league.matches.iter().all(|m| m.match_day == first));

    let t = current_tournament(&mut league);
    assert_eq!(t.name, "League Season 1");
    assert_eq!(t.status, TournamentStatus::InProgress);
}

#[test]
fn seeding_twice_is_a_no_op() {
    let mut league = League::new();
    assert!(seed_demo(&mut league));
    assert!(!seed_demo(&mut league));

    assert_eq!(league.teams.len(), 9);
    assert_eq!(league.match_days.len(), 3);
    assert_eq!(league.matches.len(), 3);
    assert_eq!(league.tournaments.len(), 1);
}
