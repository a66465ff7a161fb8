//! Integration tests for the standings computation: derived stats and ranking.

use chrono::{Duration, Utc};
use league_tracker_web::{compute_standings, recent_results, win_rate, Match, Team, TeamId};
use uuid::Uuid;

fn decided(day: Uuid, a: TeamId, b: TeamId, winner: TeamId) -> Match {
    let mut m = Match::new(day, a, b);
    m.winner = Some(winner);
    m.played_at = Some(Utc::now());
    m
}

#[test]
fn no_decided_matches_means_zero_stats() {
    let teams = vec![Team::new("A"), Team::new("B")];
    let day = Uuid::new_v4();
    // A scheduled but undecided match does not count.
    let matches = vec![Match::new(day, teams[0].id, teams[1].id)];

    let standings = compute_standings(&teams, &matches);

    assert_eq!(standings.len(), 2);
    for row in &standings {
        assert_eq!(row.wins, 0);
        assert_eq!(row.losses, 0);
        assert_eq!(row.total_matches, 0);
        assert_eq!(row.win_rate, 0.0);
    }
}

#[test]
fn wins_plus_losses_equals_total() {
    let teams = vec![Team::new("A"), Team::new("B"), Team::new("C")];
    let (a, b, c) = (teams[0].id, teams[1].id, teams[2].id);
    let day = Uuid::new_v4();
    let matches = vec![
        decided(day, a, b, a),
        decided(day, a, c, c),
        decided(day, b, c, b),
        Match::new(day, a, b),
    ];

    for row in compute_standings(&teams, &matches) {
        assert_eq!(row.wins + row.losses, row.total_matches);
    }
}

#[test]
fn win_rate_rounds_to_one_decimal() {
    assert_eq!(win_rate(0, 0), 0.0);
    assert_eq!(win_rate(2, 3), 66.7);
    assert_eq!(win_rate(1, 3), 33.3);
    assert_eq!(win_rate(3, 4), 75.0);
    assert_eq!(win_rate(1, 1), 100.0);
}

#[test]
fn ranking_sorts_by_wins_then_win_rate() {
    // A: 3W 1L (75.0), B: 3W 2L (60.0), C: 2W 0L (100.0); D is the filler
    // opponent and ends up on 3W 8L (27.3).
    let teams = vec![Team::new("A"), Team::new("B"), Team::new("C"), Team::new("D")];
    let (a, b, c, d) = (teams[0].id, teams[1].id, teams[2].id, teams[3].id);
    let day = Uuid::new_v4();
    let mut matches = Vec::new();
    for _ in 0..3 {
        matches.push(decided(day, a, d, a));
        matches.push(decided(day, b, d, b));
    }
    matches.push(decided(day, a, d, d));
    matches.push(decided(day, b, d, d));
    matches.push(decided(day, b, d, d));
    matches.push(decided(day, c, d, c));
    matches.push(decided(day, c, d, c));

    let standings = compute_standings(&teams, &matches);

    let order: Vec<&str> = standings.iter().map(|r| r.team.name.as_str()).collect();
    assert_eq!(order, ["A", "B", "D", "C"]);
    assert_eq!(standings[0].win_rate, 75.0);
    assert_eq!(standings[1].win_rate, 60.0);
    assert_eq!(standings[2].win_rate, 27.3);
    assert_eq!(standings[3].win_rate, 100.0);
}

#[test]
fn fully_tied_teams_keep_input_order() {
    let x = Team::new("X");
    let y = Team::new("Y");
    let z = Team::new("Z");
    let day = Uuid::new_v4();
    // X and Y are identical: one win each against Z.
    let matches = vec![
        decided(day, x.id, z.id, x.id),
        decided(day, y.id, z.id, y.id),
    ];

    let forward = compute_standings(&[x.clone(), y.clone(), z.clone()], &matches);
    assert_eq!(forward[0].team.name, "X");
    assert_eq!(forward[1].team.name, "Y");

    let reversed = compute_standings(&[y, x, z], &matches);
    assert_eq!(reversed[0].team.name, "Y");
    assert_eq!(reversed[1].team.name, "X");
}

#[test]
fn recent_results_orders_by_played_then_created_and_limits() {
    let teams = vec![Team::new("A"), Team::new("B")];
    let (a, b) = (teams[0].id, teams[1].id);
    let day = Uuid::new_v4();
    let base = Utc::now();

    let mut matches = Vec::new();
    for i in 0..7i64 {
        let mut m = decided(day, a, b, a);
        m.played_at = Some(base - Duration::minutes(i));
        matches.push(m);
    }
    // Undecided matches never show up.
    matches.push(Match::new(day, a, b));

    let recent = recent_results(&matches, 5);
    assert_eq!(recent.len(), 5);
    assert_eq!(recent[0].played_at, Some(base));
    for pair in recent.windows(2) {
        assert!(pair[0].played_at >= pair[1].played_at);
    }

    // Same played_at: newest created_at first.
    let mut early = decided(day, a, b, a);
    early.played_at = Some(base);
    early.created_at = base - Duration::hours(2);
    let mut late = decided(day, a, b, b);
    late.played_at = Some(base);
    late.created_at = base - Duration::hours(1);
    let tied = recent_results(&[early.clone(), late.clone()], 5);
    assert_eq!(tied[0].id, late.id);
    assert_eq!(tied[1].id, early.id);
}
