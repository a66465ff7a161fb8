//! League business logic: standings, state transitions, fixtures, seeding.

mod controller;
mod demo;
mod fixtures;
mod standings;

pub use controller::{
    create_match, current_tournament, record_result, reset, set_champion, set_status,
};
pub use demo::seed_demo;
pub use fixtures::generate_round_robin;
pub use standings::{compute_standings, recent_results, win_rate, TeamStanding};
