//! Round-robin league tracker: library with models and business logic.

pub mod logic;
pub mod models;

pub use logic::{
    compute_standings, create_match, current_tournament, generate_round_robin, recent_results,
    record_result, reset, seed_demo, set_champion, set_status, win_rate, TeamStanding,
};
pub use models::{
    League, LeagueError, Match, MatchDay, MatchDayId, MatchId, Team, TeamId, Tournament,
    TournamentId, TournamentStatus, DEFAULT_TOURNAMENT_NAME,
};
