//! Data structures for the league: teams, schedule, tournament, store.

mod league;
mod schedule;
mod team;
mod tournament;

pub use league::{League, LeagueError};
pub use schedule::{Match, MatchDay, MatchDayId, MatchId};
pub use team::{Team, TeamId};
pub use tournament::{Tournament, TournamentId, TournamentStatus, DEFAULT_TOURNAMENT_NAME};
