//! Type-safe wrappers for Fantasy Premier League identifiers.

pub mod gameweek;
pub mod ids;

pub use gameweek::Gameweek;
pub use ids::{LeagueId, ManagerId, PlayerId, TeamId};
