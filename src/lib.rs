//! FPL Mini-League Dashboard CLI Library
//!
//! Fetches Fantasy Premier League mini-league data (the season reference
//! snapshot, classic-league standings and per-manager gameweek picks) from
//! either the live FPL API or a local JSON fixture tree, memoizes every
//! fetch for a configurable window, and aggregates the per-gameweek
//! leaderboards the dashboard renders.
//!
//! ## Features
//!
//! - **Switchable data source**: fixture-backed or HTTP-backed, chosen once
//!   at startup and hidden behind one trait
//! - **TTL memoization**: every fetch cached by its full argument tuple,
//!   with concurrent callers sharing a single producer run
//! - **Leaderboards**: gameweek score ranking, bench-points ranking and the
//!   captaincy report with the triple-captain override
//! - **Partial-failure tolerance**: one manager's missing picks never sinks
//!   the rest of the report
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fpl_mini_league::config::AppConfig;
//! use fpl_mini_league::fpl::report::build_gameweek_report;
//! use fpl_mini_league::fpl::source::{source_from_config, CachedSource};
//! use fpl_mini_league::LeagueId;
//!
//! # async fn example() -> fpl_mini_league::Result<()> {
//! let config = AppConfig::new(LeagueId::new(665732));
//! let source = CachedSource::new(source_from_config(&config)?, config.cache_ttl);
//!
//! // None selects the current gameweek from the season calendar
//! let report = build_gameweek_report(&source, config.league_id, None).await?;
//! println!("GW{}: {} managers ranked", report.gameweek, report.gameweek_ranking.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your league ID to avoid passing it in every command:
//! ```bash
//! export FPL_LEAGUE_ID=665732
//! ```

pub mod cache;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fpl;

// Re-export commonly used types
pub use cli::types::{Gameweek, LeagueId, ManagerId, PlayerId, TeamId};
pub use error::{FplError, Result};
pub use fpl::types::{Chip, GameweekPicks, ReferenceData, StandingRow};

pub const LEAGUE_ID_ENV_VAR: &str = "FPL_LEAGUE_ID";
