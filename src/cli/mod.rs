//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{Gameweek, LeagueId};

/// Data-source selection shared between commands
#[derive(Debug, Args)]
pub struct SourceOpts {
    /// League ID (or set `FPL_LEAGUE_ID` env var).
    #[clap(long, short)]
    pub league_id: Option<LeagueId>,

    /// Read local JSON fixtures instead of the live FPL API.
    #[clap(long)]
    pub local: bool,

    /// Fixture directory used with `--local`.
    #[clap(long, default_value = "data")]
    pub fixtures_dir: PathBuf,

    /// Override the FPL API base URL.
    #[clap(long)]
    pub base_url: Option<String>,

    /// Cache time-to-live in seconds for fetched resources.
    #[clap(long, default_value_t = 600)]
    pub ttl: u64,

    /// Request timeout in seconds against the live API.
    #[clap(long, default_value_t = 15)]
    pub timeout: u64,
}

#[derive(Debug, Parser)]
#[clap(name = "fpl-mini-league", about = "FPL Mini-League Dashboard CLI")]
pub struct FPL {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render the mini-league dashboard for one or more gameweeks.
    ///
    /// Defaults to the current gameweek (then the last finished one when the
    /// season is between rounds). Managers whose picks cannot be fetched are
    /// listed as warnings without sinking the rest of the report.
    Report {
        #[clap(flatten)]
        source: SourceOpts,

        /// Gameweek to render (1-38) - repeatable: `-g 4 -g 5`.
        #[clap(long, short)]
        gameweek: Option<Vec<Gameweek>>,

        /// Output the report as JSON instead of tables.
        #[clap(long)]
        json: bool,
    },

    /// Print the league standings table.
    Standings {
        #[clap(flatten)]
        source: SourceOpts,

        /// Output rows as JSON instead of a table.
        #[clap(long)]
        json: bool,
    },

    /// Snapshot the live API into the local fixture layout.
    ///
    /// Writes bootstrap-static, the league standings and every roster
    /// manager's picks for the chosen gameweek, so later runs can pass
    /// `--local`.
    Snapshot {
        /// League ID (or set `FPL_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        /// Gameweek to snapshot picks for (defaults to the current one).
        #[clap(long, short)]
        gameweek: Option<Gameweek>,

        /// Directory to write fixtures into.
        #[clap(long, default_value = "data")]
        out: PathBuf,

        /// Override the FPL API base URL.
        #[clap(long)]
        base_url: Option<String>,

        /// Print one line per fetched manager.
        #[clap(long)]
        verbose: bool,
    },
}
