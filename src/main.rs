//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use fpl_mini_league::{
    cli::{Commands, FPL},
    commands::{
        report::handle_report, snapshot::handle_snapshot, standings::handle_standings,
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = FPL::parse();

    match app.command {
        Commands::Report {
            source,
            gameweek,
            json,
        } => handle_report(source, gameweek, json).await?,

        Commands::Standings { source, json } => handle_standings(source, json).await?,

        Commands::Snapshot {
            league_id,
            gameweek,
            out,
            base_url,
            verbose,
        } => handle_snapshot(league_id, gameweek, out, base_url, verbose).await?,
    }

    Ok(())
}
