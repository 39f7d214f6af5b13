//! Snapshot command: capture the live API into the local fixture tree.
//!
//! Produces exactly the layout [`FixtureSource`] reads, so a captured league
//! can be replayed offline with `--local`.
//!
//! [`FixtureSource`]: crate::fpl::fixtures::FixtureSource

use std::path::PathBuf;

use crate::{
    cli::types::{Gameweek, LeagueId},
    config::DEFAULT_REQUEST_TIMEOUT,
    fpl::{
        fixtures::{picks_file_name, write_fixture, BOOTSTRAP_FILE, PICKS_DIR, STANDINGS_FILE},
        http::{HttpSource, FPL_BASE_URL},
        report::resolve_default_gameweek,
        source::{DataSource, Resource},
        types::{Bootstrap, StandingsPage},
    },
    Result,
};

use super::resolve_league_id;

/// Handle the snapshot command.
pub async fn handle_snapshot(
    league_id: Option<LeagueId>,
    gameweek: Option<Gameweek>,
    out: PathBuf,
    base_url: Option<String>,
    verbose: bool,
) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    let base_url = base_url.unwrap_or_else(|| FPL_BASE_URL.to_string());
    let source = HttpSource::new(&base_url, DEFAULT_REQUEST_TIMEOUT)?;

    println!("Fetching bootstrap-static...");
    // tarpaulin::skip - HTTP call, tested via integration tests
    let bootstrap_raw = source.fetch(&Resource::Bootstrap).await?;
    write_fixture(&out.join(BOOTSTRAP_FILE), &bootstrap_raw)?;
    let bootstrap: Bootstrap = serde_json::from_value(bootstrap_raw)?;

    println!("Fetching standings for league {}...", league_id);
    let standings_raw = source.fetch(&Resource::Standings { league_id }).await?;
    write_fixture(&out.join(STANDINGS_FILE), &standings_raw)?;
    let page: StandingsPage = serde_json::from_value(standings_raw)?;

    let gameweek = gameweek.unwrap_or_else(|| resolve_default_gameweek(&bootstrap.events));
    let roster = page.standings.results;
    println!(
        "Snapshotting picks for {} managers (GW{})...",
        roster.len(),
        gameweek
    );

    let picks_dir = out.join(PICKS_DIR);
    let mut written = 0usize;
    for manager in &roster {
        let resource = Resource::Picks {
            manager_id: manager.manager_id,
            gameweek,
        };
        match source.fetch(&resource).await {
            Ok(payload) => {
                write_fixture(
                    &picks_dir.join(picks_file_name(manager.manager_id, gameweek)),
                    &payload,
                )?;
                written += 1;
                if verbose {
                    // tarpaulin::skip - console output
                    println!("  ✓ {} (manager {})", manager.manager_name, manager.manager_id);
                }
            }
            Err(err) => {
                println!(
                    "⚠ Skipping {} (manager {}, GW{}): {}",
                    manager.manager_name, manager.manager_id, gameweek, err
                );
            }
        }
    }

    println!(
        "✓ Snapshot written to {} ({} of {} managers)",
        out.display(),
        written,
        roster.len()
    );

    Ok(())
}
