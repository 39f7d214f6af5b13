//! Standings command: print the league table on its own.

use crate::{
    cli::SourceOpts,
    fpl::{
        report::load_standings,
        source::{source_from_config, CachedSource},
    },
    Result,
};

use super::config_from_opts;

/// Handle the standings command.
pub async fn handle_standings(source_opts: SourceOpts, as_json: bool) -> Result<()> {
    let config = config_from_opts(&source_opts)?;
    let source = CachedSource::new(source_from_config(&config)?, config.cache_ttl);

    let page = load_standings(&source, config.league_id).await?;

    let mut rows = page.standings.results;
    rows.sort_by_key(|row| row.rank);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?); // tarpaulin::skip
        return Ok(());
    }

    // tarpaulin::skip - console output
    println!("{}", page.league.name);
    println!("{:>5}  {:<24} {:<20} {:>6}", "Rank", "Team", "Manager", "Total");
    for row in &rows {
        println!(
            "{:>5}  {:<24} {:<20} {:>6}",
            row.rank, row.team_name, row.manager_name, row.total_points
        );
    }

    Ok(())
}
