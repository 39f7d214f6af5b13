//! Dashboard report command: rank the mini-league for selected gameweeks.
//!
//! One invocation can render several gameweeks; every selection runs through
//! the same cached source, so the reference snapshot and standings are
//! fetched once and only the picks differ between selections.

use crate::{
    cli::{types::Gameweek, SourceOpts},
    fpl::{
        compute::ScoreRow,
        report::{build_gameweek_report, GameweekReport},
        source::{source_from_config, CachedSource},
    },
    Result,
};

use super::config_from_opts;

/// Handle the report command.
pub async fn handle_report(
    source_opts: SourceOpts,
    gameweeks: Option<Vec<Gameweek>>,
    as_json: bool,
) -> Result<()> {
    let config = config_from_opts(&source_opts)?;
    let source = CachedSource::new(source_from_config(&config)?, config.cache_ttl);

    let selections: Vec<Option<Gameweek>> = match gameweeks {
        Some(list) if !list.is_empty() => list.into_iter().map(Some).collect(),
        _ => vec![None],
    };

    let mut reports = Vec::new();
    for selection in selections {
        if !as_json {
            match selection {
                // tarpaulin::skip - console output
                Some(gameweek) => println!("Building report for GW{}...", gameweek),
                None => println!("Building report for the current gameweek..."),
            }
        }

        let report = build_gameweek_report(&source, config.league_id, selection).await?;

        if as_json {
            reports.push(report);
        } else {
            print_report(&report);
        }
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&reports)?); // tarpaulin::skip
    }

    Ok(())
}

fn print_report(report: &GameweekReport) {
    // tarpaulin::skip - console output
    println!();
    println!("{} - Gameweek {}", report.league_name, report.gameweek);

    if let Some(leader) = report.gameweek_leader() {
        println!("Gameweek leader: {} ({} pts)", leader.manager_name, leader.points);
    }
    if let Some(top) = report.top_bench() {
        println!("Top bench score: {} ({} pts)", top.manager_name, top.points);
    }

    println!();
    println!("Standings");
    println!("{:>5}  {:<24} {:<20} {:>6}", "Rank", "Team", "Manager", "Total");
    for row in &report.standings {
        println!(
            "{:>5}  {:<24} {:<20} {:>6}",
            row.rank, row.team_name, row.manager_name, row.total_points
        );
    }

    print_score_table("Gameweek ranking", &report.gameweek_ranking);
    print_score_table("Bench ranking", &report.bench_ranking);

    println!();
    println!("Captaincy");
    if report.captaincy.is_empty() {
        println!("  (no captain picks fetched)");
    } else {
        for row in &report.captaincy {
            println!(
                "  {:<20} {:<20} x{}",
                row.manager_name, row.player_name, row.multiplier
            );
        }
    }

    for failure in &report.failures {
        println!(
            "⚠ Picks unavailable for {} (manager {}, GW{}): {}",
            failure.manager_name, failure.manager_id, failure.gameweek, failure.reason
        );
    }
}

fn print_score_table(title: &str, rows: &[ScoreRow]) {
    // tarpaulin::skip - console output
    println!();
    println!("{}", title);
    if rows.is_empty() {
        println!("  (no picks fetched)");
        return;
    }
    for (idx, row) in rows.iter().enumerate() {
        println!("{:>5}. {:<20} {:>4}", idx + 1, row.manager_name, row.points);
    }
}
