//! Per-gameweek orchestration: fetch, tolerate per-manager failures, rank.
//!
//! One call to [`build_gameweek_report`] is one dashboard render. Reference
//! data and standings are load-bearing and abort the build when they fail;
//! a manager whose picks cannot be fetched is reported and excluded instead.

use serde::Serialize;
use std::collections::HashMap;

use crate::cli::types::{Gameweek, LeagueId, ManagerId};
use crate::error::FplError;
use crate::fpl::compute::{
    bench_ranking, captaincy_report, gameweek_ranking, CaptainRow, ScoreRow,
};
use crate::fpl::source::{DataSource, Resource};
use crate::fpl::types::{
    Bootstrap, Event, GameweekPicks, ReferenceData, StandingRow, StandingsPage,
};
use crate::Result;


/// A manager whose picks could not be fetched for the selected gameweek.
#[derive(Debug, Clone, Serialize)]
pub struct PicksFailure {
    pub manager_id: ManagerId,
    pub manager_name: String,
    pub gameweek: Gameweek,
    pub reason: String,
}

/// Everything one dashboard render needs for one gameweek.
#[derive(Debug, Clone, Serialize)]
pub struct GameweekReport {
    pub gameweek: Gameweek,
    pub league_name: String,
    /// Roster sorted by league rank for display
    pub standings: Vec<StandingRow>,
    pub gameweek_ranking: Vec<ScoreRow>,
    pub bench_ranking: Vec<ScoreRow>,
    pub captaincy: Vec<CaptainRow>,
    /// Managers excluded from the rankings, with the reason
    pub failures: Vec<PicksFailure>,
}

impl GameweekReport {
    /// Gameweek leader, when at least one manager's picks were fetched.
    pub fn gameweek_leader(&self) -> Option<&ScoreRow> {
        self.gameweek_ranking.first()
    }

    /// Best bench score of the gameweek.
    pub fn top_bench(&self) -> Option<&ScoreRow> {
        self.bench_ranking.first()
    }
}

/// The gameweek a fresh render should show: the current one, else the most
/// recently finished one, else the season's last.
pub fn resolve_default_gameweek(gameweeks: &[Event]) -> Gameweek {
    if let Some(current) = gameweeks.iter().find(|event| event.is_current) {
        return current.id;
    }

    gameweeks
        .iter()
        .filter(|event| event.finished)
        .map(|event| event.id)
        .max()
        .unwrap_or(Gameweek::LAST)
}

/// Fetch and parse the reference snapshot.
pub async fn load_reference(source: &dyn DataSource) -> Result<ReferenceData> {
    let resource = Resource::Bootstrap;
    let payload = source.fetch(&resource).await?;
    let bootstrap: Bootstrap = parse_payload(&resource, payload)?;
    Ok(ReferenceData::from_bootstrap(bootstrap))
}

/// Fetch and parse the league standings page.
pub async fn load_standings(
    source: &dyn DataSource,
    league_id: LeagueId,
) -> Result<StandingsPage> {
    let resource = Resource::Standings { league_id };
    let payload = source.fetch(&resource).await?;
    parse_payload(&resource, payload)
}

async fn fetch_picks(source: &dyn DataSource, resource: &Resource) -> Result<GameweekPicks> {
    let payload = source.fetch(resource).await?;
    parse_payload(resource, payload)
}

/// Deserialize a fetched payload, naming the resource when it is malformed.
fn parse_payload<T: serde::de::DeserializeOwned>(
    resource: &Resource,
    payload: serde_json::Value,
) -> Result<T> {
    serde_json::from_value(payload).map_err(|source| FplError::MalformedPayload {
        resource: resource.to_string(),
        source,
    })
}

/// Build the full dashboard payload for one gameweek selection.
///
/// Picks are fetched one manager at a time in roster order; a failed or
/// malformed picks payload records a [`PicksFailure`] and the build goes on.
pub async fn build_gameweek_report(
    source: &dyn DataSource,
    league_id: LeagueId,
    gameweek: Option<Gameweek>,
) -> Result<GameweekReport> {
    let reference = load_reference(source).await?;
    let standings_page = load_standings(source, league_id).await?;

    let StandingsPage { league, standings } = standings_page;
    let roster = standings.results;

    let gameweek = gameweek.unwrap_or_else(|| resolve_default_gameweek(&reference.gameweeks));

    let mut picks_by_manager: HashMap<ManagerId, GameweekPicks> = HashMap::new();
    let mut failures = Vec::new();
    for manager in &roster {
        let resource = Resource::Picks {
            manager_id: manager.manager_id,
            gameweek,
        };
        match fetch_picks(source, &resource).await {
            Ok(picks) => {
                picks_by_manager.insert(manager.manager_id, picks);
            }
            Err(err) => failures.push(PicksFailure {
                manager_id: manager.manager_id,
                manager_name: manager.manager_name.clone(),
                gameweek,
                reason: err.to_string(),
            }),
        }
    }

    let score_rows = gameweek_ranking(&roster, &picks_by_manager);
    let bench_rows = bench_ranking(&roster, &picks_by_manager);
    let captain_rows = captaincy_report(&roster, &picks_by_manager, &reference);

    let mut table = roster;
    table.sort_by_key(|row| row.rank);

    Ok(GameweekReport {
        gameweek,
        league_name: league.name,
        standings: table,
        gameweek_ranking: score_rows,
        bench_ranking: bench_rows,
        captaincy: captain_rows,
        failures,
    })
}
