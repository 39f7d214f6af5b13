//! Leaderboard aggregation over one gameweek's fetched picks.
//!
//! Pure functions: the orchestration layer hands in the roster and whatever
//! picks it managed to fetch, and managers without picks simply produce no
//! rows here.

use serde::Serialize;
use std::collections::HashMap;

use crate::cli::types::ManagerId;
use crate::fpl::types::{GameweekPicks, ReferenceData, StandingRow};


/// One row of the gameweek or bench ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRow {
    pub manager_name: String,
    pub points: i32,
}

/// One row of the captaincy report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaptainRow {
    pub manager_name: String,
    pub player_name: String,
    pub multiplier: u8,
}

/// Rank managers by gameweek score, best first.
/// Ties keep roster order (the sort is stable).
pub fn gameweek_ranking(
    roster: &[StandingRow],
    picks_by_manager: &HashMap<ManagerId, GameweekPicks>,
) -> Vec<ScoreRow> {
    ranking_by(roster, picks_by_manager, |picks| {
        picks.entry_history.points
    })
}

/// Rank managers by points left on the bench, best first.
pub fn bench_ranking(
    roster: &[StandingRow],
    picks_by_manager: &HashMap<ManagerId, GameweekPicks>,
) -> Vec<ScoreRow> {
    ranking_by(roster, picks_by_manager, |picks| {
        picks.entry_history.points_on_bench
    })
}

fn ranking_by(
    roster: &[StandingRow],
    picks_by_manager: &HashMap<ManagerId, GameweekPicks>,
    metric: impl Fn(&GameweekPicks) -> i32,
) -> Vec<ScoreRow> {
    let mut rows: Vec<ScoreRow> = roster
        .iter()
        .filter_map(|manager| {
            picks_by_manager.get(&manager.manager_id).map(|picks| ScoreRow {
                manager_name: manager.manager_name.clone(),
                points: metric(picks),
            })
        })
        .collect();

    rows.sort_by(|a, b| b.points.cmp(&a.points));
    rows
}

/// One row per manager whose fetched picks flag a captain, with the player
/// name resolved through the reference snapshot and the multiplier the
/// captain actually scores with.
pub fn captaincy_report(
    roster: &[StandingRow],
    picks_by_manager: &HashMap<ManagerId, GameweekPicks>,
    reference: &ReferenceData,
) -> Vec<CaptainRow> {
    roster
        .iter()
        .filter_map(|manager| {
            let picks = picks_by_manager.get(&manager.manager_id)?;
            let captain = picks.captain()?;

            Some(CaptainRow {
                manager_name: manager.manager_name.clone(),
                player_name: reference.player_name(captain.element).to_string(),
                multiplier: picks.effective_multiplier(captain),
            })
        })
        .collect()
}
