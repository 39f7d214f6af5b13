//! Wire models for the FPL API payloads the dashboard consumes.
//!
//! Field names follow the JSON the API serves; where the API vocabulary is
//! opaque (`entry`, `player_name`, `total`) the structs rename on the way in
//! so the rest of the code speaks manager/team/points.

use crate::cli::types::{Gameweek, ManagerId, PlayerId, TeamId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;


/// Shown when a captain's element id is missing from the bootstrap snapshot.
pub const UNKNOWN_PLAYER: &str = "Unknown Player";

/// One player from the bootstrap `elements` array.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Element {
    pub id: PlayerId,
    /// Short display name the FPL site shows (e.g. "Haaland")
    pub web_name: String,
}

/// One Premier League club from the bootstrap `teams` array.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

/// One gameweek from the bootstrap `events` calendar.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Event {
    pub id: Gameweek,
    pub is_current: bool,
    pub finished: bool,
}

/// Root of the `bootstrap-static` payload, trimmed to the consumed fields.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Bootstrap {
    pub elements: Vec<Element>,
    pub teams: Vec<Team>,
    pub events: Vec<Event>,
}

/// Season-wide lookup tables shared by every manager's report.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    /// Player id to display name
    pub players: HashMap<PlayerId, String>,
    /// Club id to club name
    pub teams: HashMap<TeamId, String>,
    /// Gameweeks in the order the API serves them
    pub gameweeks: Vec<Event>,
}

impl ReferenceData {
    pub fn from_bootstrap(bootstrap: Bootstrap) -> Self {
        Self {
            players: bootstrap
                .elements
                .into_iter()
                .map(|element| (element.id, element.web_name))
                .collect(),
            teams: bootstrap
                .teams
                .into_iter()
                .map(|team| (team.id, team.name))
                .collect(),
            gameweeks: bootstrap.events,
        }
    }

    /// Display name for a player id, falling back to [`UNKNOWN_PLAYER`] for
    /// ids the snapshot does not know.
    pub fn player_name(&self, id: PlayerId) -> &str {
        self.players.get(&id).map(String::as_str).unwrap_or(UNKNOWN_PLAYER)
    }
}

/// Classic-league standings page: league header plus one row per manager.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StandingsPage {
    pub league: LeagueInfo,
    pub standings: StandingsResults,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueInfo {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StandingsResults {
    pub results: Vec<StandingRow>,
}

/// One manager in the league roster.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StandingRow {
    #[serde(rename = "entry")]
    pub manager_id: ManagerId,
    #[serde(rename = "player_name")]
    pub manager_name: String,
    #[serde(rename = "entry_name")]
    pub team_name: String,
    pub rank: u32,
    #[serde(rename = "total")]
    pub total_points: i32,
}

/// A manager's squad selection for one gameweek.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GameweekPicks {
    #[serde(default)]
    pub active_chip: Option<Chip>,
    pub entry_history: EntryHistory,
    pub picks: Vec<Pick>,
}

impl GameweekPicks {
    /// The captain pick, if the squad has one flagged.
    pub fn captain(&self) -> Option<&Pick> {
        self.picks.iter().find(|pick| pick.is_captain)
    }

    /// Multiplier a pick actually scores with: the triple-captain chip forces
    /// 3 regardless of the stored value.
    pub fn effective_multiplier(&self, pick: &Pick) -> u8 {
        if self.active_chip == Some(Chip::TripleCaptain) {
            3
        } else {
            pick.multiplier
        }
    }
}

/// Realized gameweek totals for one manager.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EntryHistory {
    pub points: i32,
    pub points_on_bench: i32,
}

/// One squad slot in a gameweek selection.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Pick {
    pub element: PlayerId,
    pub is_captain: bool,
    pub multiplier: u8,
}

/// Chips a manager can play, under their wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Chip {
    #[serde(rename = "3xc")]
    TripleCaptain,
    #[serde(rename = "bboost")]
    BenchBoost,
    #[serde(rename = "freehit")]
    FreeHit,
    #[serde(rename = "wildcard")]
    Wildcard,
    /// Any chip the API adds later; nothing in the report keys off it
    #[serde(other)]
    Other,
}
