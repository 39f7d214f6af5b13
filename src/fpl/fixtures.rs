//! Fixture-backed data source reading a local JSON snapshot tree.
//!
//! Layout under the fixture directory:
//! - `bootstrap-static.json`
//! - `league-standings.json`
//! - `picks/manager_{manager_id}_gw_{gameweek}.json`

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::cli::types::{Gameweek, ManagerId};
use crate::error::FplError;
use crate::fpl::source::{DataSource, Resource};
use crate::Result;

pub const BOOTSTRAP_FILE: &str = "bootstrap-static.json";
pub const STANDINGS_FILE: &str = "league-standings.json";
pub const PICKS_DIR: &str = "picks";

/// File name holding one manager's picks for one gameweek.
pub fn picks_file_name(manager_id: ManagerId, gameweek: Gameweek) -> String {
    format!("manager_{}_gw_{}.json", manager_id, gameweek)
}

/// Data source that reads the fixture tree instead of the live API.
pub struct FixtureSource {
    dir: PathBuf,
}

impl FixtureSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Fixture path for a resource. The standings path ignores the league id:
    /// a fixture tree holds one league's snapshot.
    pub fn resource_path(&self, resource: &Resource) -> PathBuf {
        match resource {
            Resource::Bootstrap => self.dir.join(BOOTSTRAP_FILE),
            Resource::Standings { .. } => self.dir.join(STANDINGS_FILE),
            Resource::Picks {
                manager_id,
                gameweek,
            } => self
                .dir
                .join(PICKS_DIR)
                .join(picks_file_name(*manager_id, *gameweek)),
        }
    }

    fn read_json(&self, resource: &Resource) -> Result<Value> {
        let path = self.resource_path(resource);
        if !path.exists() {
            return Err(FplError::FixtureMissing { path });
        }

        let contents = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

#[async_trait]
impl DataSource for FixtureSource {
    async fn fetch(&self, resource: &Resource) -> Result<Value> {
        self.read_json(resource)
    }
}

/// Write one fixture as pretty-printed JSON, creating parent directories.
pub fn write_fixture(path: &Path, payload: &Value) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, serde_json::to_string_pretty(payload)?)?;
    Ok(())
}
