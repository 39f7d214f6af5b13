//! Data-source seam between the report layer and the two fetch backends.
//!
//! Everything downstream of this module works against [`DataSource`] and
//! never learns whether payloads came from the live API or the fixture tree.
//! The backend is chosen once at startup from [`AppConfig`].

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use std::time::Duration;

use crate::cache::TtlCache;
use crate::cli::types::{Gameweek, LeagueId, ManagerId};
use crate::config::AppConfig;
use crate::fpl::fixtures::FixtureSource;
use crate::fpl::http::HttpSource;
use crate::Result;

/// A logical resource the dashboard reads, carrying its own parameters.
///
/// Doubles as the cache key for [`CachedSource`]: the variant plus its fields
/// are exactly the argument tuple of the wrapped fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Season-wide reference data: players, clubs, gameweek calendar
    Bootstrap,
    /// Classic-league standings page
    Standings { league_id: LeagueId },
    /// One manager's squad selection for one gameweek
    Picks {
        manager_id: ManagerId,
        gameweek: Gameweek,
    },
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Bootstrap => write!(f, "bootstrap-static"),
            Resource::Standings { league_id } => {
                write!(f, "standings for league {}", league_id)
            }
            Resource::Picks {
                manager_id,
                gameweek,
            } => write!(f, "picks for manager {} GW{}", manager_id, gameweek),
        }
    }
}

/// Read access to the dashboard's three resources.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch the raw JSON payload for `resource`.
    async fn fetch(&self, resource: &Resource) -> Result<Value>;
}

/// Build the backend the config asks for: the fixture tree when `use_local`
/// is set, the live API otherwise.
pub fn source_from_config(config: &AppConfig) -> Result<Box<dyn DataSource>> {
    if config.use_local {
        Ok(Box::new(FixtureSource::new(&config.fixtures_dir)))
    } else {
        Ok(Box::new(HttpSource::new(
            &config.base_url,
            config.request_timeout,
        )?))
    }
}

/// Memoizing wrapper around any [`DataSource`].
///
/// Each fetch is keyed by its full [`Resource`] and held for the configured
/// TTL, so repeated report builds in one session reuse the same payloads
/// instead of re-reading fixtures or re-hitting the API.
pub struct CachedSource {
    inner: Box<dyn DataSource>,
    cache: TtlCache<Resource, Value>,
    ttl: Duration,
}

impl CachedSource {
    pub fn new(inner: Box<dyn DataSource>, ttl: Duration) -> Self {
        Self {
            inner,
            // Bootstrap + standings + a few gameweeks of picks for a small league
            cache: TtlCache::new(256),
            ttl,
        }
    }

    /// Get cache statistics: (entries stored, capacity).
    pub fn cache_stats(&self) -> (usize, usize) {
        self.cache.memory_stats()
    }
}

#[async_trait]
impl DataSource for CachedSource {
    async fn fetch(&self, resource: &Resource) -> Result<Value> {
        self.cache
            .get_or_compute(resource.clone(), self.ttl, || self.inner.fetch(resource))
            .await
    }
}
