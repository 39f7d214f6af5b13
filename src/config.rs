//! Runtime configuration resolved once at startup.

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::types::LeagueId;
use crate::fpl::http::FPL_BASE_URL;

/// Default fixture directory for `--local` runs.
pub const DEFAULT_FIXTURES_DIR: &str = "data";
/// Default memoization window for fetched resources.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(600);
/// Default per-request timeout against the live API.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Everything the data and report layers need, assembled by the command
/// layer from CLI flags and the environment. The selected mode, league and
/// cache window travel together instead of living in process-wide state.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub league_id: LeagueId,
    /// Read the local fixture tree instead of the live API
    pub use_local: bool,
    pub fixtures_dir: PathBuf,
    pub base_url: String,
    pub cache_ttl: Duration,
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Config with defaults for everything except the league.
    pub fn new(league_id: LeagueId) -> Self {
        Self {
            league_id,
            use_local: false,
            fixtures_dir: PathBuf::from(DEFAULT_FIXTURES_DIR),
            base_url: FPL_BASE_URL.to_string(),
            cache_ttl: DEFAULT_CACHE_TTL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::new(LeagueId::new(665732));

        assert_eq!(config.league_id.as_u32(), 665732);
        assert!(!config.use_local);
        assert_eq!(config.fixtures_dir, PathBuf::from("data"));
        assert_eq!(config.base_url, FPL_BASE_URL);
        assert_eq!(config.cache_ttl, Duration::from_secs(600));
        assert_eq!(config.request_timeout, Duration::from_secs(15));
    }
}
