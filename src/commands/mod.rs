//! Command implementations for the FPL Mini-League CLI

pub mod report;
pub mod snapshot;
pub mod standings;

use std::time::Duration;

use crate::{
    cli::SourceOpts, config::AppConfig, error::FplError, LeagueId, Result, LEAGUE_ID_ENV_VAR,
};

/// League id from the CLI flag, else the `FPL_LEAGUE_ID` env var.
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    league_id
        .or_else(|| {
            std::env::var(LEAGUE_ID_ENV_VAR)
                .ok()
                .and_then(|s| s.parse::<LeagueId>().ok())
        })
        .ok_or_else(|| FplError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        })
}

/// Assemble the runtime config from the shared source options.
pub fn config_from_opts(opts: &SourceOpts) -> Result<AppConfig> {
    let league_id = resolve_league_id(opts.league_id)?;

    let mut config = AppConfig::new(league_id);
    config.use_local = opts.local;
    config.fixtures_dir = opts.fixtures_dir.clone();
    if let Some(base_url) = &opts.base_url {
        config.base_url = base_url.clone();
    }
    config.cache_ttl = Duration::from_secs(opts.ttl);
    config.request_timeout = Duration::from_secs(opts.timeout);

    Ok(config)
}
