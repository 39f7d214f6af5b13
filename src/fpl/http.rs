//! HTTP-backed data source for the live FPL API.

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::FplError;
use crate::fpl::source::{DataSource, Resource};
use crate::Result;

#[cfg(test)]
mod tests;

/// Base path for the public FPL API.
pub const FPL_BASE_URL: &str = "https://fantasy.premierleague.com/api";

/// Data source that GETs each resource from the FPL API, or from any mirror
/// handed in as `base_url` (the tests point this at a local mock server).
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    /// Build a client with the given per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent("fpl-mini-league/0.1")
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Endpoint for a resource, following the public API routes.
    pub fn url_for(&self, resource: &Resource) -> String {
        match resource {
            Resource::Bootstrap => format!("{}/bootstrap-static/", self.base_url),
            Resource::Standings { league_id } => {
                format!("{}/leagues-classic/{}/standings/", self.base_url, league_id)
            }
            Resource::Picks {
                manager_id,
                gameweek,
            } => format!(
                "{}/entry/{}/event/{}/picks/",
                self.base_url, manager_id, gameweek
            ),
        }
    }

    async fn get_json(&self, resource: &Resource) -> Result<Value> {
        let url = self.url_for(resource);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FplError::FetchFailed {
                resource: resource.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.json::<Value>().await?)
    }
}

#[async_trait]
impl DataSource for HttpSource {
    async fn fetch(&self, resource: &Resource) -> Result<Value> {
        self.get_json(resource).await
    }
}
