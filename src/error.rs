//! Error types for the FPL Mini-League CLI

use std::path::PathBuf;

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, FplError>;

#[derive(Error, Debug)]
pub enum FplError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Fetch failed for {resource}: HTTP {status}")]
    FetchFailed { resource: String, status: u16 },

    #[error("Fixture not found: {}", path.display())]
    FixtureMissing { path: PathBuf },

    #[error("Malformed {resource} payload: {source}")]
    MalformedPayload {
        resource: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Failed to parse ID: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Gameweek {value} is out of range (1-38)")]
    GameweekOutOfRange { value: u8 },
}
