//! Gameweek type for the Premier League season calendar.

use crate::error::{FplError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for gameweek numbers.
///
/// A season has 38 gameweeks; parsing rejects anything outside 1-38 so the
/// rest of the code never sees a round that cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Gameweek(pub u8);

impl Gameweek {
    /// Opening gameweek of a season.
    pub const FIRST: Gameweek = Gameweek(1);
    /// Final gameweek of a season.
    pub const LAST: Gameweek = Gameweek(38);

    pub fn new(gameweek: u8) -> Self {
        Self(gameweek)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Gameweek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Gameweek {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self> {
        let value: u8 = s.parse()?;
        if !(Self::FIRST.0..=Self::LAST.0).contains(&value) {
            return Err(FplError::GameweekOutOfRange { value });
        }
        Ok(Self(value))
    }
}
