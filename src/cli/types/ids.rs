//! ID types for fantasy seasons and championship rounds.

use crate::error::{LeagueError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for a fantasy season identifier.
///
/// The backend hands these out when a season is created and treats them as
/// opaque strings, so no numeric format is assumed here.
///
/// # Examples
///
/// ```rust
/// use f1_fantasy::SeasonId;
///
/// let season = SeasonId::new("2025-main");
/// assert_eq!(season.as_str(), "2025-main");
/// assert_eq!(season.to_string(), "2025-main");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeasonId(String);

impl SeasonId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeasonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SeasonId {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(LeagueError::MissingSeasonId {
                env_var: crate::SEASON_ID_ENV_VAR.to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }
}

/// Championship round number (e.g. Bahrain is round 4 of 2025).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RaceRound(pub u8);

impl RaceRound {
    pub fn new(round: u8) -> Self {
        Self(round)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for RaceRound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RaceRound {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u8>()
            .map(Self)
            .map_err(|_| LeagueError::InvalidRound {
                value: s.to_string(),
            })
    }
}
