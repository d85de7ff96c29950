//! Trade destination selection, including the synthetic "Free Agency" entry.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Display label for the free-agency destination.
pub const FREE_AGENCY_LABEL: &str = "Free Agency";

/// Option value the backend and the web trade form use for free agency.
pub const FREE_AGENCY_VALUE: &str = "__FREE_AGENCY__";

/// Where the drivers offered in a trade are going.
///
/// Picking [`TradeDestination::FreeAgency`] swaps the destination driver list
/// from a team roster to the season's free-agent pool.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TradeDestination {
    Team(String),
    FreeAgency,
}

impl TradeDestination {
    /// Value sent to the backend as `to_team`.
    pub fn wire_value(&self) -> &str {
        match self {
            TradeDestination::Team(name) => name,
            TradeDestination::FreeAgency => FREE_AGENCY_VALUE,
        }
    }

    pub fn is_free_agency(&self) -> bool {
        matches!(self, TradeDestination::FreeAgency)
    }
}

impl fmt::Display for TradeDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeDestination::Team(name) => write!(f, "{}", name),
            TradeDestination::FreeAgency => write!(f, "{}", FREE_AGENCY_LABEL),
        }
    }
}

impl FromStr for TradeDestination {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalized = trimmed.to_lowercase().replace(['-', '_', ' '], "");
        if normalized == "freeagency" {
            Ok(TradeDestination::FreeAgency)
        } else {
            Ok(TradeDestination::Team(trimmed.to_string()))
        }
    }
}
