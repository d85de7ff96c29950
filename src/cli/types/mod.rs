//! Type-safe wrappers and enums for fantasy league data.

pub mod destination;
pub mod ids;
pub mod output;

pub use destination::{TradeDestination, FREE_AGENCY_LABEL, FREE_AGENCY_VALUE};
pub use ids::{RaceRound, SeasonId};
pub use output::{NameStyle, OutputFormat};
