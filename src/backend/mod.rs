//! Remote fantasy league backend: wire types and the HTTP client.

pub mod http;
pub mod types;

pub use http::BackendClient;
pub use types::{RacePoints, RaceTarget, SeasonSnapshot, TradeRequest};
