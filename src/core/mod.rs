//! Core utilities for the fantasy league client
//!
//! - `calendar`: the fixed fantasy race calendar and round arithmetic
//! - `colors`: per-team color assignment for rendered views
//! - `config`: backend URL and season resolution
//! - `logging`: tracing subscriber setup

pub mod calendar;
pub mod colors;
pub mod config;
pub mod logging;

// Re-export commonly used items for convenience
pub use calendar::{next_round, resolve_race, Race, FIRST_ROUND, LAST_ROUND};
pub use colors::ColorMap;
pub use config::Config;
