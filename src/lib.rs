//! Fantasy Formula 1 League Client Library
//!
//! A Rust client for a fantasy F1 league backend: season standings, locked
//! rosters, race-by-race points, trades, and the pre-season draft.
//!
//! ## Features
//!
//! - **Season View**: Leaderboard, lineups, driver-by-race grid, trade log and free agents
//! - **Trades**: Proposal options (including free agency) and locked-season trade submission
//! - **Race Points**: Ingest the next unprocessed round, or the latest one
//! - **Draft**: Team registration, draft picks, undo, reset and lock
//! - **Rendering**: Plain text, HTML fragments with team colors, or JSON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use f1_fantasy::{backend::BackendClient, commands::season::load_season_data, SeasonId};
//!
//! # async fn example() -> f1_fantasy::Result<()> {
//! let client = BackendClient::new(f1_fantasy::DEFAULT_BACKEND_URL)?;
//! let view = load_season_data(&client, &SeasonId::new("my-season")).await?;
//!
//! for row in view.leaderboard() {
//!     println!("{} {:.2}", row.team, row.points);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export F1_FANTASY_SEASON_ID=my-season
//! export F1_FANTASY_BACKEND_URL=http://localhost:8000
//! ```

pub mod backend;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod render;
pub mod view;

// Re-export commonly used types
pub use backend::{SeasonSnapshot, TradeRequest};
pub use cli::types::{RaceRound, SeasonId, TradeDestination};
pub use error::{LeagueError, Result};
pub use view::SeasonView;

pub const SEASON_ID_ENV_VAR: &str = "F1_FANTASY_SEASON_ID";
pub const BACKEND_URL_ENV_VAR: &str = "F1_FANTASY_BACKEND_URL";
pub const DEFAULT_BACKEND_URL: &str = "https://f1-fantasy-backend-mddo.onrender.com";
