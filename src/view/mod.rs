//! The season view model.
//!
//! A [`SeasonView`] holds one load of a season: the snapshot the backend
//! returned, the free-agent pool, and the team colors derived from them. Each
//! view (leaderboard, lineups, race grid, trade history, free agents, trade
//! options) is computed from it on demand; nothing here talks to the network.

pub mod lineups;
pub mod leaderboard;
pub mod race_grid;
pub mod trade_form;

pub use leaderboard::LeaderboardRow;
pub use lineups::LineupGrid;
pub use race_grid::{DriverRow, RaceCell, RaceGrid};
pub use trade_form::{TradeOptions, TradeSelection};

use crate::{
    backend::SeasonSnapshot,
    cli::types::{RaceRound, SeasonId},
    core::{calendar, ColorMap},
};

#[derive(Debug, Clone)]
pub struct SeasonView {
    season_id: SeasonId,
    snapshot: SeasonSnapshot,
    free_agents: Vec<String>,
    colors: ColorMap,
}

impl SeasonView {
    pub fn new(season_id: SeasonId, snapshot: SeasonSnapshot) -> Self {
        let colors = ColorMap::assign(
            snapshot
                .teams
                .keys()
                .chain(snapshot.points.keys())
                .map(String::as_str),
        );
        Self {
            season_id,
            snapshot,
            free_agents: Vec::new(),
            colors,
        }
    }

    pub fn with_free_agents(mut self, free_agents: Vec<String>) -> Self {
        self.free_agents = free_agents;
        self
    }

    pub fn season_id(&self) -> &SeasonId {
        &self.season_id
    }

    pub fn snapshot(&self) -> &SeasonSnapshot {
        &self.snapshot
    }

    pub fn colors(&self) -> &ColorMap {
        &self.colors
    }

    pub fn free_agents(&self) -> &[String] {
        &self.free_agents
    }

    /// Trade log exactly as the backend ordered it.
    pub fn trade_history(&self) -> &[String] {
        &self.snapshot.trade_history
    }

    pub fn roster(&self, team: &str) -> Option<&[String]> {
        self.snapshot.teams.get(team).map(Vec::as_slice)
    }

    /// Round `races refresh` should request when none is given.
    pub fn next_round(&self) -> RaceRound {
        calendar::next_round(self.snapshot.processed_races.iter().map(String::as_str))
    }
}
