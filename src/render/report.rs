use serde::Serialize;

use crate::{
    cli::types::SeasonId,
    view::{LeaderboardRow, LineupGrid, RaceGrid, SeasonView, TradeOptions},
};

/// Every view of one season load, for machine consumption.
#[derive(Debug, Serialize)]
pub struct SeasonReport<'a> {
    pub season_id: &'a SeasonId,
    pub leaderboard: Vec<LeaderboardRow>,
    pub lineups: LineupGrid,
    pub race_grid: RaceGrid,
    pub trade_history: &'a [String],
    pub free_agents: &'a [String],
    pub trade_options: TradeOptions,
    pub next_round: u8,
}

impl<'a> SeasonReport<'a> {
    pub fn from_view(view: &'a SeasonView) -> Self {
        Self {
            season_id: view.season_id(),
            leaderboard: view.leaderboard(),
            lineups: view.lineups(),
            race_grid: view.driver_race_table(),
            trade_history: view.trade_history(),
            free_agents: view.free_agents(),
            trade_options: view.trade_options(),
            next_round: view.next_round().as_u8(),
        }
    }
}
