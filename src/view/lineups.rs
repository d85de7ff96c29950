use serde::Serialize;

use super::SeasonView;

/// One column per team, one row per roster slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineupGrid {
    pub teams: Vec<String>,
    /// `rows[slot][team]`; `None` pads rosters shorter than the longest one.
    pub rows: Vec<Vec<Option<String>>>,
}

impl SeasonView {
    pub fn lineups(&self) -> LineupGrid {
        let teams = &self.snapshot().teams;
        let depth = teams.values().map(Vec::len).max().unwrap_or(0);

        let rows = (0..depth)
            .map(|slot| {
                teams
                    .values()
                    .map(|roster| roster.get(slot).cloned())
                    .collect()
            })
            .collect();

        LineupGrid {
            teams: teams.keys().cloned().collect(),
            rows,
        }
    }
}
