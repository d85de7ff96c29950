//! Driver-by-race points grid.
//!
//! Rows are the union of currently rostered drivers and every driver who
//! appears in any race's point records, so drivers traded away or released
//! keep their history. Columns follow the fixed fantasy calendar.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};

use super::SeasonView;
use crate::{
    backend::{types::RacePointsTable, RacePoints},
    cli::types::RaceRound,
    core::{calendar, Race},
};

/// One scored race for one driver.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaceCell {
    pub points: f64,
    /// Team that owned the driver when the points were scored
    pub team: Option<String>,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverRow {
    pub driver: String,
    /// Current owner, `None` for drivers no longer on a roster
    pub current_team: Option<String>,
    pub total: f64,
    /// One entry per calendar race; `None` when the driver has no record there
    pub cells: Vec<Option<RaceCell>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaceGrid {
    pub races: Vec<&'static str>,
    pub rows: Vec<DriverRow>,
}

/// Point records grouped by calendar round, whatever key the backend used.
fn records_by_round(table: &RacePointsTable) -> BTreeMap<RaceRound, Vec<&BTreeMap<String, RacePoints>>> {
    let mut by_round: BTreeMap<RaceRound, Vec<_>> = BTreeMap::new();
    for (race_id, records) in table {
        if let Some(race) = calendar::resolve_race(race_id) {
            by_round.entry(race.round).or_default().push(records);
        }
    }
    by_round
}

impl SeasonView {
    pub fn driver_race_table(&self) -> RaceGrid {
        let snapshot = self.snapshot();
        let races: Vec<Race> = calendar::races().collect();
        let by_round = records_by_round(&snapshot.race_points);

        // Rostered drivers in team then roster order, then everyone else who scored.
        let mut seen: HashSet<&str> = HashSet::new();
        let mut drivers: Vec<(&str, Option<&str>)> = Vec::new();
        for (team, roster) in &snapshot.teams {
            for driver in roster {
                if seen.insert(driver.as_str()) {
                    drivers.push((driver.as_str(), Some(team.as_str())));
                }
            }
        }
        let historical: BTreeSet<&str> = snapshot
            .race_points
            .values()
            .flat_map(|records| records.keys().map(String::as_str))
            .filter(|d| !seen.contains(d))
            .collect();
        drivers.extend(historical.into_iter().map(|d| (d, None)));

        let rows = drivers
            .into_iter()
            .map(|(driver, current_team)| {
                let cells: Vec<Option<RaceCell>> = races
                    .iter()
                    .map(|race| {
                        by_round
                            .get(&race.round)?
                            .iter()
                            .find_map(|records| records.get(driver))
                            .map(|rec| RaceCell {
                                points: rec.points,
                                team: rec.team.clone(),
                                color: self.colors().color_or_neutral(rec.team.as_deref()),
                            })
                    })
                    .collect();
                let total = cells.iter().flatten().map(|c| c.points).sum();

                DriverRow {
                    driver: driver.to_string(),
                    current_team: current_team.map(str::to_string),
                    total,
                    cells,
                }
            })
            .collect();

        RaceGrid {
            races: races.iter().map(|r| r.name).collect(),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures;
    use super::*;
    use crate::{backend::SeasonSnapshot, SeasonId};

    fn row<'a>(grid: &'a RaceGrid, driver: &str) -> &'a DriverRow {
        grid.rows
            .iter()
            .find(|r| r.driver == driver)
            .unwrap_or_else(|| panic!("no row for {driver}"))
    }

    #[test]
    fn test_rows_are_union_of_rostered_and_scoring_drivers() {
        let grid = fixtures::view().driver_race_table();
        let drivers: Vec<&str> = grid.rows.iter().map(|r| r.driver.as_str()).collect();
        assert_eq!(
            drivers,
            vec![
                "Max Verstappen",
                "Lando Norris",
                "Charles Leclerc",
                "Oscar Piastri",
                "George Russell",
                "Lewis Hamilton",
                "Jack Doohan",
            ]
        );
        assert_eq!(row(&grid, "Jack Doohan").current_team, None);
        assert_eq!(row(&grid, "Lando Norris").current_team.as_deref(), Some("Alpha"));
    }

    #[test]
    fn test_columns_follow_calendar() {
        let grid = fixtures::view().driver_race_table();
        assert_eq!(grid.races.len(), 21);
        assert_eq!(grid.races[0], "Bahrain");
        assert_eq!(grid.races[20], "Abu Dhabi");
        assert!(grid.rows.iter().all(|r| r.cells.len() == 21));
    }

    #[test]
    fn test_cells_colored_by_team_at_scoring_time() {
        let view = fixtures::view();
        let grid = view.driver_race_table();
        let piastri = row(&grid, "Oscar Piastri");

        // Bahrain keyed by round number, Saudi Arabia keyed by name
        let bahrain = piastri.cells[0].as_ref().unwrap();
        let jeddah = piastri.cells[1].as_ref().unwrap();
        assert_eq!(bahrain.team.as_deref(), Some("Alpha"));
        assert_eq!(bahrain.color, view.colors().get("Alpha").unwrap());
        assert_eq!(jeddah.team.as_deref(), Some("Bravo"));
        assert_eq!(jeddah.color, view.colors().get("Bravo").unwrap());
        assert_eq!(piastri.total, 43.0);
    }

    #[test]
    fn test_absent_driver_is_blank() {
        let grid = fixtures::view().driver_race_table();
        let norris = row(&grid, "Lando Norris");
        assert!(norris.cells.iter().all(Option::is_none));
        assert_eq!(norris.total, 0.0);
    }

    #[test]
    fn test_unknown_race_ids_are_ignored_for_columns() {
        let mut snap = SeasonSnapshot::default();
        let mut records = BTreeMap::new();
        records.insert("Yuki Tsunoda".to_string(), fixtures::points(4.0, "Gone"));
        snap.race_points.insert("Australia".to_string(), records);

        let view = SeasonView::new(SeasonId::new("s"), snap);
        let grid = view.driver_race_table();
        let tsunoda = row(&grid, "Yuki Tsunoda");
        assert!(tsunoda.cells.iter().all(Option::is_none));
        assert_eq!(tsunoda.total, 0.0);
    }

    #[test]
    fn test_unknown_owner_uses_neutral_color() {
        let mut snap = fixtures::snapshot();
        snap.race_points
            .get_mut("4")
            .unwrap()
            .insert("Lewis Hamilton".to_string(), RacePoints { points: 2.0, team: None });

        let grid = SeasonView::new(SeasonId::new("s"), snap).driver_race_table();
        let cell = row(&grid, "Lewis Hamilton").cells[0].clone().unwrap();
        assert_eq!(cell.color, crate::core::colors::NEUTRAL_COLOR);
    }

    #[test]
    fn test_empty_snapshot() {
        let grid = SeasonView::new(SeasonId::new("s"), SeasonSnapshot::default()).driver_race_table();
        assert!(grid.rows.is_empty());
        assert_eq!(grid.races.len(), 21);
    }
}
