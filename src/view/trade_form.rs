//! Trade proposal options and request assembly.
//!
//! Mirrors a pair of team selectors with driver lists underneath: the source
//! side lists a team roster, the destination side lists either a team roster
//! or, for [`TradeDestination::FreeAgency`], the free-agent pool. Whether a
//! trade is legal is decided by the backend; this only checks that every
//! selection is one the options actually offered.

use serde::Serialize;

use super::SeasonView;
use crate::{
    backend::TradeRequest,
    cli::types::{TradeDestination, FREE_AGENCY_LABEL},
    LeagueError, Result,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeOptions {
    pub from_teams: Vec<String>,
    /// Team names followed by the free-agency entry
    pub to_destinations: Vec<String>,
}

/// What the user picked on both sides of a trade.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeSelection {
    pub from_team: String,
    pub to: TradeDestination,
    pub give: Vec<String>,
    pub receive: Vec<String>,
    pub from_points: f64,
    pub to_points: f64,
}

fn check_sweetener(value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(LeagueError::InvalidSweetener { value })
    }
}

fn check_drivers(selected: &[String], offered: &[String], source_name: &str) -> Result<()> {
    match selected.iter().find(|d| !offered.contains(d)) {
        Some(driver) => Err(LeagueError::DriverNotAvailable {
            driver: driver.clone(),
            source_name: source_name.to_string(),
        }),
        None => Ok(()),
    }
}

impl SeasonView {
    /// Team choices for both sides of a trade.
    pub fn trade_options(&self) -> TradeOptions {
        let from_teams: Vec<String> = self.snapshot().teams.keys().cloned().collect();
        let mut to_destinations = from_teams.clone();
        to_destinations.push(FREE_AGENCY_LABEL.to_string());
        TradeOptions {
            from_teams,
            to_destinations,
        }
    }

    /// Drivers the source team can offer.
    pub fn from_driver_options(&self, team: &str) -> Result<&[String]> {
        self.roster(team).ok_or_else(|| LeagueError::UnknownTeam {
            name: team.to_string(),
        })
    }

    /// Drivers the destination can send back: a roster, or the free-agent pool.
    pub fn to_driver_options(&self, destination: &TradeDestination) -> Result<&[String]> {
        match destination {
            TradeDestination::FreeAgency => Ok(self.free_agents()),
            TradeDestination::Team(team) => self.from_driver_options(team),
        }
    }

    pub fn build_trade(&self, selection: &TradeSelection) -> Result<TradeRequest> {
        if selection.from_team.trim().is_empty()
            || matches!(&selection.to, TradeDestination::Team(t) if t.trim().is_empty())
        {
            return Err(LeagueError::IncompleteTrade);
        }

        let offered_from = self.from_driver_options(&selection.from_team)?;
        let offered_to = self.to_driver_options(&selection.to)?;
        check_drivers(&selection.give, offered_from, &selection.from_team)?;
        check_drivers(&selection.receive, offered_to, &selection.to.to_string())?;

        Ok(TradeRequest {
            from_team: selection.from_team.clone(),
            to_team: selection.to.wire_value().to_string(),
            drivers_from_team: selection.give.clone(),
            drivers_to_team: selection.receive.clone(),
            from_team_points: check_sweetener(selection.from_points)?,
            to_team_points: check_sweetener(selection.to_points)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures;
    use super::*;
    use crate::cli::types::FREE_AGENCY_VALUE;

    fn selection(to: TradeDestination, give: &[&str], receive: &[&str]) -> TradeSelection {
        TradeSelection {
            from_team: "Alpha".to_string(),
            to,
            give: give.iter().map(|s| s.to_string()).collect(),
            receive: receive.iter().map(|s| s.to_string()).collect(),
            from_points: 0.0,
            to_points: 0.0,
        }
    }

    #[test]
    fn test_destinations_end_with_free_agency() {
        let opts = fixtures::view().trade_options();
        assert_eq!(opts.from_teams, vec!["Alpha", "Bravo", "Charlie"]);
        assert_eq!(
            opts.to_destinations,
            vec!["Alpha", "Bravo", "Charlie", FREE_AGENCY_LABEL]
        );
    }

    #[test]
    fn test_free_agency_lists_pool_not_roster() {
        let view = fixtures::view();
        let drivers = view.to_driver_options(&TradeDestination::FreeAgency).unwrap();
        assert_eq!(drivers, ["Jack Doohan", "Oliver Bearman"]);
        for roster in view.snapshot().teams.values() {
            assert!(drivers.iter().all(|d| !roster.contains(d)));
        }
    }

    #[test]
    fn test_team_destination_lists_roster() {
        let view = fixtures::view();
        let drivers = view
            .to_driver_options(&TradeDestination::Team("Charlie".to_string()))
            .unwrap();
        assert_eq!(drivers, ["Lewis Hamilton"]);
    }

    #[test]
    fn test_unknown_team() {
        let view = fixtures::view();
        assert!(matches!(
            view.from_driver_options("Delta"),
            Err(LeagueError::UnknownTeam { name }) if name == "Delta"
        ));
    }

    #[test]
    fn test_build_trade_with_free_agency() {
        let view = fixtures::view();
        let mut sel = selection(
            TradeDestination::FreeAgency,
            &["Lando Norris"],
            &["Oliver Bearman"],
        );
        sel.from_points = 2.5;

        let req = view.build_trade(&sel).unwrap();
        assert_eq!(req.to_team, FREE_AGENCY_VALUE);
        assert_eq!(req.drivers_from_team, vec!["Lando Norris"]);
        assert_eq!(req.drivers_to_team, vec!["Oliver Bearman"]);
        assert_eq!(req.from_team_points, 2.5);
        assert_eq!(req.to_team_points, 0.0);
    }

    #[test]
    fn test_build_trade_rejects_roster_driver_from_free_agency() {
        let view = fixtures::view();
        let sel = selection(TradeDestination::FreeAgency, &[], &["Lewis Hamilton"]);
        match view.build_trade(&sel) {
            Err(LeagueError::DriverNotAvailable { driver, source_name }) => {
                assert_eq!(driver, "Lewis Hamilton");
                assert_eq!(source_name, FREE_AGENCY_LABEL);
            }
            other => panic!("Expected DriverNotAvailable, got {other:?}"),
        }
    }

    #[test]
    fn test_build_trade_rejects_driver_not_on_source() {
        let view = fixtures::view();
        let sel = selection(
            TradeDestination::Team("Bravo".to_string()),
            &["Charles Leclerc"],
            &[],
        );
        assert!(matches!(
            view.build_trade(&sel),
            Err(LeagueError::DriverNotAvailable { .. })
        ));
    }

    #[test]
    fn test_build_trade_rejects_bad_sweeteners() {
        let view = fixtures::view();
        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            let mut sel = selection(TradeDestination::Team("Bravo".to_string()), &[], &[]);
            sel.to_points = bad;
            assert!(matches!(
                view.build_trade(&sel),
                Err(LeagueError::InvalidSweetener { .. })
            ));
        }
    }

    #[test]
    fn test_build_trade_requires_both_sides() {
        let view = fixtures::view();
        let mut sel = selection(TradeDestination::Team(String::new()), &[], &[]);
        assert!(matches!(view.build_trade(&sel), Err(LeagueError::IncompleteTrade)));

        sel.to = TradeDestination::Team("Bravo".to_string());
        sel.from_team = " ".to_string();
        assert!(matches!(view.build_trade(&sel), Err(LeagueError::IncompleteTrade)));
    }
}
