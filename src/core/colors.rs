//! Team color assignment for rendered views.

use std::collections::BTreeMap;

/// Fixed five-color palette; teams past the fifth wrap around.
pub const TEAM_PALETTE: [&str; 5] = ["#e10600", "#00a3e0", "#ff8000", "#27f4d2", "#b6babd"];

/// Color used for cells whose owning team is unknown.
pub const NEUTRAL_COLOR: &str = "#6c6c6c";

/// Deterministic team-name -> color mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorMap {
    colors: BTreeMap<String, &'static str>,
}

impl ColorMap {
    /// Assign palette slots to teams in alphabetical order.
    pub fn assign<'a, I>(teams: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut names: Vec<&str> = teams.into_iter().collect();
        names.sort_unstable();
        names.dedup();

        let colors = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), TEAM_PALETTE[i % TEAM_PALETTE.len()]))
            .collect();

        Self { colors }
    }

    pub fn get(&self, team: &str) -> Option<&'static str> {
        self.colors.get(team).copied()
    }

    pub fn color_or_neutral(&self, team: Option<&str>) -> &'static str {
        team.and_then(|t| self.get(t)).unwrap_or(NEUTRAL_COLOR)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
