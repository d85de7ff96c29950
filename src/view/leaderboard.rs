use serde::Serialize;
use std::cmp::Ordering;

use super::SeasonView;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardRow {
    pub team: String,
    pub points: f64,
    pub color: &'static str,
}

impl SeasonView {
    /// Teams by cumulative points, highest first; ties fall back to team name.
    ///
    /// Rostered teams the backend has not scored yet appear with zero points.
    pub fn leaderboard(&self) -> Vec<LeaderboardRow> {
        let snapshot = self.snapshot();
        let mut rows: Vec<LeaderboardRow> = snapshot
            .points
            .iter()
            .map(|(team, &points)| (team.as_str(), points))
            .chain(
                snapshot
                    .teams
                    .keys()
                    .filter(|t| !snapshot.points.contains_key(*t))
                    .map(|t| (t.as_str(), 0.0)),
            )
            .map(|(team, points)| LeaderboardRow {
                team: team.to_string(),
                points,
                color: self.colors().color_or_neutral(Some(team)),
            })
            .collect();

        rows.sort_by(|a, b| {
            b.points
                .partial_cmp(&a.points)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.team.cmp(&b.team))
        });
        rows
    }
}
