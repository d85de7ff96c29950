use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;


/// Accept a number, a numeric string or null; null and missing become 0.
fn de_lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Value::deserialize(deserializer)? {
        Value::Null => Ok(0.0),
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| D::Error::custom(format!("points out of range: {n}"))),
        Value::String(s) => s.trim().parse::<f64>().map_err(D::Error::custom),
        other => Err(D::Error::custom(format!("expected points, got {other}"))),
    }
}

/// Race identifiers come back as either `"7"`, `7` or `"Imola"`.
fn de_race_ids<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let raw: Option<Vec<Value>> = Deserialize::deserialize(deserializer)?;
    raw.unwrap_or_default()
        .into_iter()
        .map(|v| match v {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(D::Error::custom(format!("invalid race id: {other}"))),
        })
        .collect()
}

/// Points a driver scored in one race, and the team that owned them then.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RacePoints {
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub points: f64,
    #[serde(default, alias = "owner", alias = "team_name")]
    pub team: Option<String>,
}

/// Race identifier -> driver name -> points record.
pub type RacePointsTable = BTreeMap<String, BTreeMap<String, RacePoints>>;

/// Everything `GET /get_season` returns for a locked season.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SeasonSnapshot {
    /// Team name -> roster in draft order
    #[serde(default)]
    pub teams: BTreeMap<String, Vec<String>>,
    /// Cumulative points per team
    #[serde(default)]
    pub points: BTreeMap<String, f64>,
    #[serde(default)]
    pub trade_history: Vec<String>,
    #[serde(default)]
    pub race_points: RacePointsTable,
    #[serde(default, deserialize_with = "de_race_ids")]
    pub processed_races: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FreeAgentsResponse {
    #[serde(default)]
    pub free_agents: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AvailableDriversResponse {
    #[serde(default, alias = "drivers")]
    pub available_drivers: Vec<String>,
}

/// Body of `POST /trade_locked`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TradeRequest {
    pub from_team: String,
    pub to_team: String,
    pub drivers_from_team: Vec<String>,
    pub drivers_to_team: Vec<String>,
    pub from_team_points: f64,
    pub to_team_points: f64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TradeResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub trade_history: Option<Vec<String>>,
}

/// Success body shared by the write endpoints.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Which race `POST /update_race_points` should ingest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaceTarget {
    Round(crate::RaceRound),
    Latest,
}

impl RaceTarget {
    pub fn query_value(&self) -> String {
        match self {
            RaceTarget::Round(r) => r.to_string(),
            RaceTarget::Latest => "latest".to_string(),
        }
    }
}

/// Pull the human-readable failure text out of an error body.
///
/// Checks `detail`, then `error`, then `message`. A non-string `detail` (e.g. a
/// validation error list) is rendered as compact JSON.
pub fn server_error_message(body: &Value) -> Option<String> {
    ["detail", "error", "message"].iter().find_map(|key| {
        match body.get(*key)? {
            Value::Null => None,
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    })
}
