//! HTTP client for the fantasy league backend.
//!
//! Every endpoint answers JSON. Success bodies carry the payload (and usually a
//! `message`); failure bodies carry `detail` or `error`, which is surfaced to the
//! user verbatim through [`LeagueError::Api`].

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::debug;

use super::types::{
    server_error_message, AvailableDriversResponse, FreeAgentsResponse, MessageResponse,
    RaceTarget, SeasonSnapshot, TradeRequest, TradeResponse,
};
use crate::{cli::types::SeasonId, LeagueError, Result};


const USER_AGENT: &str = concat!("f1-fantasy/", env!("CARGO_PKG_VERSION"));

/// Typed client for one backend base URL.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%method, %url, "backend request");
        self.http.request(method, url)
    }

    /// `GET /get_season`
    pub async fn get_season(&self, season: &SeasonId) -> Result<SeasonSnapshot> {
        let res = self
            .request(Method::GET, "get_season")
            .query(&[("season_id", season.as_str())])
            .send()
            .await?;
        parse_response(res, "Error loading season").await
    }

    /// `GET /get_free_agents`
    pub async fn get_free_agents(&self, season: &SeasonId) -> Result<Vec<String>> {
        let res = self
            .request(Method::GET, "get_free_agents")
            .query(&[("season_id", season.as_str())])
            .send()
            .await?;
        let body: FreeAgentsResponse = parse_response(res, "Error loading free agents").await?;
        Ok(body.free_agents)
    }

    /// `POST /trade_locked`
    pub async fn propose_trade(
        &self,
        season: &SeasonId,
        trade: &TradeRequest,
    ) -> Result<TradeResponse> {
        let res = self
            .request(Method::POST, "trade_locked")
            .query(&[("season_id", season.as_str())])
            .json(trade)
            .send()
            .await?;
        parse_response(res, "Trade failed").await
    }

    /// `POST /update_race_points`
    pub async fn update_race_points(
        &self,
        season: &SeasonId,
        target: RaceTarget,
    ) -> Result<MessageResponse> {
        let race_id = target.query_value();
        let res = self
            .request(Method::POST, "update_race_points")
            .query(&[("season_id", season.as_str()), ("race_id", race_id.as_str())])
            .send()
            .await?;
        parse_response(res, "Error updating race points").await
    }

    /// `POST /register_team`
    pub async fn register_team(&self, season: &SeasonId, team: &str) -> Result<MessageResponse> {
        self.post_message(
            "register_team",
            &[("season_id", season.as_str()), ("team_name", team)],
            "Error registering team",
        )
        .await
    }

    /// `GET /get_available_drivers`
    pub async fn get_available_drivers(&self, season: &SeasonId) -> Result<Vec<String>> {
        let res = self
            .request(Method::GET, "get_available_drivers")
            .query(&[("season_id", season.as_str())])
            .send()
            .await?;
        let body: AvailableDriversResponse =
            parse_response(res, "Error loading available drivers").await?;
        Ok(body.available_drivers)
    }

    /// `POST /draft_driver`
    pub async fn draft_driver(
        &self,
        season: &SeasonId,
        team: &str,
        driver: &str,
    ) -> Result<MessageResponse> {
        self.post_message(
            "draft_driver",
            &[
                ("season_id", season.as_str()),
                ("team_name", team),
                ("driver_name", driver),
            ],
            "Error drafting driver",
        )
        .await
    }

    /// `POST /undo_draft`
    pub async fn undo_draft(
        &self,
        season: &SeasonId,
        team: &str,
        driver: &str,
    ) -> Result<MessageResponse> {
        self.post_message(
            "undo_draft",
            &[
                ("season_id", season.as_str()),
                ("team_name", team),
                ("driver_name", driver),
            ],
            "Error undoing draft pick",
        )
        .await
    }

    /// `POST /reset_teams`
    pub async fn reset_teams(&self, season: &SeasonId) -> Result<MessageResponse> {
        self.post_message(
            "reset_teams",
            &[("season_id", season.as_str())],
            "Error resetting teams",
        )
        .await
    }

    /// `POST /lock_teams`
    pub async fn lock_teams(&self, season: &SeasonId) -> Result<MessageResponse> {
        self.post_message(
            "lock_teams",
            &[("season_id", season.as_str())],
            "Error locking teams",
        )
        .await
    }

    async fn post_message<Q: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        query: &Q,
        fallback: &str,
    ) -> Result<MessageResponse> {
        let res = self
            .request(Method::POST, endpoint)
            .query(query)
            .send()
            .await?;
        parse_response(res, fallback).await
    }
}

/// Turn a backend response into `T`, or into the server's own error text.
///
/// Error bodies that are not JSON fall back to `fallback` plus the status.
async fn parse_response<T: DeserializeOwned>(res: Response, fallback: &str) -> Result<T> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<Value>(&text)
            .ok()
            .and_then(|body| server_error_message(&body))
            .unwrap_or_else(|| format!("{} ({})", fallback, status));
        debug!(status = status.as_u16(), %message, "backend rejected request");
        return Err(LeagueError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_str(&text)?)
}
