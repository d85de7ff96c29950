//! Command implementations for the fantasy league CLI

pub mod draft;
pub mod races;
pub mod season;
pub mod trade;

use crate::{backend::BackendClient, cli::types::SeasonId, core::Config, Result};

/// Resources every season-scoped command needs
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub client: BackendClient,
    pub season: SeasonId,
}

impl CommandContext {
    pub fn new(config: &Config) -> Result<Self> {
        let season = config.require_season()?;
        let client = BackendClient::new(config.backend_url.clone())?;
        Ok(Self { client, season })
    }
}
