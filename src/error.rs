//! Error types for the F1 fantasy league client

use thiserror::Error;


pub type Result<T> = std::result::Result<T, LeagueError>;

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The backend rejected the request; `message` is the server's own text.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Season ID not provided and {env_var} environment variable not set")]
    MissingSeasonId { env_var: String },

    #[error("Invalid race round: {value}")]
    InvalidRound { value: String },

    #[error("Unknown team: {name}")]
    UnknownTeam { name: String },

    #[error("Driver {driver} is not available from {source_name}")]
    DriverNotAvailable { driver: String, source_name: String },

    #[error("Invalid sweetener: {value} (must be a non-negative number)")]
    InvalidSweetener { value: f64 },

    #[error("A trade needs both a source and a destination team")]
    IncompleteTrade,
}

impl LeagueError {
    /// True when the backend reports the requested race was ingested before.
    pub fn is_already_processed(&self) -> bool {
        match self {
            LeagueError::Api { message, .. } => {
                let lower = message.to_lowercase();
                lower.contains("already processed") || lower.contains("already been processed")
            }
            _ => false,
        }
    }
}
