//! Runtime configuration resolved from CLI flags and environment variables.
//!
//! Precedence is always flag, then environment, then built-in default.

use crate::{
    cli::types::SeasonId, LeagueError, Result, BACKEND_URL_ENV_VAR, DEFAULT_BACKEND_URL,
    SEASON_ID_ENV_VAR,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub backend_url: String,
    pub season_id: Option<SeasonId>,
}

impl Config {
    pub fn resolve(backend_url: Option<String>, season_id: Option<SeasonId>) -> Self {
        Self {
            backend_url: resolve_backend_url(backend_url),
            season_id: season_id.or_else(season_id_from_env),
        }
    }

    /// The season every season-scoped command needs.
    pub fn require_season(&self) -> Result<SeasonId> {
        self.season_id
            .clone()
            .ok_or_else(|| LeagueError::MissingSeasonId {
                env_var: SEASON_ID_ENV_VAR.to_string(),
            })
    }
}

/// Backend base URL with any trailing slash removed.
pub fn resolve_backend_url(flag: Option<String>) -> String {
    let url = flag
        .filter(|s| !s.trim().is_empty())
        .or_else(|| {
            std::env::var(BACKEND_URL_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
        })
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
    url.trim().trim_end_matches('/').to_string()
}

fn season_id_from_env() -> Option<SeasonId> {
    std::env::var(SEASON_ID_ENV_VAR)
        .ok()
        .and_then(|s| s.parse::<SeasonId>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env vars are process-wide; each test owns a distinct variable or avoids env entirely.

    #[test]
    fn test_backend_url_flag_wins_and_is_trimmed() {
        let url = resolve_backend_url(Some("http://localhost:8000/".to_string()));
        assert_eq!(url, "http://localhost:8000");
    }

    #[test]
    fn test_blank_backend_flag_is_ignored() {
        std::env::remove_var(BACKEND_URL_ENV_VAR);
        let url = resolve_backend_url(Some("  ".to_string()));
        assert_eq!(url, DEFAULT_BACKEND_URL);
    }

    #[test]
    fn test_season_flag_wins() {
        let cfg = Config::resolve(
            Some("http://x".to_string()),
            Some(SeasonId::new("flag-season")),
        );
        assert_eq!(cfg.require_season().unwrap(), SeasonId::new("flag-season"));
    }

    #[test]
    fn test_require_season_missing() {
        let cfg = Config {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            season_id: None,
        };
        match cfg.require_season() {
            Err(LeagueError::MissingSeasonId { env_var }) => {
                assert_eq!(env_var, SEASON_ID_ENV_VAR)
            }
            other => panic!("Expected MissingSeasonId, got {other:?}"),
        }
    }
}
