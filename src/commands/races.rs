//! Race points ingestion.

use tracing::{info, warn};

use super::{season::load_season_data, CommandContext};
use crate::{
    backend::{BackendClient, RaceTarget},
    cli::types::{RaceRound, SeasonId},
    core::LAST_ROUND,
    view::SeasonView,
    Result,
};

/// Which race to ask the backend for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTarget {
    /// Highest processed round + 1 (round 4 when nothing is processed)
    Next,
    Round(RaceRound),
    Latest,
}

impl RefreshTarget {
    pub fn from_flags(round: Option<RaceRound>, latest: bool) -> Self {
        match (round, latest) {
            (Some(r), _) => RefreshTarget::Round(r),
            (None, true) => RefreshTarget::Latest,
            (None, false) => RefreshTarget::Next,
        }
    }
}

#[derive(Debug)]
pub enum RefreshOutcome {
    Updated { message: String, view: SeasonView },
    /// The race was ingested before, or the calendar is finished
    NoNewRaces,
}

pub async fn refresh_race_points(
    client: &BackendClient,
    season: &SeasonId,
    target: RefreshTarget,
) -> Result<RefreshOutcome> {
    let race = match target {
        RefreshTarget::Round(r) => RaceTarget::Round(r),
        RefreshTarget::Latest => RaceTarget::Latest,
        RefreshTarget::Next => {
            let next = load_season_data(client, season).await?.next_round();
            if next > LAST_ROUND {
                info!(season = %season, "every calendar round already processed");
                return Ok(RefreshOutcome::NoNewRaces);
            }
            RaceTarget::Round(next)
        }
    };

    match client.update_race_points(season, race).await {
        Ok(res) => {
            info!(season = %season, race = %race.query_value(), "race points updated");
            let view = load_season_data(client, season).await?;
            Ok(RefreshOutcome::Updated {
                message: res.message,
                view,
            })
        }
        Err(e) if e.is_already_processed() => {
            warn!(season = %season, race = %race.query_value(), "race already processed");
            Ok(RefreshOutcome::NoNewRaces)
        }
        Err(e) => Err(e),
    }
}

/// Handle `races refresh`
pub async fn handle_races_refresh(ctx: &CommandContext, target: RefreshTarget) -> Result<()> {
    match refresh_race_points(&ctx.client, &ctx.season, target).await? {
        RefreshOutcome::Updated { message, view } => {
            if !message.is_empty() {
                println!("{}", message);
            }
            println!("Next round to process: {}", view.next_round());
        }
        RefreshOutcome::NoNewRaces => println!("No new races to update points."),
    }
    Ok(())
}
