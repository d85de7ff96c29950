//! Season loading and display.
//!
//! [`load_season_data`] is the one place a season is (re)loaded: the snapshot
//! first, then the free-agent pool, which the backend defines relative to the
//! locked rosters. Trades and race refreshes call it again afterwards so what
//! gets shown always comes from the server.

use tracing::{info, warn};

use super::CommandContext;
use crate::{
    backend::BackendClient,
    cli::types::{NameStyle, OutputFormat, SeasonId},
    render::{self, text::render_driver_list},
    view::SeasonView,
    Result,
};

/// Free agents for the season; a failed fetch degrades to an empty pool.
pub async fn fetch_free_agents(client: &BackendClient, season: &SeasonId) -> Vec<String> {
    match client.get_free_agents(season).await {
        Ok(agents) => agents,
        Err(e) => {
            warn!(season = %season, error = %e, "could not load free agents");
            Vec::new()
        }
    }
}

/// Fetch the snapshot, then the free agents, and build the view model.
///
/// A rejected snapshot request aborts with the server's message; nothing
/// partial is returned.
pub async fn load_season_data(client: &BackendClient, season: &SeasonId) -> Result<SeasonView> {
    let snapshot = client.get_season(season).await?;
    info!(
        season = %season,
        teams = snapshot.teams.len(),
        races = snapshot.race_points.len(),
        "season loaded"
    );

    let free_agents = fetch_free_agents(client, season).await;
    Ok(SeasonView::new(season.clone(), snapshot).with_free_agents(free_agents))
}

/// Handle `season show`
pub async fn handle_season_show(
    ctx: &CommandContext,
    format: OutputFormat,
    last_names: bool,
) -> Result<()> {
    let view = load_season_data(&ctx.client, &ctx.season).await?;
    let out = render::render_season(&view, format, NameStyle::from_flag(last_names))?;
    print!("{}", out);
    Ok(())
}

/// Handle `season free-agents`
pub async fn handle_free_agents(ctx: &CommandContext) -> Result<()> {
    let agents = ctx.client.get_free_agents(&ctx.season).await?;
    print!("{}", render_driver_list(&agents));
    Ok(())
}
