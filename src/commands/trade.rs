//! Trade proposals between locked teams.

use tracing::info;

use super::{season::load_season_data, CommandContext};
use crate::{
    backend::BackendClient,
    cli::types::{SeasonId, TradeDestination},
    render::text::render_driver_list,
    view::{SeasonView, TradeSelection},
    Result,
};

/// Result of an accepted trade.
#[derive(Debug)]
pub struct TradeOutcome {
    /// Server's confirmation text
    pub message: String,
    /// Season reloaded after the trade
    pub view: SeasonView,
}

/// Validate the selection against the current season, submit it, then reload.
pub async fn propose_locked_trade(
    client: &BackendClient,
    season: &SeasonId,
    selection: &TradeSelection,
) -> Result<TradeOutcome> {
    let current = load_season_data(client, season).await?;
    let request = current.build_trade(selection)?;

    let response = client.propose_trade(season, &request).await?;
    info!(
        from = %request.from_team,
        to = %request.to_team,
        "trade accepted"
    );

    let view = load_season_data(client, season).await?;
    Ok(TradeOutcome {
        message: response.message,
        view,
    })
}

/// Handle `trade options`
pub async fn handle_trade_options(
    ctx: &CommandContext,
    from: Option<String>,
    to: Option<TradeDestination>,
) -> Result<()> {
    let view = load_season_data(&ctx.client, &ctx.season).await?;
    let opts = view.trade_options();

    println!("From teams:");
    print!("{}", render_driver_list(&opts.from_teams));
    println!("To:");
    print!("{}", render_driver_list(&opts.to_destinations));

    if let Some(team) = from {
        println!("\nDrivers {} can offer:", team);
        print!("{}", render_driver_list(view.from_driver_options(&team)?));
    }
    if let Some(dest) = to {
        println!("\nDrivers available from {}:", dest);
        print!("{}", render_driver_list(view.to_driver_options(&dest)?));
    }
    Ok(())
}

/// Handle `trade propose`
pub async fn handle_trade_propose(ctx: &CommandContext, selection: TradeSelection) -> Result<()> {
    let outcome = propose_locked_trade(&ctx.client, &ctx.season, &selection).await?;
    if !outcome.message.is_empty() {
        println!("{}", outcome.message);
    }
    println!("\nTrade history:");
    print!("{}", render_driver_list(outcome.view.trade_history()));
    Ok(())
}
