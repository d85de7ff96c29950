//! Pre-season team registration and drafting

use tracing::info;

use super::CommandContext;
use crate::{cli::DraftCmd, render::text::render_driver_list, Result};

/// Handle every `draft` subcommand; write actions print the server's message.
pub async fn handle_draft(ctx: &CommandContext, cmd: DraftCmd) -> Result<()> {
    let (client, season) = (&ctx.client, &ctx.season);

    let response = match cmd {
        DraftCmd::Available => {
            let drivers = client.get_available_drivers(season).await?;
            print!("{}", render_driver_list(&drivers));
            return Ok(());
        }
        DraftCmd::Register { team } => client.register_team(season, &team).await?,
        DraftCmd::Pick { team, driver } => client.draft_driver(season, &team, &driver).await?,
        DraftCmd::Undo { team, driver } => client.undo_draft(season, &team, &driver).await?,
        DraftCmd::Reset => client.reset_teams(season).await?,
        DraftCmd::Lock => client.lock_teams(season).await?,
    };

    info!(season = %season, "draft action accepted");
    if !response.message.is_empty() {
        println!("{}", response.message);
    }
    Ok(())
}
