//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use f1_fantasy::{
    cli::{Commands, F1Fantasy, RacesCmd, SeasonCmd, TradeCmd},
    commands::{
        draft::handle_draft,
        races::{handle_races_refresh, RefreshTarget},
        season::{handle_free_agents, handle_season_show},
        trade::{handle_trade_options, handle_trade_propose},
        CommandContext,
    },
    core::{logging::init_logger, Config},
    view::TradeSelection,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = F1Fantasy::parse();
    init_logger(app.global.verbose);

    let config = Config::resolve(app.global.backend_url, app.global.season_id);
    let ctx = CommandContext::new(&config).context("could not set up backend connection")?;

    match app.command {
        Commands::Season { cmd } => match cmd {
            SeasonCmd::Show { format, last_names } => {
                handle_season_show(&ctx, format, last_names).await?
            }
            SeasonCmd::FreeAgents => handle_free_agents(&ctx).await?,
        },

        Commands::Trade { cmd } => match cmd {
            TradeCmd::Options { from, to } => handle_trade_options(&ctx, from, to).await?,
            TradeCmd::Propose {
                from,
                to,
                give,
                receive,
                from_points,
                to_points,
            } => {
                handle_trade_propose(
                    &ctx,
                    TradeSelection {
                        from_team: from,
                        to,
                        give,
                        receive,
                        from_points,
                        to_points,
                    },
                )
                .await?
            }
        },

        Commands::Races { cmd } => match cmd {
            RacesCmd::Refresh { round, latest } => {
                handle_races_refresh(&ctx, RefreshTarget::from_flags(round, latest)).await?
            }
        },

        Commands::Draft { cmd } => handle_draft(&ctx, cmd).await?,
    }

    Ok(())
}
