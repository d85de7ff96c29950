//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{OutputFormat, RaceRound, SeasonId, TradeDestination};

/// Connection arguments shared by every command
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Backend base URL (or set `F1_FANTASY_BACKEND_URL` env var).
    #[clap(long, global = true)]
    pub backend_url: Option<String>,

    /// Season ID (or set `F1_FANTASY_SEASON_ID` env var).
    #[clap(long, short, global = true)]
    pub season_id: Option<SeasonId>,

    /// Log request details to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum SeasonCmd {
    /// Load the season and print leaderboard, lineups, race grid, trades and free agents.
    Show {
        /// Output format.
        #[clap(long, value_enum, default_value_t = OutputFormat::default())]
        format: OutputFormat,

        /// Print drivers by last name only.
        #[clap(long)]
        last_names: bool,
    },

    /// List drivers not on any locked roster.
    FreeAgents,
}

#[derive(Debug, Subcommand)]
pub enum TradeCmd {
    /// Show the selectable teams and, optionally, the drivers on each side.
    Options {
        /// Source team whose drivers to list.
        #[clap(long)]
        from: Option<String>,

        /// Destination team, or `free-agency` to list the free-agent pool.
        #[clap(long)]
        to: Option<TradeDestination>,
    },

    /// Propose a trade between two locked teams (or with free agency).
    Propose {
        /// Team giving up drivers.
        #[clap(long)]
        from: String,

        /// Team receiving them, or `free-agency`.
        #[clap(long)]
        to: TradeDestination,

        /// Driver leaving the source team (repeatable).
        #[clap(long = "give")]
        give: Vec<String>,

        /// Driver coming back from the destination (repeatable).
        #[clap(long = "receive")]
        receive: Vec<String>,

        /// Sweetener points paid by the source team.
        #[clap(long, default_value_t = 0.0)]
        from_points: f64,

        /// Sweetener points paid by the destination team.
        #[clap(long, default_value_t = 0.0)]
        to_points: f64,
    },
}

#[derive(Debug, Subcommand)]
pub enum RacesCmd {
    /// Ingest the next unprocessed race's results.
    Refresh {
        /// Explicit round to ingest instead of highest processed + 1.
        #[clap(long, conflicts_with = "latest")]
        round: Option<RaceRound>,

        /// Let the server pick the latest finished race.
        #[clap(long)]
        latest: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum DraftCmd {
    /// Register a new fantasy team for the season.
    Register {
        #[clap(long)]
        team: String,
    },

    /// List drivers still available to draft.
    Available,

    /// Draft a driver onto a team.
    Pick {
        #[clap(long)]
        team: String,

        #[clap(long)]
        driver: String,
    },

    /// Undo a draft pick.
    Undo {
        #[clap(long)]
        team: String,

        #[clap(long)]
        driver: String,
    },

    /// Clear every roster in the season.
    Reset,

    /// Lock rosters; only trades are allowed afterwards.
    Lock,
}

#[derive(Debug, Parser)]
#[clap(name = "f1-fantasy", about = "Fantasy Formula 1 league CLI")]
pub struct F1Fantasy {
    #[clap(flatten)]
    pub global: GlobalArgs,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Season standings and rosters
    Season {
        #[clap(subcommand)]
        cmd: SeasonCmd,
    },
    /// Trades between locked teams
    Trade {
        #[clap(subcommand)]
        cmd: TradeCmd,
    },
    /// Race results ingestion
    Races {
        #[clap(subcommand)]
        cmd: RacesCmd,
    },
    /// Pre-season team registration and drafting
    Draft {
        #[clap(subcommand)]
        cmd: DraftCmd,
    },
}
