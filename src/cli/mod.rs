//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{LeagueId, Season};

use crate::config::DEFAULT_CREDENTIALS_PATH;

/// League and season shared by every import
#[derive(Debug, Args)]
pub struct LeagueSeason {
    /// API-Football league ID (140 = La Liga).
    #[clap(long, short, default_value_t = LeagueId::default())]
    pub league: LeagueId,

    /// Season year (e.g. 2023).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,
}

#[derive(Debug, Subcommand)]
pub enum ImportCmd {
    /// Fetch every team of a league/season and upsert it into `teams`.
    Teams {
        #[clap(flatten)]
        target: LeagueSeason,
    },

    /// Fetch per-team statistics for a league/season and upsert them into
    /// `teams_statistics`.
    TeamStats {
        #[clap(flatten)]
        target: LeagueSeason,

        /// Walk the team list last-to-first.
        #[clap(long)]
        reverse: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Import data from API-Football into the document store
    Import {
        #[clap(subcommand)]
        cmd: ImportCmd,
    },

    /// List the document store's collections and their document counts
    Collections,
}

#[derive(Debug, Parser)]
#[clap(name = "moneyball-etl", about = "API-Football to document store ETL")]
pub struct Moneyball {
    /// Service-account credentials file.
    #[clap(long, global = true, default_value = DEFAULT_CREDENTIALS_PATH)]
    pub credentials: PathBuf,

    /// Override the document store location.
    #[clap(long, global = true)]
    pub database: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
