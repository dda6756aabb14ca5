//! Command implementations for the moneyball ETL CLI

pub mod collections;
pub mod common;
pub mod team_statistics_import;
pub mod teams_import;


pub use common::{ImportSummary, IterationOrder};
pub use team_statistics_import::run_team_statistics_import;
pub use teams_import::run_teams_import;
