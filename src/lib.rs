//! API-Football ETL library
//!
//! Pulls football teams and per-team season statistics from the
//! API-Football v3 REST API and upserts them into a local document store.
//!
//! ## Pipeline
//!
//! - **API client** ([`football::ApiClient`]): one GET per call, fixed timeout,
//!   static API-key header; failures are returned as errors, never panics
//! - **Transformer** ([`football::transform`]): nested JSON into flat records
//! - **Document store** ([`storage::DocumentStore`]): full-document upserts
//!   into the `teams` and `teams_statistics` collections
//! - **Imports** ([`commands`]): sequential, per-team orchestration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use moneyball_etl::{
//!     commands::run_teams_import, football::ApiClient, storage::DocumentStore, LeagueId, Season,
//! };
//!
//! # async fn example() -> moneyball_etl::Result<()> {
//! let client = ApiClient::new("your-api-key")?;
//! let mut store = DocumentStore::open_in_memory()?;
//!
//! let summary = run_teams_import(&client, &mut store, LeagueId::new(140), Season::new(2023)).await?;
//! println!("{} teams written", summary.written);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export X_APISPORTS_KEY=your-api-key
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod football;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{LeagueId, Season, TeamId};
pub use error::{MoneyballError, Result};
pub use storage::{Collection, DocumentStore, Team, TeamStatistics};
