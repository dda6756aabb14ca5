//! Helpers shared by both import commands.

use serde_json::Value;
use tracing::{info, warn};

use crate::{
    error::{MoneyballError, Result},
    football::{transform::team_entries, ApiClient},
    storage::{Collection, Document, DocumentSink},
    LeagueId, Season,
};

/// Outcome counters for one import run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Entries in the provider's team list
    pub fetched: usize,
    pub written: usize,
    pub skipped: usize,
}

/// Order in which the team list is walked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IterationOrder {
    #[default]
    AsReturned,
    Reversed,
}

impl IterationOrder {
    pub fn from_reverse_flag(reverse: bool) -> Self {
        if reverse {
            IterationOrder::Reversed
        } else {
            IterationOrder::AsReturned
        }
    }
}

/// Fetch the league's team list.
///
/// `None` when the request failed or the payload has no usable `response`
/// list; both are logged and mean "nothing to import".
pub async fn fetch_team_entries(
    client: &ApiClient,
    league: LeagueId,
    season: Season,
) -> Option<Vec<Value>> {
    let Ok(envelope) = client.fetch_teams(league, season).await else {
        warn!(%league, %season, "Failed to retrieve teams data");
        return None;
    };

    match team_entries(&envelope) {
        Ok(entries) => {
            info!(%league, %season, count = entries.len(), "Retrieved teams");
            Some(entries.to_vec())
        }
        Err(e) => {
            warn!(%league, %season, error = %e, "Failed to retrieve teams data");
            None
        }
    }
}

/// Upsert one record, counting it as written or skipped.
///
/// A record without an identifier is skipped; any other store error aborts.
pub fn upsert_or_skip<S: DocumentSink, D: Document>(
    sink: &mut S,
    collection: Collection,
    doc: &D,
    summary: &mut ImportSummary,
) -> Result<()> {
    match sink.upsert(collection, doc) {
        Ok(()) => {
            summary.written += 1;
            Ok(())
        }
        Err(e @ MoneyballError::MissingDocumentId { .. }) => {
            warn!(error = %e, "Skipping record");
            summary.skipped += 1;
            Ok(())
        }
        Err(e) => Err(e),
    }
}
