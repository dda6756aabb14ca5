//! Team import: one league/season team list into `teams`.

use std::path::Path;

use tracing::{info, warn};

use crate::{
    football::{transform::extract_team, ApiClient},
    storage::{Collection, DocumentSink, DocumentStore},
    LeagueId, Result, Season,
};

use super::common::{fetch_team_entries, upsert_or_skip, ImportSummary};

/// Fetch the league's teams and upsert each nested `team` object.
///
/// A failed or malformed fetch ends the run quietly with an empty summary.
/// Entries without a `team` object are skipped; store failures abort.
pub async fn run_teams_import<S: DocumentSink>(
    client: &ApiClient,
    sink: &mut S,
    league: LeagueId,
    season: Season,
) -> Result<ImportSummary> {
    let mut summary = ImportSummary::default();

    let Some(entries) = fetch_team_entries(client, league, season).await else {
        return Ok(summary);
    };
    summary.fetched = entries.len();

    for entry in &entries {
        let Some(team) = extract_team(entry) else {
            warn!("Missing 'team' key in response item, skipping");
            summary.skipped += 1;
            continue;
        };
        upsert_or_skip(sink, Collection::Teams, &team, &mut summary)?;
    }

    info!(
        written = summary.written,
        skipped = summary.skipped,
        "Teams import finished"
    );
    Ok(summary)
}

/// Handle `import teams`
pub async fn handle_import_teams(
    client: &ApiClient,
    database_path: &Path,
    league: LeagueId,
    season: Season,
) -> Result<()> {
    println!("Importing teams for league {} season {}...", league, season);

    let mut store = DocumentStore::open(database_path)?;
    let summary = run_teams_import(client, &mut store, league, season).await?;

    if summary.fetched == 0 && summary.written == 0 {
        println!("No teams imported.");
    } else {
        println!(
            "✓ {} of {} teams upserted ({} skipped)",
            summary.written, summary.fetched, summary.skipped
        );
    }
    Ok(())
}
