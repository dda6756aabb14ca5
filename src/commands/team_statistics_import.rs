//! Team statistics import: per-team season statistics into
//! `teams_statistics`.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::{
    football::{
        transform::{build_team_statistics, extract_team, normalize_statistics},
        ApiClient,
    },
    storage::{Collection, DocumentSink, DocumentStore},
    LeagueId, Result, Season,
};

use super::common::{fetch_team_entries, upsert_or_skip, ImportSummary, IterationOrder};

/// Fetch the league's teams, then each team's statistics, and upsert the
/// flattened records one team at a time.
///
/// Per-team problems (no id, failed fetch, empty or malformed statistics)
/// skip that team. Store failures abort the run.
pub async fn run_team_statistics_import<S: DocumentSink>(
    client: &ApiClient,
    sink: &mut S,
    league: LeagueId,
    season: Season,
    order: IterationOrder,
) -> Result<ImportSummary> {
    let mut summary = ImportSummary::default();

    let Some(mut entries) = fetch_team_entries(client, league, season).await else {
        return Ok(summary);
    };
    summary.fetched = entries.len();

    if order == IterationOrder::Reversed {
        entries.reverse();
    }

    for entry in &entries {
        let Some(team_id) = extract_team(entry).and_then(|team| team.id()) else {
            warn!("Team ID not found in response item, skipping");
            summary.skipped += 1;
            continue;
        };

        let Ok(envelope) = client.fetch_team_statistics(league, season, team_id).await else {
            warn!(team = %team_id, "Failed to retrieve statistics, skipping");
            summary.skipped += 1;
            continue;
        };

        let Some(response) = envelope.response.as_ref() else {
            warn!(team = %team_id, "Statistics payload has no 'response', skipping");
            summary.skipped += 1;
            continue;
        };

        let stats = match normalize_statistics(response) {
            Ok(Some(stats)) => stats,
            Ok(None) => {
                warn!(team = %team_id, "No statistics returned, skipping");
                summary.skipped += 1;
                continue;
            }
            Err(e) => {
                warn!(team = %team_id, error = %e, "Skipping team");
                summary.skipped += 1;
                continue;
            }
        };

        let record = build_team_statistics(stats, team_id, season, league);
        debug!(?record, "Built team statistics");
        upsert_or_skip(sink, Collection::TeamsStatistics, &record, &mut summary)?;
    }

    info!(
        written = summary.written,
        skipped = summary.skipped,
        "Team statistics import finished"
    );
    Ok(summary)
}

/// Handle `import team-stats`
pub async fn handle_import_team_statistics(
    client: &ApiClient,
    database_path: &Path,
    league: LeagueId,
    season: Season,
    order: IterationOrder,
) -> Result<()> {
    println!(
        "Importing team statistics for league {} season {}...",
        league, season
    );

    let mut store = DocumentStore::open(database_path)?;
    let summary = run_team_statistics_import(client, &mut store, league, season, order).await?;

    println!(
        "✓ {} team statistics upserted ({} of {} teams skipped)",
        summary.written, summary.skipped, summary.fetched
    );
    Ok(())
}
