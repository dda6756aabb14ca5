//! Raw API-Football JSON into storable records.

use crate::{
    cli::types::{LeagueId, Season, TeamId},
    error::{MoneyballError, Result},
    football::types::ApiEnvelope,
    storage::{Team, TeamStatistics},
};
use serde_json::Value;

#[cfg(test)]
mod tests;

/// The `response` list of a teams envelope.
///
/// Missing or non-list `response` is an unexpected shape.
pub fn team_entries(envelope: &ApiEnvelope) -> Result<&[Value]> {
    match &envelope.response {
        Some(Value::Array(entries)) => Ok(entries.as_slice()),
        Some(_) => Err(MoneyballError::UnexpectedShape {
            context: "teams 'response' is not a list".to_string(),
        }),
        None => Err(MoneyballError::UnexpectedShape {
            context: "teams payload has no 'response'".to_string(),
        }),
    }
}

/// The nested `team` object of one teams entry, passed through unchanged.
pub fn extract_team(entry: &Value) -> Option<Team> {
    match entry.get("team")? {
        Value::Object(fields) if !fields.is_empty() => Some(Team::from_fields(fields.clone())),
        _ => None,
    }
}

/// Reduce a statistics `response` to a single object.
///
/// Lists yield their first element only; an empty list means no statistics.
pub fn normalize_statistics(response: &Value) -> Result<Option<&Value>> {
    let stats = match response {
        Value::Array(items) => match items.first() {
            Some(first) => first,
            None => return Ok(None),
        },
        other => other,
    };

    match stats {
        Value::Object(map) if map.is_empty() => Ok(None),
        Value::Object(_) => Ok(Some(stats)),
        Value::Null => Ok(None),
        _ => Err(MoneyballError::UnexpectedShape {
            context: "statistics 'response' is not an object".to_string(),
        }),
    }
}

/// `{team}{season}{league}` read back as an integer; `None` if it overflows.
pub fn composite_statistics_id(team: TeamId, season: Season, league: LeagueId) -> Option<i64> {
    format!("{team}{season}{league}").parse().ok()
}

/// Home/away/total triple found under one path
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct Split {
    home: Option<i64>,
    away: Option<i64>,
    total: Option<i64>,
}

fn value_at<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |v, key| v.get(key))
}

fn split_at(stats: &Value, path: &[&str]) -> Split {
    let Some(group) = value_at(stats, path) else {
        return Split::default();
    };
    let int = |key: &str| group.get(key).and_then(Value::as_i64);
    Split {
        home: int("home"),
        away: int("away"),
        total: int("total"),
    }
}

/// Flatten one statistics object. Missing paths become `None`.
pub fn build_team_statistics(
    stats: &Value,
    team: TeamId,
    season: Season,
    league: LeagueId,
) -> TeamStatistics {
    let goals = split_at(stats, &["goals", "for", "total"]);
    let against = split_at(stats, &["goals", "against", "total"]);
    let wins = split_at(stats, &["fixtures", "wins"]);
    let draws = split_at(stats, &["fixtures", "draws"]);
    let loses = split_at(stats, &["fixtures", "loses"]);

    TeamStatistics {
        id: composite_statistics_id(team, season, league),
        team,
        season,
        league_id: league,
        team_name: value_at(stats, &["team", "name"])
            .and_then(Value::as_str)
            .map(str::to_string),
        goals_home: goals.home,
        goals_away: goals.away,
        goals_total: goals.total,
        goals_against_home: against.home,
        goals_against_away: against.away,
        goals_against_total: against.total,
        wins_home: wins.home,
        wins_away: wins.away,
        wins_total: wins.total,
        draws_home: draws.home,
        draws_away: draws.away,
        draws_total: draws.total,
        loses_home: loses.home,
        loses_away: loses.away,
        loses_total: loses.total,
    }
}
