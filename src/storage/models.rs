//! Data models for the storage layer

use crate::cli::types::{LeagueId, Season, TeamId};
use crate::error::{MoneyballError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Named document collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Teams,
    TeamsStatistics,
}

impl Collection {
    pub const ALL: [Collection; 2] = [Collection::Teams, Collection::TeamsStatistics];

    /// Collection name, also used as the backing table name
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Teams => "teams",
            Collection::TeamsStatistics => "teams_statistics",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Collection {
    type Err = MoneyballError;

    fn from_str(s: &str) -> Result<Self> {
        Collection::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| MoneyballError::UnknownCollection {
                name: s.to_string(),
            })
    }
}

/// A record that can be written to a collection.
///
/// `document_key` is the storage identity; it fails when the record has no
/// resolvable identifier, so such records never reach the store.
pub trait Document: Serialize {
    fn document_id(&self) -> Option<i64>;

    fn document_key(&self, collection: Collection) -> Result<String>;

    /// Human-readable label for log lines
    fn display_name(&self) -> String;
}

/// Anything that accepts full-document upserts.
pub trait DocumentSink {
    fn upsert<D: Document>(&mut self, collection: Collection, doc: &D) -> Result<()>;
}

/// Team as returned by the provider, passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Team {
    fields: Map<String, Value>,
}

impl Team {
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    /// Numeric team id; numeric strings are accepted too.
    pub fn id(&self) -> Option<TeamId> {
        match self.fields.get("id")? {
            Value::Number(n) => n.as_u64().map(TeamId::new),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl Document for Team {
    fn document_id(&self) -> Option<i64> {
        self.id().and_then(|id| i64::try_from(id.as_u64()).ok())
    }

    fn document_key(&self, collection: Collection) -> Result<String> {
        self.id()
            .map(|id| id.to_string())
            .ok_or_else(|| MoneyballError::MissingDocumentId {
                collection: collection.to_string(),
                name: self.display_name(),
            })
    }

    fn display_name(&self) -> String {
        self.name().unwrap_or("<unknown>").to_string()
    }
}

/// Flattened per-team, per-season statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStatistics {
    /// `team`, `season` and `league_id` concatenated as decimal digits
    pub id: Option<i64>,
    pub team: TeamId,
    pub season: Season,
    pub league_id: LeagueId,
    pub team_name: Option<String>,
    pub goals_home: Option<i64>,
    pub goals_away: Option<i64>,
    pub goals_total: Option<i64>,
    pub goals_against_home: Option<i64>,
    pub goals_against_away: Option<i64>,
    pub goals_against_total: Option<i64>,
    pub wins_home: Option<i64>,
    pub wins_away: Option<i64>,
    pub wins_total: Option<i64>,
    pub draws_home: Option<i64>,
    pub draws_away: Option<i64>,
    pub draws_total: Option<i64>,
    pub loses_home: Option<i64>,
    pub loses_away: Option<i64>,
    pub loses_total: Option<i64>,
}

impl Document for TeamStatistics {
    fn document_id(&self) -> Option<i64> {
        self.id
    }

    /// Keyed by the structured triple rather than the concatenated `id`,
    /// which is ambiguous across digit counts (1|23|45 vs 12|3|45).
    fn document_key(&self, collection: Collection) -> Result<String> {
        match self.id {
            Some(_) => Ok(format!("{}:{}:{}", self.team, self.season, self.league_id)),
            None => Err(MoneyballError::MissingDocumentId {
                collection: collection.to_string(),
                name: self.display_name(),
            }),
        }
    }

    fn display_name(&self) -> String {
        match &self.team_name {
            Some(name) => format!("{name} {}", self.season),
            None => format!("team {} {}", self.team, self.season),
        }
    }
}
