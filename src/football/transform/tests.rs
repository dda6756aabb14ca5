//! Unit tests for record transformation

use super::*;
use serde_json::json;

/// Trimmed-down `/teams/statistics` response object
fn sample_statistics() -> Value {
    json!({
        "league": {"id": 140, "name": "La Liga", "season": 2023},
        "team": {"id": 529, "name": "Barcelona"},
        "form": "WDWWL",
        "fixtures": {
            "played": {"home": 19, "away": 19, "total": 38},
            "wins": {"home": 12, "away": 14, "total": 26},
            "draws": {"home": 5, "away": 2, "total": 7},
            "loses": {"home": 2, "away": 3, "total": 5}
        },
        "goals": {
            "for": {
                "total": {"home": 3, "away": 2, "total": 5},
                "average": {"home": "1.8", "away": "2.2", "total": "2.0"}
            },
            "against": {
                "total": {"home": 17, "away": 27, "total": 44}
            }
        }
    })
}

fn envelope(value: Value) -> ApiEnvelope {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_team_entries_list() {
    let env = envelope(json!({"response": [{"team": {"id": 1}}, {"team": {"id": 2}}]}));
    assert_eq!(team_entries(&env).unwrap().len(), 2);
}

#[test]
fn test_team_entries_missing_response() {
    let env = envelope(json!({"errors": [], "results": 0}));
    assert!(matches!(
        team_entries(&env),
        Err(MoneyballError::UnexpectedShape { .. })
    ));
}

#[test]
fn test_team_entries_not_a_list() {
    let env = envelope(json!({"response": {"team": {"id": 1}}}));
    assert!(team_entries(&env).is_err());
}

#[test]
fn test_extract_team_passthrough() {
    let entry = json!({
        "team": {"id": 529, "name": "Barcelona", "logo": "https://media.api-sports.io/football/teams/529.png"},
        "venue": {"id": 19939, "name": "Estadi Olímpic Lluís Companys"}
    });
    let team = extract_team(&entry).unwrap();
    assert_eq!(serde_json::to_value(&team).unwrap(), entry["team"]);
}

#[test]
fn test_extract_team_missing_or_empty() {
    assert!(extract_team(&json!({"venue": {"id": 1}})).is_none());
    assert!(extract_team(&json!({"team": null})).is_none());
    assert!(extract_team(&json!({"team": {}})).is_none());
    assert!(extract_team(&json!({"team": "Barcelona"})).is_none());
}

#[test]
fn test_normalize_statistics_object() {
    let stats = sample_statistics();
    assert_eq!(normalize_statistics(&stats).unwrap(), Some(&stats));
}

#[test]
fn test_normalize_statistics_single_element_list() {
    let list = json!([sample_statistics()]);
    assert_eq!(normalize_statistics(&list).unwrap(), Some(&list[0]));
}

#[test]
fn test_normalize_statistics_uses_first_element_only() {
    let list = json!([{"team": {"id": 1}}, {"team": {"id": 2}}]);
    let first = normalize_statistics(&list).unwrap().unwrap();
    assert_eq!(first["team"]["id"], 1);
}

#[test]
fn test_normalize_statistics_empty() {
    assert_eq!(normalize_statistics(&json!([])).unwrap(), None);
    assert_eq!(normalize_statistics(&json!({})).unwrap(), None);
    assert_eq!(normalize_statistics(&Value::Null).unwrap(), None);
}

#[test]
fn test_normalize_statistics_malformed() {
    assert!(normalize_statistics(&json!("oops")).is_err());
    assert!(normalize_statistics(&json!([42])).is_err());
}

#[test]
fn test_composite_statistics_id() {
    let id = composite_statistics_id(TeamId::new(529), Season::new(2023), LeagueId::new(140));
    assert_eq!(id, Some(5292023140));
}

#[test]
fn test_composite_statistics_id_overflow() {
    let id = composite_statistics_id(
        TeamId::new(u64::MAX),
        Season::new(2023),
        LeagueId::new(140),
    );
    assert_eq!(id, None);
}

#[test]
fn test_build_team_statistics_flattens_groups() {
    let record = build_team_statistics(
        &sample_statistics(),
        TeamId::new(529),
        Season::new(2023),
        LeagueId::new(140),
    );

    assert_eq!(record.id, Some(5292023140));
    assert_eq!(record.team, TeamId::new(529));
    assert_eq!(record.team_name.as_deref(), Some("Barcelona"));
    assert_eq!(record.goals_home, Some(3));
    assert_eq!(record.goals_away, Some(2));
    assert_eq!(record.goals_total, Some(5));
    assert_eq!(record.goals_against_total, Some(44));
    assert_eq!(record.wins_home, Some(12));
    assert_eq!(record.draws_away, Some(2));
    assert_eq!(record.loses_total, Some(5));
}

#[test]
fn test_build_team_statistics_missing_paths_are_null() {
    let stats = json!({"team": {"id": 529}, "goals": {"for": {}}});
    let record = build_team_statistics(
        &stats,
        TeamId::new(529),
        Season::new(2023),
        LeagueId::new(140),
    );

    assert_eq!(record.team_name, None);
    assert_eq!(record.goals_home, None);
    assert_eq!(record.goals_against_total, None);
    assert_eq!(record.wins_total, None);

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["goals_home"], Value::Null);
    assert_eq!(json["league_id"], 140);
    assert_eq!(json["season"], 2023);
}

#[test]
fn test_build_team_statistics_ignores_non_integer_values() {
    let stats = json!({"fixtures": {"wins": {"home": "12", "away": null, "total": 26}}});
    let record = build_team_statistics(
        &stats,
        TeamId::new(1),
        Season::new(2023),
        LeagueId::new(39),
    );
    assert_eq!(record.wins_home, None);
    assert_eq!(record.wins_away, None);
    assert_eq!(record.wins_total, Some(26));
}
