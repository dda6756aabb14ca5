//! Document store tests through the public API

use moneyball_etl::{
    storage::{Collection, DocumentSink, DocumentStore, Team},
    MoneyballError,
};
use serde_json::json;
use tempfile::TempDir;

fn team(value: serde_json::Value) -> Team {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_store_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("nested").join("moneyball2.db");

    {
        let mut store = DocumentStore::open(&db_path).unwrap();
        store
            .upsert(
                Collection::Teams,
                &team(json!({"id": 529, "name": "Barcelona", "founded": 1899})),
            )
            .unwrap();
    }

    let store = DocumentStore::open(&db_path).unwrap();
    let doc = store.get(Collection::Teams, "529").unwrap().unwrap();
    assert_eq!(doc["name"], "Barcelona");
    assert_eq!(doc["founded"], 1899);
}

#[test]
fn test_rejected_team_leaves_store_untouched() {
    let dir = TempDir::new().unwrap();
    let mut store = DocumentStore::open(&dir.path().join("store.db")).unwrap();

    let err = store
        .upsert(Collection::Teams, &team(json!({"name": "Ghost FC"})))
        .unwrap_err();

    assert!(matches!(err, MoneyballError::MissingDocumentId { .. }));
    assert_eq!(store.count(Collection::Teams).unwrap(), 0);
}

#[test]
fn test_collections_listing() {
    let mut store = DocumentStore::open_in_memory().unwrap();
    store
        .upsert(Collection::Teams, &team(json!({"id": 1, "name": "One"})))
        .unwrap();

    let names: Vec<_> = store
        .collections()
        .unwrap()
        .into_iter()
        .map(|(c, n)| (c.name(), n))
        .collect();
    assert_eq!(names, vec![("teams", 1), ("teams_statistics", 0)]);
}
