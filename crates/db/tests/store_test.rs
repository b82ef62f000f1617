use pretty_assertions::assert_eq;
use serde_json::json;

use roombook_db::mock::MemoryStore;
use roombook_db::DocumentStore;

#[tokio::test]
async fn test_get_set_delete() {
    let store = MemoryStore::new();

    assert_eq!(store.get("reservations", "a").await.unwrap(), None);

    store
        .set("reservations", "a", json!({"grade": 1}))
        .await
        .unwrap();
    assert_eq!(
        store.get("reservations", "a").await.unwrap(),
        Some(json!({"grade": 1}))
    );

    assert!(store.delete("reservations", "a").await.unwrap());
    assert!(!store.delete("reservations", "a").await.unwrap());
    assert_eq!(store.get("reservations", "a").await.unwrap(), None);
}

#[tokio::test]
async fn test_collections_are_independent() {
    let store = MemoryStore::new();

    store.set("reservations", "k", json!(1)).await.unwrap();
    store.set("blocks", "k", json!(2)).await.unwrap();

    assert_eq!(store.get("reservations", "k").await.unwrap(), Some(json!(1)));
    assert_eq!(store.get("blocks", "k").await.unwrap(), Some(json!(2)));

    store.delete("blocks", "k").await.unwrap();
    assert_eq!(store.get("reservations", "k").await.unwrap(), Some(json!(1)));
}

#[tokio::test]
async fn test_merge_updates_top_level_fields() {
    let store = MemoryStore::new();

    store
        .set("config", "settings", json!({"a": 1, "b": 2}))
        .await
        .unwrap();
    store
        .merge("config", "settings", json!({"b": 3, "c": 4}))
        .await
        .unwrap();

    assert_eq!(
        store.get("config", "settings").await.unwrap(),
        Some(json!({"a": 1, "b": 3, "c": 4}))
    );
}

#[tokio::test]
async fn test_merge_upserts_when_absent() {
    let store = MemoryStore::new();

    store.merge("config", "settings", json!({"a": 1})).await.unwrap();
    assert_eq!(
        store.get("config", "settings").await.unwrap(),
        Some(json!({"a": 1}))
    );
}

#[tokio::test]
async fn test_put_unless_present_is_exclusive() {
    let store = MemoryStore::new();

    assert!(store
        .put_unless_present("reservations", "slot", json!({"winner": 1}))
        .await
        .unwrap());
    assert!(!store
        .put_unless_present("reservations", "slot", json!({"winner": 2}))
        .await
        .unwrap());

    // The losing write left no trace.
    assert_eq!(
        store.get("reservations", "slot").await.unwrap(),
        Some(json!({"winner": 1}))
    );
}
