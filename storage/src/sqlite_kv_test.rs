//! SqliteKvStore tests against a temporary database file.

use tempfile::TempDir;

use crate::kv::KvStore;
use crate::sqlite_kv::SqliteKvStore;

async fn temp_store() -> (TempDir, SqliteKvStore) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("kv_test.db");
    let store = SqliteKvStore::new(path.to_str().unwrap())
        .await
        .expect("open store");
    (dir, store)
}

#[tokio::test]
async fn test_get_absent_key() {
    let (_dir, store) = temp_store().await;
    assert!(store.get("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_set_then_get() {
    let (_dir, store) = temp_store().await;
    store.set("greeting", "hello").await.unwrap();
    assert_eq!(store.get("greeting").await.unwrap().as_deref(), Some("hello"));
}

#[tokio::test]
async fn test_set_upserts() {
    let (_dir, store) = temp_store().await;
    store.set("k", "one").await.unwrap();
    store.set("k", "two").await.unwrap();
    assert_eq!(store.get("k").await.unwrap().as_deref(), Some("two"));

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM kv")
        .fetch_one(store.pool())
        .await
        .unwrap();
    assert_eq!(count.0, 1);
}

#[tokio::test]
async fn test_value_survives_reopen() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("kv_test.db");
    let path = path.to_str().unwrap();

    {
        let store = SqliteKvStore::new(path).await.unwrap();
        store.set("persisted", "yes").await.unwrap();
    }

    let reopened = SqliteKvStore::new(path).await.unwrap();
    assert_eq!(
        reopened.get("persisted").await.unwrap().as_deref(),
        Some("yes")
    );
}

#[tokio::test]
async fn test_keys_are_isolated() {
    let (_dir, store) = temp_store().await;
    store.set("a", "1").await.unwrap();
    store.set("b", "2").await.unwrap();
    assert_eq!(store.get("a").await.unwrap().as_deref(), Some("1"));
    assert_eq!(store.get("b").await.unwrap().as_deref(), Some("2"));
}
