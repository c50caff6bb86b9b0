//! SQLite document store.
//!
//! Uses a single SQLite database file with one table:
//! - `documents`: one row per document, fields stored as a JSON object
//!
//! Rows are keyed by `(collection, id)`; the integer `iid` keeps insertion
//! order stable across upserts.

use alumnet_core::error::StoreError;
use alumnet_core::store::{RecordStore, StoredRecord};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use tracing::{debug, info};

/// A SQLite-backed document store.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (or create) a SQLite store from a connection URL.
    ///
    /// The database and its table are created automatically.
    /// Pass `"sqlite::memory:"` for an ephemeral database (useful for tests).
    pub async fn new(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| StoreError::Unavailable(format!("Invalid SQLite URL: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        // Every connection to an in-memory URL opens a separate database.
        let max_connections = if url.contains(":memory:") { 1 } else { 4 };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| StoreError::Unavailable(format!("Failed to open SQLite: {e}")))?;

        let store = Self { pool };
        store.run_migrations().await?;
        info!("SQLite document store initialized at {url}");
        Ok(store)
    }

    async fn run_migrations(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                iid         INTEGER PRIMARY KEY AUTOINCREMENT,
                collection  TEXT NOT NULL,
                id          TEXT NOT NULL,
                data        TEXT NOT NULL DEFAULT '{}',
                created_at  TEXT NOT NULL,
                updated_at  TEXT NOT NULL,
                UNIQUE (collection, id)
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Unavailable(format!("documents table: {e}")))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_documents_collection ON documents(collection, iid)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Unavailable(format!("collection index: {e}")))?;

        debug!("SQLite migrations complete");
        Ok(())
    }

    /// Upsert a batch of records in one transaction.
    pub async fn upsert_all(
        &self,
        collection: &str,
        records: &[StoredRecord],
    ) -> Result<usize, StoreError> {
        let query_failed = |e: sqlx::Error| StoreError::QueryFailed {
            collection: collection.to_string(),
            reason: e.to_string(),
        };

        let mut tx = self.pool.begin().await.map_err(query_failed)?;
        let now = Utc::now().to_rfc3339();
        for record in records {
            let data = serde_json::Value::Object(record.fields.clone()).to_string();
            sqlx::query(
                r#"
                INSERT INTO documents (collection, id, data, created_at, updated_at)
                VALUES (?1, ?2, ?3, ?4, ?4)
                ON CONFLICT(collection, id) DO UPDATE SET
                    data = excluded.data,
                    updated_at = excluded.updated_at
                "#,
            )
            .bind(collection)
            .bind(&record.id)
            .bind(&data)
            .bind(&now)
            .execute(&mut *tx)
            .await
            .map_err(query_failed)?;
        }
        tx.commit().await.map_err(query_failed)?;

        info!(collection, documents = records.len(), "Collection seeded");
        Ok(records.len())
    }

    fn row_to_record(
        collection: &str,
        row: &sqlx::sqlite::SqliteRow,
    ) -> Result<StoredRecord, StoreError> {
        let query_failed = |column: &str, e: sqlx::Error| StoreError::QueryFailed {
            collection: collection.to_string(),
            reason: format!("{column} column: {e}"),
        };

        let id: String = row.try_get("id").map_err(|e| query_failed("id", e))?;
        let data: String = row.try_get("data").map_err(|e| query_failed("data", e))?;

        let invalid = |reason: String| StoreError::InvalidDocument {
            collection: collection.to_string(),
            id: id.clone(),
            reason,
        };
        match serde_json::from_str::<serde_json::Value>(&data) {
            Ok(serde_json::Value::Object(fields)) => Ok(StoredRecord::new(id.clone(), fields)),
            Ok(_) => Err(invalid("data is not a JSON object".into())),
            Err(e) => Err(invalid(e.to_string())),
        }
    }
}

#[async_trait]
impl RecordStore for SqliteStore {
    fn name(&self) -> &str {
        "sqlite"
    }

    async fn fetch_all(&self, collection: &str) -> Result<Vec<StoredRecord>, StoreError> {
        let rows = sqlx::query("SELECT id, data FROM documents WHERE collection = ?1 ORDER BY iid")
            .bind(collection)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::QueryFailed {
                collection: collection.to_string(),
                reason: e.to_string(),
            })?;

        rows.iter()
            .map(|row| Self::row_to_record(collection, row))
            .collect()
    }

    async fn count(&self, collection: &str) -> Result<usize, StoreError> {
        let row = sqlx::query("SELECT COUNT(*) AS cnt FROM documents WHERE collection = ?1")
            .bind(collection)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StoreError::QueryFailed {
                collection: collection.to_string(),
                reason: format!("COUNT: {e}"),
            })?;

        let cnt: i64 = row.try_get("cnt").map_err(|e| StoreError::QueryFailed {
            collection: collection.to_string(),
            reason: format!("cnt column: {e}"),
        })?;

        Ok(cnt as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alumnet_core::store::Document;
    use serde_json::json;

    async fn test_store() -> SqliteStore {
        SqliteStore::new("sqlite::memory:").await.unwrap()
    }

    fn record(id: &str, value: serde_json::Value) -> StoredRecord {
        let fields: Document = value.as_object().cloned().unwrap();
        StoredRecord::new(id, fields)
    }

    #[tokio::test]
    async fn upsert_all_and_fetch() {
        let store = test_store().await;
        let records = vec![
            record("n1", json!({"title": "Portal update"})),
            record("n2", json!({"title": "Dues reminder"})),
        ];
        assert_eq!(store.upsert_all("notifications", &records).await.unwrap(), 2);
        assert_eq!(store.fetch_all("notifications").await.unwrap(), records);
        assert_eq!(store.count("notifications").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn fetch_preserves_insertion_order() {
        let store = test_store().await;
        for title in ["First", "Second", "Third"] {
            let batch = [record(&title.to_lowercase(), json!({"title": title}))];
            store.upsert_all("events", &batch).await.unwrap();
        }

        let titles: Vec<String> = store
            .fetch_all("events")
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.fields["title"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
    }

    #[tokio::test]
    async fn reseeding_replaces_without_reordering() {
        let store = test_store().await;
        let first = [
            record("a", json!({"name": "Asha"})),
            record("b", json!({"name": "Ben"})),
        ];
        store.upsert_all("users", &first).await.unwrap();
        store
            .upsert_all("users", &[record("a", json!({"name": "Asha K."}))])
            .await
            .unwrap();

        let records = store.fetch_all("users").await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "a");
        assert_eq!(records[0].fields["name"], "Asha K.");
        assert_eq!(records[1].id, "b");
    }

    #[tokio::test]
    async fn collections_are_isolated() {
        let store = test_store().await;
        let same_id = [record("x", json!({}))];
        store.upsert_all("events", &same_id).await.unwrap();
        store.upsert_all("users", &same_id).await.unwrap();

        assert_eq!(store.count("events").await.unwrap(), 1);
        assert_eq!(store.count("users").await.unwrap(), 1);
        assert_eq!(store.count("mentorship").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn non_object_row_is_invalid_document() {
        let store = test_store().await;
        sqlx::query(
            "INSERT INTO documents (collection, id, data, created_at, updated_at) VALUES ('events', 'bad', '[1,2]', 'now', 'now')",
        )
        .execute(&store.pool)
        .await
        .unwrap();

        let err = store.fetch_all("events").await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidDocument { .. }));
    }

    #[tokio::test]
    async fn invalid_url_is_unavailable() {
        let err = SqliteStore::new("postgres://nope").await.err().unwrap();
        assert!(matches!(err, StoreError::Unavailable(_)));
    }

    #[tokio::test]
    async fn store_name() {
        assert_eq!(test_store().await.name(), "sqlite");
    }
}
