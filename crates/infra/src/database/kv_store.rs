//! Key/value storage on top of the `kv_store` table
//!
//! Plays the role of browser local storage: string keys, JSON string values,
//! every write committed before the call returns.

use std::sync::Arc;

use chrono::Utc;
use reciclo_domain::{RecicloError, Result as DomainResult};
use rusqlite::{params, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::task;
use tracing::debug;

use super::manager::{map_sql_error, DbManager};
use crate::errors::InfraError;

/// Async key/value store. All SQLite work runs on the blocking pool.
#[derive(Clone)]
pub struct KvStore {
    db: Arc<DbManager>,
}

impl KvStore {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }

    /// Raw value stored under `key`
    pub async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        let db = Arc::clone(&self.db);
        let key = key.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<String>> {
            let conn = db.get_connection()?;
            conn.query_row("SELECT value FROM kv_store WHERE key = ?1", params![&key], |row| {
                row.get::<_, String>(0)
            })
            .optional()
            .map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    /// Insert or replace the value under `key`
    pub async fn set(&self, key: &str, value: String) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let key = key.to_string();

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            conn.execute(
                "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![&key, &value, Utc::now().timestamp()],
            )
            .map_err(map_sql_error)?;
            debug!(key = %key, bytes = value.len(), "kv entry written");
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    /// Delete `key`. Returns whether it existed.
    pub async fn remove(&self, key: &str) -> DomainResult<bool> {
        let db = Arc::clone(&self.db);
        let key = key.to_string();

        task::spawn_blocking(move || -> DomainResult<bool> {
            let conn = db.get_connection()?;
            let removed =
                conn.execute("DELETE FROM kv_store WHERE key = ?1", params![&key]).map_err(map_sql_error)?;
            Ok(removed > 0)
        })
        .await
        .map_err(map_join_error)?
    }

    /// Decode the JSON value under `key`.
    ///
    /// A value that does not decode yields `MalformedPersistedState`.
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> DomainResult<Option<T>> {
        match self.get(key).await? {
            Some(raw) => serde_json::from_str(&raw).map(Some).map_err(|e| {
                RecicloError::MalformedPersistedState(format!("{key}: {e}"))
            }),
            None => Ok(None),
        }
    }

    /// Encode `value` as JSON and store it under `key`
    pub async fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> DomainResult<()> {
        let raw = serde_json::to_string(value).map_err(|e| RecicloError::from(InfraError::from(e)))?;
        self.set(key, raw).await
    }
}

fn map_join_error(err: task::JoinError) -> RecicloError {
    RecicloError::from(InfraError::from(err))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn store() -> (TempDir, KvStore) {
        let dir = TempDir::new().expect("temp dir created");
        let db = DbManager::new(dir.path().join("kv.db"), 2).expect("manager created");
        db.run_migrations().expect("migrations run");
        (dir, KvStore::new(Arc::new(db)))
    }

    #[tokio::test]
    async fn set_get_overwrite_remove() {
        let (_dir, kv) = store();
        assert_eq!(kv.get("k").await.unwrap(), None);

        kv.set("k", "one".into()).await.unwrap();
        kv.set("k", "two".into()).await.unwrap();
        assert_eq!(kv.get("k").await.unwrap().as_deref(), Some("two"));

        assert!(kv.remove("k").await.unwrap());
        assert!(!kv.remove("k").await.unwrap());
        assert_eq!(kv.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn undecodable_json_is_malformed() {
        let (_dir, kv) = store();
        kv.set("broken", "{\"total_points\":".into()).await.unwrap();

        let result = kv.get_json::<reciclo_domain::StatsRecord>("broken").await;
        assert!(matches!(result, Err(RecicloError::MalformedPersistedState(_))));
    }
}
