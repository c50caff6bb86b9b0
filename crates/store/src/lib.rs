//! Document store backends for Alumnet.
//!
//! All backends implement `alumnet_core::RecordStore`. [`open_store`]
//! builds the configured backend once at startup; the handle is then shared
//! for the lifetime of the process.

pub mod in_memory;
pub mod seed;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use in_memory::InMemoryStore;
pub use seed::{SeedCollection, parse_fixture, read_fixture};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

use alumnet_config::StoreConfig;
use alumnet_core::error::StoreError;
use alumnet_core::store::RecordStore;
use std::sync::Arc;

/// Open the configured store backend.
///
/// Errors here are startup failures: a malformed seed file or an
/// unreachable database means the process cannot serve.
pub async fn open_store(config: &StoreConfig) -> Result<Arc<dyn RecordStore>, StoreError> {
    match config.backend.as_str() {
        "memory" => {
            let store = match &config.seed_file {
                Some(path) => InMemoryStore::from_seed_file(path)?,
                None => InMemoryStore::new(),
            };
            Ok(Arc::new(store))
        }
        #[cfg(feature = "sqlite")]
        "sqlite" => Ok(Arc::new(SqliteStore::new(&config.url).await?)),
        other => Err(StoreError::Unavailable(format!(
            "unsupported store backend '{other}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn opens_empty_memory_store_by_default() {
        let store = open_store(&StoreConfig::default()).await.unwrap();
        assert_eq!(store.name(), "memory");
        assert!(store.fetch_all("events").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_seed_file_is_fatal() {
        let config = StoreConfig {
            seed_file: Some(PathBuf::from("/nonexistent/seed.json")),
            ..StoreConfig::default()
        };
        assert!(open_store(&config).await.is_err());
    }

    #[cfg(feature = "sqlite")]
    #[tokio::test]
    async fn opens_sqlite_store() {
        let config = StoreConfig {
            backend: "sqlite".into(),
            url: "sqlite::memory:".into(),
            seed_file: None,
        };
        let store = open_store(&config).await.unwrap();
        assert_eq!(store.name(), "sqlite");
    }

    #[tokio::test]
    async fn unknown_backend_rejected() {
        let config = StoreConfig {
            backend: "firestore".into(),
            ..StoreConfig::default()
        };
        assert!(open_store(&config).await.is_err());
    }
}
