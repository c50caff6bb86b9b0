//! In-memory store: useful for testing, demos, and fixture-backed deployments.

use crate::seed::{self, SeedCollection};
use alumnet_core::error::StoreError;
use alumnet_core::store::{RecordStore, StoredRecord};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// A store that keeps every collection in a Vec, in insertion order.
///
/// Contents are fixed once built.
pub struct InMemoryStore {
    collections: HashMap<String, Vec<StoredRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            collections: HashMap::new(),
        }
    }

    /// Build a store pre-populated from parsed fixture collections.
    pub fn from_seed(seeded: Vec<SeedCollection>) -> Self {
        Self {
            collections: seeded.into_iter().map(|c| (c.name, c.records)).collect(),
        }
    }

    /// Build a store from a fixture file.
    pub fn from_seed_file(path: &Path) -> Result<Self, StoreError> {
        let seeded = seed::read_fixture(path)?;
        let total: usize = seeded.iter().map(|c| c.records.len()).sum();
        info!(
            path = %path.display(),
            collections = seeded.len(),
            documents = total,
            "In-memory store seeded"
        );
        Ok(Self::from_seed(seeded))
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn fetch_all(&self, collection: &str) -> Result<Vec<StoredRecord>, StoreError> {
        Ok(self.collections.get(collection).cloned().unwrap_or_default())
    }

    async fn count(&self, collection: &str) -> Result<usize, StoreError> {
        Ok(self.collections.get(collection).map_or(0, Vec::len))
    }
}
