//! Single-collection reads with a swallow-and-default failure policy.
//!
//! A collection that cannot be read must never block the rest of the
//! context, so every store error is logged and turned into "no data".
//! [`FetchOutcome`] keeps the distinction between an empty collection and
//! a failed read visible to callers that care (logging, diagnostics).

use alumnet_core::error::StoreError;
use alumnet_core::store::{Document, RecordStore};
use tracing::{debug, warn};

/// The result of reading one collection.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// The read succeeded; the collection may still be empty.
    Loaded(Vec<Document>),
    /// The read failed and the collection is treated as empty.
    Failed {
        collection: String,
        error: StoreError,
    },
}

impl FetchOutcome {
    /// Collapse to the documents, with a failed read yielding none.
    pub fn into_documents(self) -> Vec<Document> {
        match self {
            FetchOutcome::Loaded(documents) => documents,
            FetchOutcome::Failed { .. } => Vec::new(),
        }
    }
}

/// Read every document of `collection`, merging each store id into its
/// field map.
///
/// Never fails: store errors are logged at `warn` and reported as
/// [`FetchOutcome::Failed`].
pub async fn fetch_collection(store: &dyn RecordStore, collection: &str) -> FetchOutcome {
    match store.fetch_all(collection).await {
        Ok(records) => {
            debug!(collection, records = records.len(), "Collection loaded");
            FetchOutcome::Loaded(records.into_iter().map(|r| r.into_document()).collect())
        }
        Err(error) => {
            warn!(collection, store = store.name(), error = %error, "Collection read failed, using empty data");
            FetchOutcome::Failed {
                collection: collection.to_string(),
                error,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alumnet_core::store::StoredRecord;
    use alumnet_store::{InMemoryStore, parse_fixture};
    use async_trait::async_trait;
    use serde_json::json;

    struct BrokenStore;

    #[async_trait]
    impl RecordStore for BrokenStore {
        fn name(&self) -> &str {
            "broken"
        }

        async fn fetch_all(&self, collection: &str) -> Result<Vec<StoredRecord>, StoreError> {
            Err(StoreError::QueryFailed {
                collection: collection.to_string(),
                reason: "permission denied".into(),
            })
        }
    }

    #[tokio::test]
    async fn loaded_documents_carry_their_id() {
        let store = InMemoryStore::from_seed(parse_fixture(json!({
            "events": [{"id": "evt_1", "title": "Reunion"}]
        })).unwrap());

        let outcome = fetch_collection(&store, "events").await;
        assert!(matches!(outcome, FetchOutcome::Loaded(_)));
        let documents = outcome.into_documents();
        assert_eq!(documents[0]["id"], "evt_1");
        assert_eq!(documents[0]["title"], "Reunion");
    }

    #[tokio::test]
    async fn empty_collection_is_loaded_not_failed() {
        let outcome = fetch_collection(&InMemoryStore::new(), "events").await;
        assert!(matches!(&outcome, FetchOutcome::Loaded(documents) if documents.is_empty()));
    }

    #[tokio::test]
    async fn store_error_degrades_to_empty() {
        let outcome = fetch_collection(&BrokenStore, "users").await;
        match &outcome {
            FetchOutcome::Failed { collection, error } => {
                assert_eq!(collection, "users");
                assert!(error.to_string().contains("permission denied"));
            }
            FetchOutcome::Loaded(_) => unreachable!(),
        }
        assert!(outcome.into_documents().is_empty());
    }
}
