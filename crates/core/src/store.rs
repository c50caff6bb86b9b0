//! RecordStore trait: read access to the external document store.
//!
//! The store is a set of named collections, each holding documents keyed by
//! a store-assigned identifier. Alumnet never creates or mutates records in
//! the request path; it only lists whole collections.

use crate::error::StoreError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A document's field map, with the store identifier merged in as `"id"`.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// A single document as held by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    /// Store-assigned document key
    pub id: String,

    /// The document's fields
    #[serde(default)]
    pub fields: Document,
}

impl StoredRecord {
    pub fn new(id: impl Into<String>, fields: Document) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Merge the identifier into the field map.
    ///
    /// A field literally named `id` inside the document overrides the
    /// store key.
    pub fn into_document(self) -> Document {
        let mut document = Document::new();
        document.insert("id".into(), serde_json::Value::String(self.id));
        document.extend(self.fields);
        document
    }
}

/// The core RecordStore trait.
///
/// Implementations: in-memory (seedable from JSON) and SQLite.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// The backend name (e.g., "memory", "sqlite").
    fn name(&self) -> &str;

    /// List every document in a collection, in store order.
    ///
    /// An unknown collection is an empty collection, not an error.
    async fn fetch_all(&self, collection: &str)
    -> std::result::Result<Vec<StoredRecord>, StoreError>;

    /// Count the documents in a collection.
    async fn count(&self, collection: &str) -> std::result::Result<usize, StoreError> {
        Ok(self.fetch_all(collection).await?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: serde_json::Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn id_is_merged_into_document() {
        let record = StoredRecord::new("evt_1", fields(json!({"title": "Reunion"})));
        let doc = record.into_document();
        assert_eq!(doc["id"], "evt_1");
        assert_eq!(doc["title"], "Reunion");
    }

    #[test]
    fn document_id_field_wins_over_store_key() {
        let record = StoredRecord::new("store_key", fields(json!({"id": "custom"})));
        let doc = record.into_document();
        assert_eq!(doc["id"], "custom");
        assert_eq!(doc.len(), 1);
    }
}
