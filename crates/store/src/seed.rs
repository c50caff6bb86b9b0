//! JSON fixture format shared by the memory backend and `alumnet seed`.
//!
//! A fixture is one JSON object mapping collection names to arrays of
//! documents:
//!
//! ```json
//! { "events": [ { "id": "evt_1", "title": "Reunion" } ], "users": [] }
//! ```
//!
//! A document's `id` field (string or number) becomes its store key and is
//! removed from the field map; documents without one get a fresh UUID.

use alumnet_core::error::StoreError;
use alumnet_core::records::value_to_text;
use alumnet_core::store::StoredRecord;
use serde_json::Value;
use std::path::Path;
use uuid::Uuid;

/// One collection's worth of seed documents, in fixture order.
#[derive(Debug, Clone)]
pub struct SeedCollection {
    pub name: String,
    pub records: Vec<StoredRecord>,
}

/// Parse a fixture value.
pub fn parse_fixture(value: Value) -> Result<Vec<SeedCollection>, StoreError> {
    let Value::Object(collections) = value else {
        return Err(StoreError::SeedFailed(
            "fixture must be a JSON object of collection arrays".into(),
        ));
    };

    let mut seeded = Vec::with_capacity(collections.len());
    for (name, documents) in collections {
        let Value::Array(documents) = documents else {
            return Err(StoreError::SeedFailed(format!(
                "collection '{name}' must be an array of documents"
            )));
        };

        let mut records = Vec::with_capacity(documents.len());
        for (index, document) in documents.into_iter().enumerate() {
            let Value::Object(mut fields) = document else {
                return Err(StoreError::SeedFailed(format!(
                    "document #{index} in '{name}' is not an object"
                )));
            };
            let id = fields
                .remove("id")
                .as_ref()
                .and_then(value_to_text)
                .unwrap_or_else(|| Uuid::new_v4().to_string());
            records.push(StoredRecord::new(id, fields));
        }

        seeded.push(SeedCollection { name, records });
    }

    Ok(seeded)
}

/// Read and parse a fixture file.
pub fn read_fixture(path: &Path) -> Result<Vec<SeedCollection>, StoreError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| StoreError::SeedFailed(format!("{}: {e}", path.display())))?;
    let value: Value = serde_json::from_str(&content)
        .map_err(|e| StoreError::SeedFailed(format!("{}: {e}", path.display())))?;
    parse_fixture(value)
}
