//! `alumnet seed`: Import a JSON fixture into the SQLite store.

use alumnet_core::error::StoreError;
use alumnet_store::{SeedCollection, SqliteStore, read_fixture};
use std::path::Path;

pub async fn run(config_path: Option<&Path>, file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(config_path)?;

    if config.store.backend != "sqlite" {
        return Err(format!(
            "seed writes to the SQLite store, but store.backend is '{}'. \
             Set STORE_BACKEND=sqlite (the memory backend reads STORE_SEED_FILE directly).",
            config.store.backend
        )
        .into());
    }

    let collections = read_fixture(file)?;
    let store = SqliteStore::new(&config.store.url).await?;
    let imported = import(&store, &collections).await?;

    println!("Seeded {} from {}", config.store.url, file.display());
    for (name, count) in &imported {
        println!("   {name}: {count} document(s)");
    }

    Ok(())
}

/// Upsert every collection, returning per-collection document counts.
async fn import(
    store: &SqliteStore,
    collections: &[SeedCollection],
) -> Result<Vec<(String, usize)>, StoreError> {
    let mut imported = Vec::with_capacity(collections.len());
    for collection in collections {
        let count = store.upsert_all(&collection.name, &collection.records).await?;
        imported.push((collection.name.clone(), count));
    }
    Ok(imported)
}
