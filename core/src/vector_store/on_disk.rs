use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use dashmap::DashMap;

use super::{Collection, CollectionConfig, SearchMatch, VectorStore, VectorStoreError};
use crate::document::Document;

/// Store persisting each collection as a JSON file under a base directory.
///
/// The whole collection set is read once on [`Self::open`]; every mutation
/// rewrites the owning collection's file before returning. Queries are
/// answered from memory and never touch the disk.
#[derive(Debug)]
pub struct OnDiskVectorStore {
    base_dir: PathBuf,
    collections: DashMap<String, Collection>,
}

impl OnDiskVectorStore {
    /// Opens (creating if needed) the storage directory and loads every
    /// `<collection>.json` file found in it.
    pub async fn open(base_dir: impl AsRef<Path>) -> Result<Self, VectorStoreError> {
        let base_dir = base_dir.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&base_dir)
            .await
            .map_err(into_persistence_error)?;

        let collections = DashMap::new();
        let mut entries = tokio::fs::read_dir(&base_dir)
            .await
            .map_err(into_persistence_error)?;
        while let Some(entry) = entries.next_entry().await.map_err(into_persistence_error)? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                let bytes = tokio::fs::read(&path).await.map_err(into_persistence_error)?;
                let collection: Collection = serde_json::from_slice(&bytes).map_err(|e| {
                    VectorStoreError::Persistence(format!("{}: {e}", path.display()))
                })?;
                collections.insert(collection.config.name.clone(), collection);
            }
        }

        Ok(Self {
            base_dir,
            collections,
        })
    }

    fn collection_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(format!("{name}.json"))
    }

    async fn flush(&self, name: &str) -> Result<(), VectorStoreError> {
        let serialized = {
            let entry = self
                .collections
                .get(name)
                .ok_or_else(|| VectorStoreError::CollectionNotFound(name.to_string()))?;
            serde_json::to_vec(entry.value())
                .map_err(|e| VectorStoreError::Persistence(e.to_string()))?
        };
        tokio::fs::write(self.collection_path(name), serialized)
            .await
            .map_err(into_persistence_error)
    }
}

#[async_trait]
impl VectorStore for OnDiskVectorStore {
    async fn create_collection(&self, config: CollectionConfig) -> Result<(), VectorStoreError> {
        config.validate()?;
        let name = config.name.clone();
        if self.collections.remove(&name).is_some() {
            tracing::debug!(collection = %name, "dropped existing collection");
        }
        match tokio::fs::remove_file(self.collection_path(&name)).await {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(into_persistence_error(e)),
        }
        self.collections.insert(name.clone(), Collection::new(config));
        self.flush(&name).await
    }

    async fn insert(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<(), VectorStoreError> {
        {
            let mut entry = self
                .collections
                .get_mut(collection)
                .ok_or_else(|| VectorStoreError::CollectionNotFound(collection.to_string()))?;
            entry.upsert(document)?;
        }
        self.flush(collection).await
    }

    async fn query(
        &self,
        collection: &str,
        vector: &[f64],
        k: usize,
    ) -> Result<Vec<SearchMatch>, VectorStoreError> {
        let entry = self
            .collections
            .get(collection)
            .ok_or_else(|| VectorStoreError::CollectionNotFound(collection.to_string()))?;
        entry.search(vector, k)
    }

    async fn count(&self, collection: &str) -> Result<usize, VectorStoreError> {
        let entry = self
            .collections
            .get(collection)
            .ok_or_else(|| VectorStoreError::CollectionNotFound(collection.to_string()))?;
        Ok(entry.records.len())
    }
}

fn into_persistence_error(e: io::Error) -> VectorStoreError {
    VectorStoreError::Persistence(e.to_string())
}
