pub mod builtin;
pub mod files;

use thiserror::Error;
use tracing::info;

use crate::document::{Document, Metadata};
use crate::embeddings::{model::EmbeddingModel, EmbedderError};
use crate::vector_store::{CollectionConfig, VectorStore, VectorStoreError};

/// One (id, text) pair fed to the loader.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CorpusEntry {
    pub id: String,
    pub text: String,
}

impl CorpusEntry {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Invalid glob-pattern")]
    InvalidGlobPattern(#[from] glob::PatternError),
    #[error("No matching documents found")]
    NoMatchingDocuments,
    #[error("Failed to read `{path}`")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to recreate collection")]
    CollectionReset(#[from] VectorStoreError),
    #[error("Failed to embed document `{id}`")]
    EmbedFailed { id: String, source: EmbedderError },
    #[error("Failed to insert document `{id}`")]
    InsertFailed {
        id: String,
        source: VectorStoreError,
    },
}

/// Embeds an ordered corpus and writes it into a freshly recreated
/// collection.
///
/// The target collection is dropped and recreated on every run, so a reload
/// never leaves duplicates behind. The first document that fails to embed or
/// insert aborts the batch; its id is carried in the returned error.
pub struct CorpusLoader<V: VectorStore, M: EmbeddingModel> {
    vector_store: V,
    embedding_model: M,
    collection: String,
}

impl<V: VectorStore, M: EmbeddingModel> CorpusLoader<V, M> {
    pub fn new(vector_store: V, embedding_model: M, collection: impl Into<String>) -> Self {
        Self {
            vector_store,
            embedding_model,
            collection: collection.into(),
        }
    }

    /// Runs the batch and returns the number of documents loaded.
    pub async fn load(&self, entries: &[CorpusEntry]) -> Result<usize, LoaderError> {
        let config = CollectionConfig::new(
            self.collection.clone(),
            self.embedding_model.dimensions(),
        );
        self.vector_store.create_collection(config).await?;
        info!(collection = %self.collection, "recreated collection");

        for entry in entries {
            info!(id = %entry.id, "adding document");
            let embedding = self
                .embedding_model
                .embed(&entry.text)
                .await
                .map_err(|source| LoaderError::EmbedFailed {
                    id: entry.id.clone(),
                    source,
                })?;

            let mut metadata = Metadata::new();
            metadata.insert("idx".to_string(), serde_json::Value::from(entry.id.clone()));
            let document = Document::new(entry.id.clone(), entry.text.clone(), embedding)
                .with_metadata(metadata);

            self.vector_store
                .insert(&self.collection, document)
                .await
                .map_err(|source| LoaderError::InsertFailed {
                    id: entry.id.clone(),
                    source,
                })?;
        }

        Ok(entries.len())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::vector_store::in_memory::InMemoryVectorStore;

    struct FixedEmbedder;

    #[async_trait]
    impl EmbeddingModel for FixedEmbedder {
        async fn embed(&self, data: &str) -> Result<Vec<f64>, EmbedderError> {
            if data.is_empty() {
                return Err(EmbedderError::EmptyInput);
            }
            Ok(vec![data.len() as f64, 1.0])
        }

        fn dimensions(&self) -> usize {
            2
        }
    }

    fn sample_entries() -> Vec<CorpusEntry> {
        vec![
            CorpusEntry::new("3", "a biography"),
            CorpusEntry::new("4", "stoic reflections"),
        ]
    }

    #[tokio::test]
    async fn load_fills_the_collection() {
        let store = Arc::new(InMemoryVectorStore::new());
        let loader = CorpusLoader::new(Arc::clone(&store), FixedEmbedder, "books");

        let loaded = loader.load(&sample_entries()).await.unwrap();
        assert_eq!(loaded, 2);
        assert_eq!(store.count("books").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn reload_is_idempotent() {
        let store = Arc::new(InMemoryVectorStore::new());
        let loader = CorpusLoader::new(Arc::clone(&store), FixedEmbedder, "books");

        loader.load(&sample_entries()).await.unwrap();
        loader.load(&sample_entries()).await.unwrap();
        assert_eq!(store.count("books").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn metadata_duplicates_the_id() {
        let store = Arc::new(InMemoryVectorStore::new());
        let loader = CorpusLoader::new(Arc::clone(&store), FixedEmbedder, "books");
        loader.load(&sample_entries()).await.unwrap();

        let matches = store.query("books", &[11.0, 1.0], 1).await.unwrap();
        assert_eq!(
            matches[0].document.metadata.get("idx"),
            Some(&serde_json::Value::from(matches[0].document.id.clone()))
        );
    }

    #[tokio::test]
    async fn failing_document_aborts_and_is_named() {
        let store = Arc::new(InMemoryVectorStore::new());
        let loader = CorpusLoader::new(Arc::clone(&store), FixedEmbedder, "books");

        let entries = vec![
            CorpusEntry::new("3", "a biography"),
            CorpusEntry::new("4", ""),
            CorpusEntry::new("5", "never reached"),
        ];
        let err = loader.load(&entries).await.unwrap_err();
        match err {
            LoaderError::EmbedFailed { id, source } => {
                assert_eq!(id, "4");
                assert_eq!(source, EmbedderError::EmptyInput);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        // aborted after the first document; the next run recreates anyway
        assert_eq!(store.count("books").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn load_replaces_a_stale_collection() {
        let store = Arc::new(InMemoryVectorStore::new());
        store
            .create_collection(CollectionConfig::new("books", 7))
            .await
            .unwrap();

        let loader = CorpusLoader::new(Arc::clone(&store), FixedEmbedder, "books");
        loader.load(&sample_entries()).await.unwrap();

        // dimension now follows the embedder, not the stale config
        assert!(store.query("books", &[1.0, 0.0], 1).await.is_ok());
    }
}
