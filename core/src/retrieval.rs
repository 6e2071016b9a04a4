use thiserror::Error;
use tracing::debug;

use crate::document::Metadata;
use crate::embeddings::{model::EmbeddingModel, EmbedderError};
use crate::vector_store::{VectorStore, VectorStoreError};

#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("Empty query")]
    EmptyQuery,
    #[error(transparent)]
    Embedder(#[from] EmbedderError),
    #[error(transparent)]
    VectorStore(#[from] VectorStoreError),
}

/// Documents and metadata matched for a query, in descending similarity
/// order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Retrieved {
    pub contexts: Vec<String>,
    pub metadata: Vec<Metadata>,
}

/// Answers natural-language queries against one collection.
///
/// Both collaborators are passed in at construction; there is no shared
/// process-wide client state, so tests can substitute a deterministic
/// embedding model and an in-memory store.
pub struct RetrievalService<V: VectorStore, M: EmbeddingModel> {
    vector_store: V,
    embedding_model: M,
    collection: String,
}

impl<V: VectorStore, M: EmbeddingModel> RetrievalService<V, M> {
    pub fn new(vector_store: V, embedding_model: M, collection: impl Into<String>) -> Self {
        Self {
            vector_store,
            embedding_model,
            collection: collection.into(),
        }
    }

    /// Returns the single closest document for `query`.
    ///
    /// An empty collection yields an empty [`Retrieved`]; "no match" is a
    /// valid outcome, not an error.
    pub async fn retrieve(&self, query: &str) -> Result<Retrieved, RetrievalError> {
        self.retrieve_top(query, 1).await
    }

    /// Like [`Self::retrieve`] with a caller-chosen result count.
    pub async fn retrieve_top(&self, query: &str, k: usize) -> Result<Retrieved, RetrievalError> {
        if query.trim().is_empty() {
            return Err(RetrievalError::EmptyQuery);
        }

        let embedding = self.embedding_model.embed(query).await?;
        let matches = self
            .vector_store
            .query(&self.collection, &embedding, k)
            .await?;
        debug!(collection = %self.collection, matches = matches.len(), "query answered");

        let mut retrieved = Retrieved::default();
        for m in matches {
            retrieved.contexts.push(m.document.text);
            retrieved.metadata.push(m.document.metadata);
        }
        Ok(retrieved)
    }
}
