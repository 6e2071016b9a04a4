pub mod in_memory;
pub mod on_disk;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::Document;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VectorStoreError {
    #[error("Collection `{0}` not found")]
    CollectionNotFound(String),
    #[error("Invalid collection config: {0}")]
    InvalidConfig(String),
    #[error("Dimension mismatch: collection holds {expected}-dimensional vectors, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("Persistence error: {0}")]
    Persistence(String),
}

/// Similarity metric of a collection. Both variants score "higher is more
/// similar", so query results order the same way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimilarityMetric {
    #[default]
    Cosine,
    DotProduct,
}

impl SimilarityMetric {
    fn score(self, a: &[f64], b: &[f64]) -> f64 {
        match self {
            SimilarityMetric::Cosine => cosine_similarity(a, b),
            SimilarityMetric::DotProduct => dot(a, b),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionConfig {
    pub name: String,
    pub dimension: usize,
    pub metric: SimilarityMetric,
}

impl CollectionConfig {
    pub fn new(name: impl Into<String>, dimension: usize) -> Self {
        Self {
            name: name.into(),
            dimension,
            metric: SimilarityMetric::default(),
        }
    }

    #[must_use]
    pub fn with_metric(mut self, metric: SimilarityMetric) -> Self {
        self.metric = metric;
        self
    }

    fn validate(&self) -> Result<(), VectorStoreError> {
        if self.dimension == 0 {
            return Err(VectorStoreError::InvalidConfig(
                "dimension must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// One query hit: the stored document and its similarity score.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchMatch {
    pub document: Document,
    pub score: f64,
}

#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Creates a fresh, empty collection. An existing collection with the
    /// same name is dropped first, records included.
    async fn create_collection(&self, config: CollectionConfig) -> Result<(), VectorStoreError>;

    /// Adds one record. A record with the same id is overwritten in place
    /// (last write wins, original insertion position kept).
    async fn insert(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<(), VectorStoreError>;

    /// Returns up to `k` records ordered descending by similarity to
    /// `vector`, ties broken by insertion order. A collection with fewer
    /// than `k` records returns all of them.
    async fn query(
        &self,
        collection: &str,
        vector: &[f64],
        k: usize,
    ) -> Result<Vec<SearchMatch>, VectorStoreError>;

    /// Number of records in the collection.
    async fn count(&self, collection: &str) -> Result<usize, VectorStoreError>;
}

#[async_trait]
impl<T: VectorStore + ?Sized> VectorStore for Arc<T> {
    async fn create_collection(&self, config: CollectionConfig) -> Result<(), VectorStoreError> {
        (**self).create_collection(config).await
    }

    async fn insert(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<(), VectorStoreError> {
        (**self).insert(collection, document).await
    }

    async fn query(
        &self,
        collection: &str,
        vector: &[f64],
        k: usize,
    ) -> Result<Vec<SearchMatch>, VectorStoreError> {
        (**self).query(collection, vector, k).await
    }

    async fn count(&self, collection: &str) -> Result<usize, VectorStoreError> {
        (**self).count(collection).await
    }
}

/// Insertion-ordered record set shared by the store implementations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Collection {
    pub(crate) config: CollectionConfig,
    pub(crate) records: Vec<Document>,
}

impl Collection {
    pub(crate) fn new(config: CollectionConfig) -> Self {
        Self {
            config,
            records: Vec::new(),
        }
    }

    fn check_dimension(&self, got: usize) -> Result<(), VectorStoreError> {
        if got != self.config.dimension {
            return Err(VectorStoreError::DimensionMismatch {
                expected: self.config.dimension,
                got,
            });
        }
        Ok(())
    }

    pub(crate) fn upsert(&mut self, document: Document) -> Result<(), VectorStoreError> {
        self.check_dimension(document.embedding.len())?;
        match self.records.iter_mut().find(|r| r.id == document.id) {
            Some(existing) => *existing = document,
            None => self.records.push(document),
        }
        Ok(())
    }

    pub(crate) fn search(
        &self,
        vector: &[f64],
        k: usize,
    ) -> Result<Vec<SearchMatch>, VectorStoreError> {
        self.check_dimension(vector.len())?;
        let mut results = self
            .records
            .iter()
            .map(|record| SearchMatch {
                score: self.config.metric.score(vector, &record.embedding),
                document: record.clone(),
            })
            .collect::<Vec<_>>();
        // stable sort: equal scores keep insertion order
        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        results.truncate(k);
        Ok(results)
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Cosine similarity of two vectors: `dot(a,b) / (norm(a) * norm(b))`.
///
/// A zero-norm operand has no defined angle; it scores `NEG_INFINITY` so the
/// record ranks last instead of raising a floating-point error.
#[must_use]
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let norm_a = dot(a, a).sqrt();
    let norm_b = dot(b, b).sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return f64::NEG_INFINITY;
    }
    dot(a, b) / (norm_a * norm_b)
}
