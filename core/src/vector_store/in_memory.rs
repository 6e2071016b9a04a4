use async_trait::async_trait;
use dashmap::DashMap;

use super::{Collection, CollectionConfig, SearchMatch, VectorStore, VectorStoreError};
use crate::document::Document;

/// Brute-force store keeping every collection in process memory.
///
/// Collections are sharded by dashmap, so concurrent readers never
/// serialize against each other.
#[derive(Debug, Default)]
pub struct InMemoryVectorStore {
    collections: DashMap<String, Collection>,
}

impl InMemoryVectorStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn create_collection(&self, config: CollectionConfig) -> Result<(), VectorStoreError> {
        config.validate()?;
        self.collections
            .insert(config.name.clone(), Collection::new(config));
        Ok(())
    }

    async fn insert(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<(), VectorStoreError> {
        let mut entry = self
            .collections
            .get_mut(collection)
            .ok_or_else(|| VectorStoreError::CollectionNotFound(collection.to_string()))?;
        entry.upsert(document)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector_store::SimilarityMetric;

    async fn store_with_collection(dimension: usize) -> InMemoryVectorStore {
        let store = InMemoryVectorStore::new();
        store
            .create_collection(CollectionConfig::new("books", dimension))
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn query_orders_by_similarity() {
        let store = store_with_collection(3).await;
        store
            .insert("books", Document::new("a", "alpha", vec![1.0, 0.0, 0.0]))
            .await
            .unwrap();
        store
            .insert("books", Document::new("b", "beta", vec![0.0, 1.0, 0.0]))
            .await
            .unwrap();
        store
            .insert("books", Document::new("c", "gamma", vec![0.9, 0.1, 0.0]))
            .await
            .unwrap();

        let matches = store.query("books", &[1.0, 0.0, 0.0], 2).await.unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].document.id, "a");
        assert_eq!(matches[1].document.id, "c");
        assert!(matches[0].score >= matches[1].score);
    }

    #[tokio::test]
    async fn equal_scores_keep_insertion_order() {
        let store = store_with_collection(2).await;
        // same direction, same cosine score
        store
            .insert("books", Document::new("first", "f", vec![1.0, 0.0]))
            .await
            .unwrap();
        store
            .insert("books", Document::new("second", "s", vec![2.0, 0.0]))
            .await
            .unwrap();

        for _ in 0..3 {
            let matches = store.query("books", &[1.0, 0.0], 5).await.unwrap();
            let ids: Vec<&str> = matches.iter().map(|m| m.document.id.as_str()).collect();
            assert_eq!(ids, vec!["first", "second"]);
        }
    }

    #[tokio::test]
    async fn zero_norm_record_ranks_last() {
        let store = store_with_collection(2).await;
        store
            .insert("books", Document::new("null", "n", vec![0.0, 0.0]))
            .await
            .unwrap();
        store
            .insert("books", Document::new("far", "f", vec![-1.0, -1.0]))
            .await
            .unwrap();

        let matches = store.query("books", &[1.0, 1.0], 2).await.unwrap();
        assert_eq!(matches[0].document.id, "far");
        assert_eq!(matches[1].document.id, "null");
        assert_eq!(matches[1].score, f64::NEG_INFINITY);
    }

    #[tokio::test]
    async fn k_larger_than_collection_returns_everything() {
        let store = store_with_collection(2).await;
        store
            .insert("books", Document::new("a", "a", vec![1.0, 0.0]))
            .await
            .unwrap();
        store
            .insert("books", Document::new("b", "b", vec![0.0, 1.0]))
            .await
            .unwrap();

        let matches = store.query("books", &[1.0, 0.0], 5).await.unwrap();
        assert_eq!(matches.len(), 2);
    }

    #[tokio::test]
    async fn insert_rejects_wrong_dimension() {
        let store = store_with_collection(3).await;
        let result = store
            .insert("books", Document::new("a", "a", vec![1.0, 0.0]))
            .await;
        assert_eq!(
            result.unwrap_err(),
            VectorStoreError::DimensionMismatch { expected: 3, got: 2 }
        );
    }

    #[tokio::test]
    async fn query_rejects_wrong_dimension() {
        let store = store_with_collection(3).await;
        let result = store.query("books", &[1.0], 1).await;
        assert_eq!(
            result.unwrap_err(),
            VectorStoreError::DimensionMismatch { expected: 3, got: 1 }
        );
    }

    #[tokio::test]
    async fn duplicate_id_overwrites_in_place() {
        let store = store_with_collection(2).await;
        store
            .insert("books", Document::new("a", "old", vec![1.0, 0.0]))
            .await
            .unwrap();
        store
            .insert("books", Document::new("b", "b", vec![0.0, 1.0]))
            .await
            .unwrap();
        store
            .insert("books", Document::new("a", "new", vec![0.0, 1.0]))
            .await
            .unwrap();

        assert_eq!(store.count("books").await.unwrap(), 2);
        let matches = store.query("books", &[0.0, 1.0], 2).await.unwrap();
        // both score 1.0 now; "a" kept its original position
        assert_eq!(matches[0].document.id, "a");
        assert_eq!(matches[0].document.text, "new");
    }

    #[tokio::test]
    async fn create_collection_drops_existing_records() {
        let store = store_with_collection(2).await;
        store
            .insert("books", Document::new("a", "a", vec![1.0, 0.0]))
            .await
            .unwrap();

        store
            .create_collection(CollectionConfig::new("books", 2))
            .await
            .unwrap();
        assert_eq!(store.count("books").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn dot_product_metric_ranks_by_magnitude() {
        let store = InMemoryVectorStore::new();
        store
            .create_collection(
                CollectionConfig::new("books", 2).with_metric(SimilarityMetric::DotProduct),
            )
            .await
            .unwrap();
        store
            .insert("books", Document::new("short", "s", vec![1.0, 0.0]))
            .await
            .unwrap();
        store
            .insert("books", Document::new("long", "l", vec![3.0, 0.0]))
            .await
            .unwrap();

        // same direction; dot product prefers the larger vector
        let matches = store.query("books", &[1.0, 0.0], 2).await.unwrap();
        assert_eq!(matches[0].document.id, "long");
        assert_eq!(matches[0].score, 3.0);
    }

    #[tokio::test]
    async fn missing_collection_is_reported() {
        let store = InMemoryVectorStore::new();
        let result = store.query("nope", &[1.0], 1).await;
        assert_eq!(
            result.unwrap_err(),
            VectorStoreError::CollectionNotFound("nope".to_string())
        );
    }

    #[tokio::test]
    async fn zero_dimension_collection_is_rejected() {
        let store = InMemoryVectorStore::new();
        let result = store.create_collection(CollectionConfig::new("books", 0)).await;
        assert!(matches!(result, Err(VectorStoreError::InvalidConfig(_))));
    }
}
