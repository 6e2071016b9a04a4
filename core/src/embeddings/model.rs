use std::sync::Arc;

use crate::embeddings::EmbedderError;
use async_trait::async_trait;

#[async_trait]
pub trait EmbeddingModel: Send + Sync {
    /// Embed a single piece of text into a vector of the model's fixed size.
    async fn embed(&self, data: &str) -> Result<Vec<f64>, EmbedderError>;

    /// Output dimensionality of the model, fixed for its lifetime.
    fn dimensions(&self) -> usize;
}

#[async_trait]
impl<T: EmbeddingModel + ?Sized> EmbeddingModel for Arc<T> {
    async fn embed(&self, data: &str) -> Result<Vec<f64>, EmbedderError> {
        (**self).embed(data).await
    }

    fn dimensions(&self) -> usize {
        (**self).dimensions()
    }
}
