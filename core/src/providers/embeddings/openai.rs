use crate::config::Config;
use crate::embeddings::{model::EmbeddingModel, EmbedderError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/embeddings";
pub const DEFAULT_MODEL: &str = "text-embedding-ada-002";

/// Embedding model backed by the OpenAI embeddings endpoint.
///
/// The output dimensionality is resolved from the model name for the known
/// OpenAI embedding models; other models need [`Self::with_dimensions`].
pub struct OpenAIEmbeddingModel {
    api_url: String,
    api_key: String,
    model: String,
    dimensions: usize,
    client: Client,
}

impl OpenAIEmbeddingModel {
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        let dimensions = known_dimensions(&model).unwrap_or(1536);
        Self {
            api_url,
            api_key,
            model,
            dimensions,
            client: Client::new(),
        }
    }

    /// Builds a model from process configuration, honoring the configured
    /// dimension override for model names the crate does not know about.
    pub fn from_config(config: &Config) -> Self {
        let mut model = Self::new(
            config.api_key.clone(),
            config.api_url.clone(),
            config.embedding_model.clone(),
        );
        if let Some(dimensions) = config.embedding_dimensions {
            model = model.with_dimensions(dimensions);
        }
        model
    }

    #[must_use]
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = dimensions;
        self
    }
}

fn known_dimensions(model: &str) -> Option<usize> {
    match model {
        "text-embedding-ada-002" | "text-embedding-3-small" => Some(1536),
        "text-embedding-3-large" => Some(3072),
        _ => None,
    }
}

#[derive(Deserialize)]
struct OpenAIEmbeddingResponse {
    pub data: Vec<OpenAIEmbeddingData>,
}

#[derive(Deserialize)]
struct OpenAIEmbeddingData {
    pub embedding: Vec<f64>,
}

#[async_trait]
impl EmbeddingModel for OpenAIEmbeddingModel {
    async fn embed(&self, data: &str) -> Result<Vec<f64>, EmbedderError> {
        if data.trim().is_empty() {
            return Err(EmbedderError::EmptyInput);
        }
        let request_body = json!({
                "input": data,
                "model": self.model,
        });
        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| EmbedderError::RequestError(e.to_string()))?;

        if response.status().is_success() {
            let response = response
                .json::<OpenAIEmbeddingResponse>()
                .await
                .map_err(|e| EmbedderError::ParseError(e.to_string()))?;

            Ok(response
                .data
                .into_iter()
                .flat_map(|d| d.embedding)
                .collect())
        } else {
            let status = response.status().as_u16();
            let error_message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            Err(EmbedderError::ProviderError(status, error_message))
        }
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_input_is_rejected_locally() {
        let model = OpenAIEmbeddingModel::new(
            "sk-test".to_string(),
            DEFAULT_API_URL.to_string(),
            DEFAULT_MODEL.to_string(),
        );

        let response = model.embed("  \n ").await;
        assert_eq!(response.unwrap_err(), EmbedderError::EmptyInput);
    }

    #[test]
    fn dimensions_follow_the_model_name() {
        let small = OpenAIEmbeddingModel::new(
            "sk-test".to_string(),
            DEFAULT_API_URL.to_string(),
            "text-embedding-3-small".to_string(),
        );
        assert_eq!(small.dimensions(), 1536);

        let large = OpenAIEmbeddingModel::new(
            "sk-test".to_string(),
            DEFAULT_API_URL.to_string(),
            "text-embedding-3-large".to_string(),
        );
        assert_eq!(large.dimensions(), 3072);

        let custom = OpenAIEmbeddingModel::new(
            "sk-test".to_string(),
            DEFAULT_API_URL.to_string(),
            "some-finetune".to_string(),
        )
        .with_dimensions(256);
        assert_eq!(custom.dimensions(), 256);
    }

    #[tokio::test]
    #[ignore]
    async fn simple_openai_embed_request() {
        let api_key = std::env::var("OPENAI_API_KEY").unwrap().to_string();
        let api_url = DEFAULT_API_URL.to_string();
        let model = "text-embedding-3-small".to_string();

        let openai_embedding_model = OpenAIEmbeddingModel::new(api_key, api_url, model);

        let response = openai_embedding_model.embed("test").await;

        assert!(response.is_ok());
    }
}
