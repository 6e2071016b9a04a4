use std::path::PathBuf;

use thiserror::Error;

use crate::providers::embeddings::{DEFAULT_API_URL, DEFAULT_MODEL};

pub const DEFAULT_STORAGE_PATH: &str = "./vector_db";
pub const DEFAULT_COLLECTION: &str = "book_summaries";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing environment variable `{0}`")]
    MissingVar(&'static str),
    #[error("Invalid value for `{var}`: {message}")]
    Invalid {
        var: &'static str,
        message: String,
    },
}

/// Process configuration, read once at startup and treated as immutable for
/// the process lifetime.
#[derive(Debug, Clone)]
pub struct Config {
    /// Credential for the embedding provider (`OPENAI_API_KEY`).
    pub api_key: String,
    /// Embeddings endpoint (`SHELFSEEK_API_URL`).
    pub api_url: String,
    /// Embedding model name (`SHELFSEEK_EMBEDDING_MODEL`).
    pub embedding_model: String,
    /// Dimension override for models the crate does not know
    /// (`SHELFSEEK_EMBEDDING_DIMENSIONS`).
    pub embedding_dimensions: Option<usize>,
    /// Directory backing the on-disk vector store
    /// (`SHELFSEEK_STORAGE_PATH`).
    pub storage_path: PathBuf,
    /// Collection holding the corpus (`SHELFSEEK_COLLECTION`).
    pub collection: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| ConfigError::MissingVar("OPENAI_API_KEY"))?;

        let embedding_dimensions = match std::env::var("SHELFSEEK_EMBEDDING_DIMENSIONS") {
            Ok(value) => Some(value.parse().map_err(|_| ConfigError::Invalid {
                var: "SHELFSEEK_EMBEDDING_DIMENSIONS",
                message: format!("expected a positive integer, got `{value}`"),
            })?),
            Err(_) => None,
        };

        Ok(Self {
            api_key,
            api_url: var_or("SHELFSEEK_API_URL", DEFAULT_API_URL),
            embedding_model: var_or("SHELFSEEK_EMBEDDING_MODEL", DEFAULT_MODEL),
            embedding_dimensions,
            storage_path: PathBuf::from(var_or("SHELFSEEK_STORAGE_PATH", DEFAULT_STORAGE_PATH)),
            collection: var_or("SHELFSEEK_COLLECTION", DEFAULT_COLLECTION),
        })
    }
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
