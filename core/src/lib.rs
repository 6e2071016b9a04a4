//! # Shelfseek - Core API Documentation
//!
//! Shelfseek is a small semantic retrieval engine: it embeds text through a
//! pluggable provider, keeps the vectors in a pluggable store, and answers a
//! natural-language query with the closest stored document under cosine
//! similarity.
//!
//! ## Components
//!
//! - **Embedding models**: convert text into fixed-size vectors
//!   ([`embeddings::model::EmbeddingModel`], with an OpenAI implementation in
//!   [`providers::embeddings`])
//! - **Vector stores**: hold `(id, vector, text, metadata)` records and answer
//!   nearest-neighbor queries ([`vector_store::VectorStore`], in-memory and
//!   on-disk implementations)
//! - **Corpus loader**: batch-embeds a document set into a freshly recreated
//!   collection ([`loader::CorpusLoader`])
//! - **Retrieval service**: embeds a query and returns the matched document
//!   text and metadata ([`retrieval::RetrievalService`])
//!
//! Every component is an explicitly constructed value; there is no global
//! client state, so tests can swap in a deterministic embedding model and the
//! in-memory store.
//!
//! ## Populating and querying
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use shelfseek::config::Config;
//! use shelfseek::loader::{builtin, CorpusLoader};
//! use shelfseek::providers::embeddings::OpenAIEmbeddingModel;
//! use shelfseek::retrieval::RetrievalService;
//! use shelfseek::vector_store::on_disk::OnDiskVectorStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), shelfseek::error::Error> {
//!     let config = Config::from_env()?;
//!     let store = Arc::new(OnDiskVectorStore::open(&config.storage_path).await?);
//!     let model = Arc::new(OpenAIEmbeddingModel::from_config(&config));
//!
//!     let loader = CorpusLoader::new(
//!         Arc::clone(&store),
//!         Arc::clone(&model),
//!         config.collection.clone(),
//!     );
//!     loader.load(&builtin::corpus()).await?;
//!
//!     let service = RetrievalService::new(store, model, config.collection.clone());
//!     let retrieved = service.retrieve("Who was the CEO of Apple?").await?;
//!     println!("{:?}", retrieved.contexts);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature flags
//!
//! Name | Description | Default?
//! ---|---|---
//! `pdf` | enables the file corpus source to parse PDFs | No

/// Process configuration, read once from the environment
pub mod config;

/// Document processing and representation utilities
///
/// Provides the stored record type shared by loaders, stores and the
/// retrieval service.
pub mod document;

/// Text embeddings support
pub mod embeddings;

/// Error types for all library operations
pub mod error;

/// Corpus population utilities
pub mod loader;

/// Builtin embedding model providers
pub mod providers;

/// Query orchestration: embed the query, search the store, return matches
pub mod retrieval;

/// Vector storage and retrieval
pub mod vector_store;
