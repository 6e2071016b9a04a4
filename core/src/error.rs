use crate::{
    config::ConfigError, embeddings::EmbedderError, loader::LoaderError,
    retrieval::RetrievalError, vector_store::VectorStoreError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Config error")]
    Config(#[from] ConfigError),
    #[error("Embedder error")]
    Embedder(#[from] EmbedderError),
    #[error("Loader error")]
    Loader(#[from] LoaderError),
    #[error("Retrieval error")]
    Retrieval(#[from] RetrievalError),
    #[error("VectorStore error")]
    VectorStore(#[from] VectorStoreError),
}
