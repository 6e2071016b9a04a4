//! Populates the vector store with the built-in book-summary corpus.
//!
//! The target collection is recreated from scratch on every run, so the
//! command is safe to rerun. A failing document aborts the batch; its id is
//! part of the reported error chain and the process exits nonzero.

use tracing::info;
use tracing_subscriber::EnvFilter;

use shelfseek::config::Config;
use shelfseek::loader::{builtin, CorpusLoader};
use shelfseek::providers::embeddings::OpenAIEmbeddingModel;
use shelfseek::vector_store::on_disk::OnDiskVectorStore;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let store = OnDiskVectorStore::open(&config.storage_path).await?;
    let model = OpenAIEmbeddingModel::from_config(&config);

    let loader = CorpusLoader::new(store, model, config.collection.clone());
    let loaded = loader.load(&builtin::corpus()).await?;
    info!(
        "loaded {loaded} documents into `{}` at {}",
        config.collection,
        config.storage_path.display()
    );
    Ok(())
}
