//! HTTP surface for the shelfseek retrieval engine.
//!
//! One route, `POST /retrieve`, answering `{"query": ...}` with the closest
//! stored document's text and metadata. Cross-origin access is allowed for
//! exactly one configured front-end origin.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use shelfseek::config::Config;
use shelfseek::document::Metadata;
use shelfseek::embeddings::model::EmbeddingModel;
use shelfseek::providers::embeddings::OpenAIEmbeddingModel;
use shelfseek::retrieval::{RetrievalError, RetrievalService};
use shelfseek::vector_store::on_disk::OnDiskVectorStore;
use shelfseek::vector_store::VectorStore;

mod config;

pub use config::ServerConfig;

#[derive(Debug, Deserialize)]
pub struct RetrieveRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct RetrieveResponse {
    pub contexts: Vec<String>,
    pub metadata: Vec<Metadata>,
}

struct ApiError(RetrievalError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            RetrievalError::EmptyQuery => StatusCode::BAD_REQUEST,
            RetrievalError::Embedder(_) => StatusCode::BAD_GATEWAY,
            RetrievalError::VectorStore(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!("retrieve failed: {}", self.0);
        }
        let body = Json(serde_json::json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

async fn retrieve<V, M>(
    State(service): State<Arc<RetrievalService<V, M>>>,
    Json(request): Json<RetrieveRequest>,
) -> Result<Json<RetrieveResponse>, ApiError>
where
    V: VectorStore + 'static,
    M: EmbeddingModel + 'static,
{
    let retrieved = service.retrieve(&request.query).await.map_err(ApiError)?;
    Ok(Json(RetrieveResponse {
        contexts: retrieved.contexts,
        metadata: retrieved.metadata,
    }))
}

/// Builds the application router around a retrieval service.
///
/// Generic over the store and model so tests can run fully in memory.
pub fn router<V, M>(service: RetrievalService<V, M>, allowed_origin: HeaderValue) -> Router
where
    V: VectorStore + 'static,
    M: EmbeddingModel + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/retrieve", post(retrieve::<V, M>))
        .with_state(Arc::new(service))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Reads configuration, opens the store, and serves until shutdown.
pub async fn run() -> eyre::Result<()> {
    let config = Config::from_env()?;
    let server_config = ServerConfig::from_env()?;

    let store = OnDiskVectorStore::open(&config.storage_path).await?;
    let model = OpenAIEmbeddingModel::from_config(&config);
    let service = RetrievalService::new(store, model, config.collection.clone());

    let app = router(service, server_config.allowed_origin.clone());

    let listener = tokio::net::TcpListener::bind(&server_config.bind_addr).await?;
    info!("serving on {}", listener.local_addr()?);
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to install Ctrl+C handler: {e}");
    }
}
