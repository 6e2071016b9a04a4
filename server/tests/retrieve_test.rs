//! Handler tests for the retrieval endpoint.
//!
//! The router is exercised directly with `oneshot`, with a deterministic
//! stub embedding model and the in-memory store standing in for the network
//! and the disk.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, HeaderValue, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use shelfseek::embeddings::{model::EmbeddingModel, EmbedderError};
use shelfseek::loader::{CorpusEntry, CorpusLoader};
use shelfseek::retrieval::RetrievalService;
use shelfseek::vector_store::in_memory::InMemoryVectorStore;
use shelfseek::vector_store::{CollectionConfig, VectorStore};

const ORIGIN: &str = "http://localhost:4200";

struct StubEmbedder;

#[async_trait]
impl EmbeddingModel for StubEmbedder {
    async fn embed(&self, data: &str) -> Result<Vec<f64>, EmbedderError> {
        if data.trim().is_empty() {
            return Err(EmbedderError::EmptyInput);
        }
        let lower = data.to_lowercase();
        let tech = ["apple", "jobs", "ceo"]
            .iter()
            .filter(|w| lower.contains(**w))
            .count() as f64;
        let phil = ["stoic", "emperor", "philosophy"]
            .iter()
            .filter(|w| lower.contains(**w))
            .count() as f64;
        Ok(vec![tech, phil])
    }

    fn dimensions(&self) -> usize {
        2
    }
}

async fn populated_app() -> axum::Router {
    let store = Arc::new(InMemoryVectorStore::new());
    let loader = CorpusLoader::new(Arc::clone(&store), StubEmbedder, "books");
    loader
        .load(&[
            CorpusEntry::new("3", "Steve Jobs, the Apple CEO."),
            CorpusEntry::new("4", "Meditations, Stoic philosophy of an emperor."),
        ])
        .await
        .unwrap();

    let service = RetrievalService::new(store, StubEmbedder, "books");
    shelfseek_server::router(service, HeaderValue::from_static(ORIGIN))
}

fn retrieve_request(query: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/retrieve")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ORIGIN, ORIGIN)
        .body(Body::from(
            serde_json::to_string(&json!({ "query": query })).unwrap(),
        ))
        .unwrap()
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn retrieve_returns_the_closest_document() {
    let app = populated_app().await;

    let response = app
        .oneshot(retrieve_request("Who was the CEO of Apple?"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["contexts"].as_array().unwrap().len(), 1);
    assert_eq!(body["contexts"][0], "Steve Jobs, the Apple CEO.");
    assert_eq!(body["metadata"][0]["idx"], "3");
}

#[tokio::test]
async fn empty_query_is_a_bad_request() {
    let app = populated_app().await;

    let response = app.oneshot(retrieve_request("  ")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "Empty query");
}

#[tokio::test]
async fn empty_collection_is_not_an_error() {
    let store = InMemoryVectorStore::new();
    store
        .create_collection(CollectionConfig::new("books", 2))
        .await
        .unwrap();
    let service = RetrievalService::new(store, StubEmbedder, "books");
    let app = shelfseek_server::router(service, HeaderValue::from_static(ORIGIN));

    let response = app
        .oneshot(retrieve_request("anything at all"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["contexts"], json!([]));
    assert_eq!(body["metadata"], json!([]));
}

#[tokio::test]
async fn configured_origin_is_allowed() {
    let app = populated_app().await;

    let response = app
        .oneshot(retrieve_request("Who was the CEO of Apple?"))
        .await
        .unwrap();
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some(ORIGIN)
    );
}

#[tokio::test]
async fn other_origins_are_not_allowed() {
    let app = populated_app().await;

    let mut request = retrieve_request("Who was the CEO of Apple?");
    request.headers_mut().insert(
        header::ORIGIN,
        HeaderValue::from_static("http://evil.example"),
    );

    let response = app.oneshot(request).await.unwrap();
    // the handler still runs; the browser is denied by the missing header
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
