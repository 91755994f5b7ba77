//! Shared helpers for router-level integration tests.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::{Body, Bytes},
    http::{HeaderMap, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;
use vitrine::document_store::{
    DocumentStoreAdapter,
    adapters::{memory::InMemoryDocumentStore, postgres::PostgresConnector},
    ports::StoreSettings,
};
use vitrine::http::{AppState, router};

/// Logical database name used by store-backed fixtures.
pub const DATABASE: &str = "portfolio";

/// A response collected into memory.
pub struct Collected {
    /// Response status.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Raw body bytes.
    pub body: Bytes,
}

impl Collected {
    /// Parses the body as JSON.
    pub fn json(&self) -> Result<serde_json::Value, eyre::Report> {
        serde_json::from_slice(&self.body).map_err(|err| eyre::eyre!("body is not JSON: {err}"))
    }
}

/// Router over a working in-memory store, with the store for inspection.
pub fn working_router() -> (Router, InMemoryDocumentStore) {
    let store = InMemoryDocumentStore::new();
    let adapter = DocumentStoreAdapter::from_store(Arc::new(store.clone()), DATABASE);
    (router(AppState::new(Arc::new(adapter))), store)
}

/// Router whose store handle is absent.
pub fn absent_router() -> Router {
    let adapter = DocumentStoreAdapter::disconnected(StoreSettings::unconfigured());
    router(AppState::new(Arc::new(adapter)))
}

/// Router with a `PostgreSQL` handle pointing at a port nothing listens on.
pub fn unreachable_router() -> Router {
    let settings = StoreSettings {
        url: Some("postgres://vitrine@127.0.0.1:1/postgres".to_owned()),
        database: Some(DATABASE.to_owned()),
        pool_size: 1,
        connect_timeout: Duration::from_millis(250),
    };
    let adapter = DocumentStoreAdapter::new(settings, Arc::new(PostgresConnector::new()));
    router(AppState::new(Arc::new(adapter)))
}

/// Builds a `GET` request.
pub fn get(uri: &str) -> Result<Request<Body>, eyre::Report> {
    Request::get(uri)
        .body(Body::empty())
        .map_err(|err| eyre::eyre!("invalid request: {err}"))
}

/// Builds a JSON `POST` request.
pub fn post_json(uri: &str, body: impl Into<Body>) -> Result<Request<Body>, eyre::Report> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .map_err(|err| eyre::eyre!("invalid request: {err}"))
}

/// Sends one request through the router and collects the response.
pub async fn send(app: Router, request: Request<Body>) -> Result<Collected, eyre::Report> {
    let response = app
        .oneshot(request)
        .await
        .map_err(|err| eyre::eyre!("router failed: {err}"))?;
    let status = response.status();
    let headers = response.headers().clone();
    let body = response
        .into_body()
        .collect()
        .await
        .map_err(|err| eyre::eyre!("body failed: {err}"))?
        .to_bytes();
    Ok(Collected {
        status,
        headers,
        body,
    })
}
