//! Vitrine HTTP server.
//!
//! Reads configuration from the environment, connects the document store
//! once, and serves the portfolio API until interrupted:
//!
//! ```text
//! DATABASE_URL=postgres://app@localhost/postgres DATABASE_NAME=portfolio vitrine
//! ```
//!
//! The store variables are optional; without them the server still answers
//! every route, and contact submissions fail with a storage error.

use std::sync::Arc;
use tracing::info;
use vitrine::config::{self, AppConfig};
use vitrine::document_store::{DocumentStoreAdapter, adapters::postgres::PostgresConnector};
use vitrine::http::AppState;
use vitrine::server;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    server::init_tracing(config::flag_from_env(config::LOG_JSON)?)?;
    let app_config = AppConfig::from_env()?;

    let store = Arc::new(DocumentStoreAdapter::new(
        app_config.store.clone(),
        Arc::new(PostgresConnector::new()),
    ));
    let handle = store.connect();
    info!(?handle, port = app_config.port, "starting vitrine");

    server::serve(app_config.port, AppState::new(store)).await?;
    Ok(())
}
