//! Builds `PostgreSQL` document store handles from settings.

use super::repository::PostgresDocumentStore;
use crate::document_store::ports::{ConnectError, DocumentStore, StoreConnector, StoreSettings};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use std::sync::Arc;

/// Connector producing [`PostgresDocumentStore`] handles.
///
/// The pool is built without opening a connection, so an unreachable server
/// yields a handle whose operations fail rather than a connect error.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresConnector;

impl PostgresConnector {
    /// Creates a connector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl StoreConnector for PostgresConnector {
    fn connect(&self, settings: &StoreSettings) -> Result<Arc<dyn DocumentStore>, ConnectError> {
        let url = settings
            .url
            .as_deref()
            .ok_or(ConnectError::NotConfigured("DATABASE_URL"))?;
        let database = settings
            .database
            .as_deref()
            .ok_or(ConnectError::NotConfigured("DATABASE_NAME"))?;

        let scheme = url.split_once("://").map_or("", |(scheme, _)| scheme);
        if !matches!(scheme, "postgres" | "postgresql") {
            return Err(ConnectError::InvalidUrl(format!(
                "expected a postgres:// or postgresql:// URL, got scheme '{scheme}'"
            )));
        }

        let manager = ConnectionManager::<PgConnection>::new(with_database(url, database));
        let pool = Pool::builder()
            .max_size(settings.pool_size)
            .min_idle(Some(0))
            .connection_timeout(settings.connect_timeout)
            .build_unchecked(manager);

        Ok(Arc::new(PostgresDocumentStore::new(pool)))
    }
}

/// Appends the logical database name as the `dbname` connection parameter.
///
/// libpq lets query parameters override the path component, so the name
/// wins over any database already present in the URL.
#[must_use]
pub fn with_database(url: &str, database: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}dbname={}", encode_component(database))
}

fn encode_component(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    encoded
}
