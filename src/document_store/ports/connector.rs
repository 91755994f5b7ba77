//! Connector port that turns configuration into a live store handle.

use super::DocumentStore;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Default number of pooled connections.
pub const DEFAULT_POOL_SIZE: u32 = 8;

/// Default time to wait for a pooled connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection settings for the document store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    /// Connection string, if configured.
    pub url: Option<String>,
    /// Logical database name, if configured.
    pub database: Option<String>,
    /// Maximum number of pooled connections.
    pub pool_size: u32,
    /// Time to wait for a pooled connection before failing.
    pub connect_timeout: Duration,
}

impl StoreSettings {
    /// Creates settings with default pool parameters.
    #[must_use]
    pub const fn new(url: Option<String>, database: Option<String>) -> Self {
        Self {
            url,
            database,
            pool_size: DEFAULT_POOL_SIZE,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    /// Returns settings with neither a URL nor a database name.
    #[must_use]
    pub const fn unconfigured() -> Self {
        Self::new(None, None)
    }

    /// Returns whether the connection string is set.
    #[must_use]
    pub const fn has_url(&self) -> bool {
        self.url.is_some()
    }

    /// Returns whether the database name is set.
    #[must_use]
    pub const fn has_database(&self) -> bool {
        self.database.is_some()
    }
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self::unconfigured()
    }
}

/// Builds document store handles from settings.
pub trait StoreConnector: Send + Sync {
    /// Establishes a store handle.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectError`] when the settings are incomplete or the
    /// handle cannot be created.
    fn connect(&self, settings: &StoreSettings) -> Result<Arc<dyn DocumentStore>, ConnectError>;
}

/// Errors returned while establishing a store handle.
#[derive(Debug, Clone, Error)]
pub enum ConnectError {
    /// A required setting is missing.
    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    /// The connection string is not usable by this connector.
    #[error("unsupported connection string: {0}")]
    InvalidUrl(String),

    /// The client could not be created.
    #[error("failed to create store client: {0}")]
    Client(Arc<dyn std::error::Error + Send + Sync>),
}

impl ConnectError {
    /// Wraps a client construction failure.
    pub fn client(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Client(Arc::new(err))
    }
}
