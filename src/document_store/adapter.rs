//! Process-wide document store adapter.
//!
//! [`DocumentStoreAdapter`] owns the single connection handle. The handle is
//! assigned once, by [`DocumentStoreAdapter::connect`] or by the first
//! operation that needs it, and is only read afterwards. Request handlers
//! share the adapter through an `Arc` and never replace the handle.

use crate::document_store::{
    domain::{CollectionName, DocumentId, NewDocument, StoredDocument},
    ports::{
        ConnectError, DocumentStore, StorageError, StorageResult, StoreConnector, StoreSettings,
    },
};
use crate::text::truncate_chars;
use mockable::{Clock, DefaultClock};
use serde::Serialize;
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info, warn};

/// Maximum number of collection names reported by
/// [`DocumentStoreAdapter::introspect`].
pub const INTROSPECTION_LIMIT: usize = 10;

/// Maximum length of an introspection failure message.
const INTROSPECTION_MESSAGE_LIMIT: usize = 50;

/// Whether a connection handle is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleState {
    /// A handle was established and is cached.
    Present,
    /// No handle is available; writes fail with [`StorageError::Unavailable`].
    Absent,
}

/// Outcome of a best-effort metadata query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Introspection {
    /// No handle is present, so nothing was queried.
    Unavailable,
    /// The store answered with these collection names.
    Collections(Vec<String>),
    /// A handle is present but the query failed.
    Failed(String),
}

enum Connection {
    Ready(Arc<dyn DocumentStore>),
    Absent,
}

/// Document store adapter holding the lazily established handle.
pub struct DocumentStoreAdapter {
    settings: StoreSettings,
    connector: Option<Arc<dyn StoreConnector>>,
    clock: Arc<dyn Clock + Send + Sync>,
    connection: OnceLock<Connection>,
}

impl DocumentStoreAdapter {
    /// Creates an adapter that connects through `connector` on first use.
    #[must_use]
    pub fn new(settings: StoreSettings, connector: Arc<dyn StoreConnector>) -> Self {
        Self {
            settings,
            connector: Some(connector),
            clock: Arc::new(DefaultClock),
            connection: OnceLock::new(),
        }
    }

    /// Creates an adapter around an already established store.
    #[must_use]
    pub fn from_store(store: Arc<dyn DocumentStore>, database: impl Into<String>) -> Self {
        Self {
            settings: StoreSettings::new(None, Some(database.into())),
            connector: None,
            clock: Arc::new(DefaultClock),
            connection: OnceLock::from(Connection::Ready(store)),
        }
    }

    /// Creates an adapter whose handle is permanently absent.
    #[must_use]
    pub fn disconnected(settings: StoreSettings) -> Self {
        Self {
            settings,
            connector: None,
            clock: Arc::new(DefaultClock),
            connection: OnceLock::from(Connection::Absent),
        }
    }

    /// Replaces the clock used to stamp new documents.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        self.clock = clock;
        self
    }

    /// Returns the settings this adapter was created with.
    #[must_use]
    pub const fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    /// Establishes the connection handle if that has not been attempted yet.
    ///
    /// Failures are logged and leave the handle absent; they are never
    /// returned. Only the first call reaches the connector.
    pub fn connect(&self) -> HandleState {
        match self.connection() {
            Connection::Ready(_) => HandleState::Present,
            Connection::Absent => HandleState::Absent,
        }
    }

    /// Returns the logical database name while a handle is present.
    #[must_use]
    pub fn database_name(&self) -> Option<&str> {
        match self.connection() {
            Connection::Ready(_) => self.settings.database.as_deref(),
            Connection::Absent => None,
        }
    }

    /// Serializes `record` and inserts it into `collection` as one document.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when no handle is present, or
    /// [`StorageError::Write`] when the collection name is invalid, the
    /// record does not serialize to a JSON object, or the insert fails.
    pub async fn insert<T>(&self, collection: &str, record: &T) -> StorageResult<DocumentId>
    where
        T: Serialize + Sync + ?Sized,
    {
        let store = self.store().ok_or(StorageError::Unavailable)?;
        let collection_name = CollectionName::new(collection).map_err(StorageError::write)?;
        let value = serde_json::to_value(record).map_err(StorageError::write)?;
        let document =
            NewDocument::from_value(value, self.clock.as_ref()).map_err(StorageError::write)?;

        let id = store.insert_document(&collection_name, document).await?;
        debug!(collection = %collection_name, %id, "document inserted");
        Ok(id)
    }

    /// Reads a document back by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when no handle is present, or
    /// [`StorageError::Read`] when the collection name is invalid or the
    /// lookup fails.
    pub async fn find(
        &self,
        collection: &str,
        id: DocumentId,
    ) -> StorageResult<Option<StoredDocument>> {
        let store = self.store().ok_or(StorageError::Unavailable)?;
        let collection_name = CollectionName::new(collection).map_err(StorageError::read)?;
        store.find_document(&collection_name, id).await
    }

    /// Lists up to [`INTROSPECTION_LIMIT`] collection names.
    ///
    /// Never fails: errors are folded into [`Introspection::Failed`] with a
    /// shortened message.
    pub async fn introspect(&self) -> Introspection {
        let Some(store) = self.store() else {
            return Introspection::Unavailable;
        };

        match store.list_collections(INTROSPECTION_LIMIT).await {
            Ok(mut names) => {
                names.truncate(INTROSPECTION_LIMIT);
                Introspection::Collections(names)
            }
            Err(err) => {
                warn!(error = %err, "document store introspection failed");
                Introspection::Failed(truncate_chars(
                    &err.to_string(),
                    INTROSPECTION_MESSAGE_LIMIT,
                ))
            }
        }
    }

    fn store(&self) -> Option<&Arc<dyn DocumentStore>> {
        match self.connection() {
            Connection::Ready(store) => Some(store),
            Connection::Absent => None,
        }
    }

    fn connection(&self) -> &Connection {
        self.connection.get_or_init(|| self.establish())
    }

    fn establish(&self) -> Connection {
        let Some(connector) = self.connector.as_ref() else {
            return Connection::Absent;
        };

        match connector.connect(&self.settings) {
            Ok(store) => {
                info!(
                    database = self.settings.database.as_deref().unwrap_or_default(),
                    "document store connected"
                );
                Connection::Ready(store)
            }
            Err(ConnectError::NotConfigured(setting)) => {
                info!("document store disabled: {setting} is not set");
                Connection::Absent
            }
            Err(err) => {
                warn!(error = %err, "document store connection failed");
                Connection::Absent
            }
        }
    }
}

impl fmt::Debug for DocumentStoreAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.connection.get() {
            Some(Connection::Ready(_)) => "present",
            Some(Connection::Absent) => "absent",
            None => "pending",
        };
        f.debug_struct("DocumentStoreAdapter")
            .field("database", &self.settings.database)
            .field("handle", &state)
            .finish_non_exhaustive()
    }
}
