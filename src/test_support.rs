//! Test doubles shared by unit tests across modules.

use crate::document_store::{
    adapters::memory::InMemoryDocumentStore,
    domain::{CollectionName, DocumentId, NewDocument, StoredDocument},
    ports::{ConnectError, DocumentStore, StorageResult, StoreConnector, StoreSettings},
};
use async_trait::async_trait;
use mockall::mock;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

mock! {
    pub Store {}

    #[async_trait]
    impl DocumentStore for Store {
        async fn insert_document(
            &self,
            collection: &CollectionName,
            document: NewDocument,
        ) -> StorageResult<DocumentId>;

        async fn find_document(
            &self,
            collection: &CollectionName,
            id: DocumentId,
        ) -> StorageResult<Option<StoredDocument>>;

        async fn list_collections(&self, limit: usize) -> StorageResult<Vec<String>>;
    }
}

/// Connector that counts calls and hands out a shared in-memory store, or
/// fails with the configured error.
pub struct CountingConnector {
    calls: AtomicUsize,
    store: InMemoryDocumentStore,
    failure: Option<ConnectError>,
}

impl CountingConnector {
    pub fn succeeding(store: InMemoryDocumentStore) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            store,
            failure: None,
        }
    }

    pub fn failing(failure: ConnectError) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            store: InMemoryDocumentStore::new(),
            failure: Some(failure),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl StoreConnector for CountingConnector {
    fn connect(&self, _settings: &StoreSettings) -> Result<Arc<dyn DocumentStore>, ConnectError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(Arc::new(self.store.clone())),
        }
    }
}

/// Settings with both store variables populated.
pub fn configured_settings() -> StoreSettings {
    StoreSettings::new(
        Some("postgres://localhost/vitrine".to_owned()),
        Some("portfolio".to_owned()),
    )
}
