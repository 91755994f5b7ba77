//! In-memory document store for tests and database-less runs.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use crate::document_store::{
    domain::{CollectionName, DocumentId, NewDocument, StoredDocument},
    ports::{DocumentStore, StorageError, StorageResult},
};

/// Thread-safe in-memory document store.
///
/// Collections are kept in name order so listings match the `PostgreSQL`
/// adapter.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    state: Arc<RwLock<InMemoryStoreState>>,
}

#[derive(Debug, Default)]
struct InMemoryStoreState {
    collections: BTreeMap<CollectionName, HashMap<DocumentId, StoredDocument>>,
}

impl InMemoryDocumentStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of documents held in a collection.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] when the internal lock is poisoned.
    pub fn count(&self, collection: &CollectionName) -> StorageResult<usize> {
        let state = self
            .state
            .read()
            .map_err(|err| StorageError::read(std::io::Error::other(err.to_string())))?;
        Ok(state.collections.get(collection).map_or(0, HashMap::len))
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn insert_document(
        &self,
        collection: &CollectionName,
        document: NewDocument,
    ) -> StorageResult<DocumentId> {
        let mut state = self
            .state
            .write()
            .map_err(|err| StorageError::write(std::io::Error::other(err.to_string())))?;

        let id = DocumentId::generate();
        state
            .collections
            .entry(collection.clone())
            .or_default()
            .insert(id, document.into_stored(id));
        Ok(id)
    }

    async fn find_document(
        &self,
        collection: &CollectionName,
        id: DocumentId,
    ) -> StorageResult<Option<StoredDocument>> {
        let state = self
            .state
            .read()
            .map_err(|err| StorageError::read(std::io::Error::other(err.to_string())))?;
        Ok(state
            .collections
            .get(collection)
            .and_then(|documents| documents.get(&id))
            .cloned())
    }

    async fn list_collections(&self, limit: usize) -> StorageResult<Vec<String>> {
        let state = self
            .state
            .read()
            .map_err(|err| StorageError::read(std::io::Error::other(err.to_string())))?;
        Ok(state
            .collections
            .keys()
            .take(limit)
            .map(|name| name.as_str().to_owned())
            .collect())
    }
}
