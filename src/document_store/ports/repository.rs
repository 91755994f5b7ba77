//! Repository port for document persistence.

use crate::document_store::domain::{CollectionName, DocumentId, NewDocument, StoredDocument};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for document store operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Document persistence contract.
///
/// Implementations perform each call as a single attempt. Retrying is the
/// caller's decision.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts a document into a collection, creating the collection when
    /// needed, and returns the identifier assigned by the store.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] when the insert fails.
    async fn insert_document(
        &self,
        collection: &CollectionName,
        document: NewDocument,
    ) -> StorageResult<DocumentId>;

    /// Finds a document by identifier.
    ///
    /// Returns `None` when the collection or the document does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] when the lookup fails.
    async fn find_document(
        &self,
        collection: &CollectionName,
        id: DocumentId,
    ) -> StorageResult<Option<StoredDocument>>;

    /// Lists collection names in ascending order, at most `limit` of them.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] when the store cannot be queried.
    async fn list_collections(&self, limit: usize) -> StorageResult<Vec<String>>;
}

/// Errors returned by document store operations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// No connection handle is present.
    #[error("document store is not available")]
    Unavailable,

    /// The write could not be completed.
    #[error("document write failed: {0}")]
    Write(Arc<dyn std::error::Error + Send + Sync>),

    /// The read could not be completed.
    #[error("document read failed: {0}")]
    Read(Arc<dyn std::error::Error + Send + Sync>),
}

impl StorageError {
    /// Wraps a write-path failure.
    pub fn write(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Write(Arc::new(err))
    }

    /// Wraps a read-path failure.
    pub fn read(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Read(Arc::new(err))
    }
}
