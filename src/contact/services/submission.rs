//! Service layer for contact form submissions.
//!
//! Provides [`ContactService`], which runs the validator and hands accepted
//! messages to the document store adapter. Each submission is a single
//! insert attempt; nothing is queued or retried.

use crate::contact::{
    domain::{ContactMessage, ContactValidationError},
    validation,
};
use crate::document_store::{DocumentStoreAdapter, domain::DocumentId, ports::StorageError};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Collection holding accepted contact messages.
pub const CONTACT_COLLECTION: &str = "contactmessage";

/// Service-level errors for contact submissions.
#[derive(Debug, Error)]
pub enum ContactServiceError {
    /// The submission failed validation.
    #[error(transparent)]
    Validation(#[from] ContactValidationError),
    /// The store rejected or could not take the write.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type for contact service operations.
pub type ContactServiceResult<T> = Result<T, ContactServiceError>;

/// Contact submission orchestration service.
#[derive(Debug, Clone)]
pub struct ContactService {
    store: Arc<DocumentStoreAdapter>,
}

impl ContactService {
    /// Creates a contact service writing through `store`.
    #[must_use]
    pub const fn new(store: Arc<DocumentStoreAdapter>) -> Self {
        Self { store }
    }

    /// Validates a raw request body and stores the resulting message.
    ///
    /// # Errors
    ///
    /// Returns [`ContactServiceError::Validation`] when the body is rejected,
    /// in which case nothing is written, or [`ContactServiceError::Storage`]
    /// when the insert fails.
    pub async fn submit(&self, body: &[u8]) -> ContactServiceResult<DocumentId> {
        let message = validation::parse_contact(body).inspect_err(|err| {
            debug!(error = %err, "contact submission rejected");
        })?;
        self.store_message(&message).await
    }

    /// Stores a validated message.
    ///
    /// # Errors
    ///
    /// Returns [`ContactServiceError::Storage`] when the insert fails.
    pub async fn store_message(
        &self,
        message: &ContactMessage,
    ) -> ContactServiceResult<DocumentId> {
        let id = self.store.insert(CONTACT_COLLECTION, message).await?;
        info!(%id, "contact message stored");
        Ok(id)
    }

    /// Reads a stored message back.
    ///
    /// Returns `Ok(None)` when no message has the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ContactServiceError::Storage`] when the lookup fails or the
    /// stored document no longer forms a valid message.
    pub async fn find_message(
        &self,
        id: DocumentId,
    ) -> ContactServiceResult<Option<ContactMessage>> {
        let Some(document) = self.store.find(CONTACT_COLLECTION, id).await? else {
            return Ok(None);
        };
        let message = validation::validate_contact(&Value::Object(document.body().clone()))
            .map_err(StorageError::read)?;
        Ok(Some(message))
    }
}
