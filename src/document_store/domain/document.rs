//! Document payloads written to and read from the store.

use super::{DocumentDomainError, DocumentId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde_json::{Map, Value};

/// A document body awaiting insertion.
///
/// The store assigns the identifier; the caller supplies the body and the
/// creation timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDocument {
    body: Map<String, Value>,
    created_at: DateTime<Utc>,
}

impl NewDocument {
    /// Creates a document from a JSON value, stamping it with the clock.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentDomainError::NotAnObject`] when the value is not a
    /// JSON object.
    pub fn from_value(
        value: Value,
        clock: &(impl Clock + ?Sized),
    ) -> Result<Self, DocumentDomainError> {
        match value {
            Value::Object(body) => Ok(Self {
                body,
                created_at: clock.utc(),
            }),
            other => Err(DocumentDomainError::NotAnObject(json_kind(&other))),
        }
    }

    /// Returns the document body.
    #[must_use]
    pub const fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Splits the document into its body and timestamp.
    #[must_use]
    pub fn into_parts(self) -> (Map<String, Value>, DateTime<Utc>) {
        (self.body, self.created_at)
    }

    /// Attaches a store-assigned identifier, producing the persisted form.
    #[must_use]
    pub fn into_stored(self, id: DocumentId) -> StoredDocument {
        StoredDocument {
            id,
            body: self.body,
            created_at: self.created_at,
        }
    }
}

/// A document as held by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    id: DocumentId,
    body: Map<String, Value>,
    created_at: DateTime<Utc>,
}

impl StoredDocument {
    /// Reconstructs a stored document from persisted parts.
    #[must_use]
    pub const fn from_persisted(
        id: DocumentId,
        body: Map<String, Value>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            body,
            created_at,
        }
    }

    /// Returns the store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> DocumentId {
        self.id
    }

    /// Returns the document body.
    #[must_use]
    pub const fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns a string field from the body, if present.
    #[must_use]
    pub fn text_field(&self, key: &str) -> Option<&str> {
        self.body.get(key).and_then(Value::as_str)
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
