//! Error types for document store domain validation.

use thiserror::Error;

/// Errors returned while constructing document store domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DocumentDomainError {
    /// The collection name is empty after trimming.
    #[error("collection name must not be empty")]
    EmptyCollectionName,

    /// The collection name contains characters outside `[a-z0-9_]`.
    #[error(
        "collection name '{0}' contains invalid characters (only lowercase alphanumeric and underscores allowed)"
    )]
    InvalidCollectionName(String),

    /// The collection name exceeds the 63-character identifier limit.
    #[error("collection name exceeds 63 character limit: {0}")]
    CollectionNameTooLong(String),

    /// The serialized record is not a JSON object.
    #[error("documents must serialize to a JSON object, got {0}")]
    NotAnObject(&'static str),
}
