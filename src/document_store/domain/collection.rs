//! Names of document collections.
//!
//! A collection groups documents of one kind, such as contact messages. The
//! `PostgreSQL` adapter keeps each collection in a table of the same name and
//! splices that name into SQL text, so a name must already be a valid
//! unquoted identifier: `[a-z0-9_]`, not starting with a digit, and at most
//! 63 bytes, the server's identifier limit.

use super::DocumentDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

const MAX_NAME_LENGTH: usize = 63;

/// Name of a document collection, usable verbatim as a table name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollectionName(String);

impl CollectionName {
    /// Parses a collection name, trimming surrounding whitespace.
    ///
    /// Case is kept as given, so `Contacts` is refused instead of quietly
    /// addressing the `contacts` table.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentDomainError::EmptyCollectionName`],
    /// [`DocumentDomainError::CollectionNameTooLong`] or
    /// [`DocumentDomainError::InvalidCollectionName`] when the name cannot be
    /// used as a table name.
    pub fn new(value: impl Into<String>) -> Result<Self, DocumentDomainError> {
        let raw = value.into();
        let name = raw.trim();

        if name.is_empty() {
            Err(DocumentDomainError::EmptyCollectionName)
        } else if name.len() > MAX_NAME_LENGTH {
            Err(DocumentDomainError::CollectionNameTooLong(raw))
        } else if !is_plain_identifier(name) {
            Err(DocumentDomainError::InvalidCollectionName(raw))
        } else {
            Ok(Self(name.to_owned()))
        }
    }

    /// Returns the name as it appears in SQL and in listings.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first == '_' || first.is_ascii_lowercase())
        && chars.all(|c| c == '_' || c.is_ascii_lowercase() || c.is_ascii_digit())
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
