//! Domain model for the document store.
//!
//! Documents are schemaless JSON objects grouped into named collections.
//! All infrastructure concerns are kept outside the domain boundary.

mod collection;
mod document;
mod error;
mod ids;

pub use collection::CollectionName;
pub use document::{NewDocument, StoredDocument};
pub use error::DocumentDomainError;
pub use ids::DocumentId;
