//! Diesel row models for document persistence.
//!
//! Collections are created at runtime, so there is no `table!` schema and
//! every row type is loaded through `sql_query` by column name.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for a stored document.
#[derive(Debug, Clone, QueryableByName)]
pub struct DocumentRow {
    /// Store-assigned document identifier.
    #[diesel(sql_type = diesel::sql_types::Uuid)]
    pub id: uuid::Uuid,
    /// Document body as JSONB.
    #[diesel(sql_type = diesel::sql_types::Jsonb)]
    pub body: Value,
    /// Creation timestamp.
    #[diesel(sql_type = diesel::sql_types::Timestamptz)]
    pub created_at: DateTime<Utc>,
}

/// Identifier returned by an insert.
#[derive(Debug, Clone, Copy, QueryableByName)]
pub struct InsertedIdRow {
    /// Store-assigned document identifier.
    #[diesel(sql_type = diesel::sql_types::Uuid)]
    pub id: uuid::Uuid,
}

/// Collection name returned by catalogue queries.
#[derive(Debug, Clone, QueryableByName)]
pub struct CollectionRow {
    /// Table name in the current schema.
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub name: String,
}

/// Existence flag returned by catalogue queries.
#[derive(Debug, Clone, Copy, QueryableByName)]
pub struct ExistsRow {
    /// Whether the queried object exists.
    #[diesel(sql_type = diesel::sql_types::Bool)]
    pub present: bool,
}
