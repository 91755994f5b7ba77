//! `PostgreSQL` adapters for document persistence.

mod connector;
mod models;
mod repository;

pub use connector::{PostgresConnector, with_database};
pub use repository::{DocumentPgPool, PostgresDocumentStore};
