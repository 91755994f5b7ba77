//! Document store access for Vitrine.
//!
//! This module isolates everything the backend knows about the external
//! document database: how a connection handle is established, how a record
//! becomes a stored document, and how store metadata is listed for
//! diagnostics. It follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The process-wide handle owner in [`adapter`]

pub mod adapter;
pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapter::{DocumentStoreAdapter, HandleState, INTROSPECTION_LIMIT, Introspection};

#[cfg(test)]
mod tests;
