//! Port contracts for the document store.
//!
//! Ports define infrastructure-agnostic interfaces used by the store
//! adapter and its callers.

pub mod connector;
pub mod repository;

pub use connector::{
    ConnectError, DEFAULT_CONNECT_TIMEOUT, DEFAULT_POOL_SIZE, StoreConnector, StoreSettings,
};
pub use repository::{DocumentStore, StorageError, StorageResult};
