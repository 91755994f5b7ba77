//! Vitrine: backend for an engineering portfolio site.
//!
//! Serves a static project list, a diagnostics report and a contact form
//! whose submissions are validated and written to a document store.
//!
//! # Architecture
//!
//! Vitrine follows hexagonal architecture principles:
//!
//! - **Domain**: Pure types and validation with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the document store
//! - **Adapters**: Concrete store implementations (`PostgreSQL`, in-memory)
//!
//! # Modules
//!
//! - [`contact`]: Contact message validation and submission
//! - [`document_store`]: Lazily connected document store adapter
//! - [`diagnostics`]: Best-effort runtime diagnostics
//! - [`portfolio`]: Static featured projects
//! - [`http`]: Axum router, handlers and error mapping
//! - [`config`]: Environment configuration
//! - [`server`]: Logging setup and serve loop

pub mod config;
pub mod contact;
pub mod diagnostics;
pub mod document_store;
pub mod http;
pub mod portfolio;
pub mod server;
pub mod text;

#[cfg(test)]
mod test_support;
