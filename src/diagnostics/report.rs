//! Diagnostic report types.

use crate::document_store::{HandleState, Introspection};
use serde::Serialize;

/// Liveness of the HTTP process. Reaching the route implies running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendStatus {
    /// The process is serving requests.
    Running,
}

/// Result of probing the document store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DatabaseStatus {
    /// No store handle is present.
    NotAvailable,
    /// A handle is present but the connectivity check failed.
    Error {
        /// Shortened failure description.
        message: String,
    },
    /// A handle is present and answered the connectivity check.
    Working,
}

impl DatabaseStatus {
    /// Derives the status from an introspection outcome.
    #[must_use]
    pub fn from_introspection(introspection: &Introspection) -> Self {
        match introspection {
            Introspection::Unavailable => Self::NotAvailable,
            Introspection::Collections(_) => Self::Working,
            Introspection::Failed(message) => Self::Error {
                message: message.clone(),
            },
        }
    }
}

/// Whether the adapter holds a store handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    /// A handle is cached.
    Connected,
    /// No handle is available.
    NotConnected,
}

impl From<HandleState> for ConnectionStatus {
    fn from(state: HandleState) -> Self {
        match state {
            HandleState::Present => Self::Connected,
            HandleState::Absent => Self::NotConnected,
        }
    }
}

/// Whether a configuration variable carries a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingPresence {
    /// The variable is set.
    Set,
    /// The variable is absent.
    NotSet,
}

impl From<bool> for SettingPresence {
    fn from(present: bool) -> Self {
        if present { Self::Set } else { Self::NotSet }
    }
}

/// Diagnostic payload served by the diagnostics route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticsReport {
    /// Process liveness.
    pub backend: BackendStatus,
    /// Store connectivity check result.
    pub database: DatabaseStatus,
    /// Handle presence.
    pub connection_status: ConnectionStatus,
    /// Logical database name of a present handle.
    pub database_name: Option<String>,
    /// Presence of `DATABASE_URL`.
    pub database_url_env: SettingPresence,
    /// Presence of `DATABASE_NAME`.
    pub database_name_env: SettingPresence,
    /// Up to ten collection names reported by the store.
    pub collections: Vec<String>,
}
