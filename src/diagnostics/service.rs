//! Assembles diagnostic reports from the document store adapter.

use super::report::{
    BackendStatus, ConnectionStatus, DatabaseStatus, DiagnosticsReport, SettingPresence,
};
use crate::document_store::{DocumentStoreAdapter, Introspection};
use std::sync::Arc;
use tracing::debug;

/// Produces [`DiagnosticsReport`] values.
#[derive(Debug, Clone)]
pub struct DiagnosticsService {
    store: Arc<DocumentStoreAdapter>,
}

impl DiagnosticsService {
    /// Creates a service reporting on `store`.
    #[must_use]
    pub const fn new(store: Arc<DocumentStoreAdapter>) -> Self {
        Self { store }
    }

    /// Builds a report. Every sub-check runs regardless of the others.
    pub async fn report(&self) -> DiagnosticsReport {
        let connection_status = ConnectionStatus::from(self.store.connect());
        let introspection = self.store.introspect().await;
        let database = DatabaseStatus::from_introspection(&introspection);
        let collections = match introspection {
            Introspection::Collections(names) => names,
            Introspection::Unavailable | Introspection::Failed(_) => Vec::new(),
        };

        let settings = self.store.settings();
        let report = DiagnosticsReport {
            backend: BackendStatus::Running,
            database,
            connection_status,
            database_name: self.store.database_name().map(str::to_owned),
            database_url_env: SettingPresence::from(settings.has_url()),
            database_name_env: SettingPresence::from(settings.has_database()),
            collections,
        };
        debug!(
            database = ?report.database,
            connection = ?report.connection_status,
            "diagnostics assembled"
        );
        report
    }
}
