//! Shared router state.

use crate::contact::services::ContactService;
use crate::diagnostics::DiagnosticsService;
use crate::document_store::DocumentStoreAdapter;
use std::sync::Arc;

/// Services shared by every request.
///
/// Cloning is cheap: both services hold the same adapter behind an `Arc`.
#[derive(Debug, Clone)]
pub struct AppState {
    contact: ContactService,
    diagnostics: DiagnosticsService,
}

impl AppState {
    /// Builds the state around one document store adapter.
    #[must_use]
    pub fn new(store: Arc<DocumentStoreAdapter>) -> Self {
        Self {
            contact: ContactService::new(Arc::clone(&store)),
            diagnostics: DiagnosticsService::new(store),
        }
    }

    /// Returns the contact submission service.
    #[must_use]
    pub const fn contact(&self) -> &ContactService {
        &self.contact
    }

    /// Returns the diagnostics service.
    #[must_use]
    pub const fn diagnostics(&self) -> &DiagnosticsService {
        &self.diagnostics
    }
}
