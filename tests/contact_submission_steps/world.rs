//! Shared world state for contact submission BDD scenarios.

use crate::support::{self, Collected};
use axum::Router;
use rstest::fixture;
use serde_json::{Value, json};
use vitrine::document_store::adapters::memory::InMemoryDocumentStore;

/// Scenario world for contact submission behaviour tests.
pub struct ContactWorld {
    /// Router under test.
    pub app: Router,
    /// Backing store when one is connected.
    pub store: Option<InMemoryDocumentStore>,
    /// Body of the last submission.
    pub submitted: Option<Value>,
    /// Response to the last request.
    pub response: Option<Collected>,
}

impl ContactWorld {
    /// Creates a world with no store configured.
    #[must_use]
    pub fn new() -> Self {
        Self {
            app: support::absent_router(),
            store: None,
            submitted: None,
            response: None,
        }
    }

    /// Returns the last response or an error when nothing was sent.
    pub fn response(&self) -> Result<&Collected, eyre::Report> {
        self.response
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no response recorded in scenario world"))
    }

    /// Returns the last response body as JSON.
    pub fn response_json(&self) -> Result<Value, eyre::Report> {
        self.response()?.json()
    }
}

impl Default for ContactWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ContactWorld {
    ContactWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Builds a contact form body.
pub fn contact_body(name: &str, email: &str, message: &str) -> Value {
    json!({"name": name, "email": email, "message": message})
}
