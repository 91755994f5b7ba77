//! Route handlers.

use super::{ApiError, AppState};
use crate::diagnostics::DiagnosticsReport;
use crate::portfolio::{Project, featured_projects};
use axum::{Json, body::Bytes, extract::State};
use serde::Serialize;

/// Body of the static message routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    /// Fixed greeting text.
    pub message: &'static str,
}

/// Body of the projects route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectsResponse {
    /// Featured projects in display order.
    pub projects: &'static [Project],
}

/// Body returned for an accepted contact submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactAccepted {
    /// Always `"ok"`.
    pub status: &'static str,
    /// Identifier assigned by the store.
    pub id: String,
}

/// `GET /`
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Engineering Portfolio Backend Running",
    })
}

/// `GET /api/hello`
pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from the backend API!",
    })
}

/// `GET /test`: always answers 200, whatever the store state.
pub async fn diagnostics(State(state): State<AppState>) -> Json<DiagnosticsReport> {
    Json(state.diagnostics().report().await)
}

/// `GET /api/projects`
pub async fn projects() -> Json<ProjectsResponse> {
    Json(ProjectsResponse {
        projects: featured_projects(),
    })
}

/// `POST /api/contact`
///
/// The raw body is handed to the validator so malformed JSON is reported
/// through the same 422 shape as field problems.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] (422) for rejected bodies and
/// [`ApiError::Storage`] (500) when the message cannot be stored.
pub async fn submit_contact(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ContactAccepted>, ApiError> {
    let id = state.contact().submit(&body).await?;
    Ok(Json(ContactAccepted {
        status: "ok",
        id: id.to_string(),
    }))
}
