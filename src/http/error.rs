//! Mapping of service errors onto HTTP responses.

use crate::contact::{
    domain::{ContactValidationError, FieldError},
    services::ContactServiceError,
};
use crate::document_store::ports::StorageError;
use crate::text::truncate_chars;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, warn};

/// Maximum length of a storage failure description sent to clients.
pub const STORAGE_DETAIL_LIMIT: usize = 120;

/// Errors returned by route handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body was rejected. Maps to 422.
    #[error(transparent)]
    Validation(#[from] ContactValidationError),
    /// The store could not take the write. Maps to 500.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<ContactServiceError> for ApiError {
    fn from(err: ContactServiceError) -> Self {
        match err {
            ContactServiceError::Validation(inner) => Self::Validation(inner),
            ContactServiceError::Storage(inner) => Self::Storage(inner),
        }
    }
}

/// One entry of a 422 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationDetail {
    /// Location of the problem: `["body"]` or `["body", <field>]`.
    pub loc: Vec<&'static str>,
    /// Human-readable description.
    pub msg: String,
    /// Machine-readable problem code.
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl ValidationDetail {
    fn for_field(error: FieldError) -> Self {
        Self {
            loc: vec!["body", error.field().as_str()],
            msg: error.problem().describe().to_owned(),
            kind: error.problem().code(),
        }
    }

    fn for_body(msg: String, kind: &'static str) -> Self {
        Self {
            loc: vec!["body"],
            msg,
            kind,
        }
    }
}

/// Lists every validation problem in response order.
#[must_use]
pub fn validation_details(err: &ContactValidationError) -> Vec<ValidationDetail> {
    match err {
        ContactValidationError::InvalidJson(reason) => vec![ValidationDetail::for_body(
            format!("request body is not valid JSON: {reason}"),
            "invalid_json",
        )],
        ContactValidationError::NotAnObject => vec![ValidationDetail::for_body(
            "request body must be a JSON object".to_owned(),
            "not_an_object",
        )],
        ContactValidationError::Fields(errors) => errors
            .iter()
            .copied()
            .map(ValidationDetail::for_field)
            .collect(),
    }
}

#[derive(Serialize)]
struct DetailList {
    detail: Vec<ValidationDetail>,
}

#[derive(Serialize)]
struct DetailText {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(err) => {
                debug!(error = %err, "request rejected");
                let body = DetailList {
                    detail: validation_details(&err),
                };
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            Self::Storage(err) => {
                if matches!(err, StorageError::Unavailable) {
                    warn!("contact submission refused: document store unavailable");
                } else {
                    error!(error = %err, "contact submission failed");
                }
                let body = DetailText {
                    detail: truncate_chars(&err.to_string(), STORAGE_DETAIL_LIMIT),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
