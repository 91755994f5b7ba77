//! Validation error for inbound contact messages.

use super::{ContactField, FieldError};
use thiserror::Error;

/// Errors produced while validating a contact submission.
///
/// Field problems are collected in one pass, so [`Self::Fields`] lists every
/// offending field rather than only the first.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContactValidationError {
    /// The body could not be parsed as JSON.
    #[error("request body is not valid JSON: {0}")]
    InvalidJson(String),

    /// The body is JSON but not an object.
    #[error("request body must be a JSON object")]
    NotAnObject,

    /// One or more fields are missing or malformed.
    #[error("invalid contact message: {}", format_errors(.0))]
    Fields(Vec<FieldError>),
}

fn format_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ContactValidationError {
    /// Returns the field errors, empty for body-level failures.
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Fields(errors) => errors,
            Self::InvalidJson(_) | Self::NotAnObject => &[],
        }
    }

    /// Returns `true` if `field` is among the rejected fields.
    #[must_use]
    pub fn rejects(&self, field: ContactField) -> bool {
        self.field_errors().iter().any(|error| error.field() == field)
    }
}
