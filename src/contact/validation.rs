//! Validation rules for inbound contact messages.
//!
//! Each rule is a pure function over one field. [`validate_contact`] runs
//! every rule and reports all failures together. Keys other than the three
//! required fields are ignored.

use crate::contact::domain::{
    ContactField, ContactMessage, ContactValidationError, FieldError, FieldProblem,
};
use email_address::EmailAddress;
use serde_json::{Map, Value};
use std::str::FromStr;

/// Parses a raw request body and validates it as a contact message.
///
/// # Errors
///
/// Returns [`ContactValidationError::InvalidJson`] when the bytes are not
/// JSON, otherwise whatever [`validate_contact`] reports.
pub fn parse_contact(body: &[u8]) -> Result<ContactMessage, ContactValidationError> {
    let raw: Value = serde_json::from_slice(body)
        .map_err(|err| ContactValidationError::InvalidJson(err.to_string()))?;
    validate_contact(&raw)
}

/// Validates a JSON value as a contact message.
///
/// # Errors
///
/// Returns [`ContactValidationError::NotAnObject`] when `raw` is not a JSON
/// object, or [`ContactValidationError::Fields`] listing every missing,
/// empty or malformed field.
pub fn validate_contact(raw: &Value) -> Result<ContactMessage, ContactValidationError> {
    let Value::Object(fields) = raw else {
        return Err(ContactValidationError::NotAnObject);
    };

    let mut errors = Vec::new();
    let checked_name = collect(
        &mut errors,
        ContactField::Name,
        validate_text(fields, ContactField::Name),
    );
    let checked_email = collect(&mut errors, ContactField::Email, validate_email(fields));
    let checked_message = collect(
        &mut errors,
        ContactField::Message,
        validate_text(fields, ContactField::Message),
    );

    match (checked_name, checked_email, checked_message) {
        (Some(name), Some(email), Some(message)) if errors.is_empty() => {
            Ok(ContactMessage::from_validated(name, email, message))
        }
        _ => Err(ContactValidationError::Fields(errors)),
    }
}

/// Checks that a field is a non-blank string free of NUL characters.
///
/// # Errors
///
/// Returns the [`FieldProblem`] describing the first failed check.
pub fn validate_text(
    fields: &Map<String, Value>,
    field: ContactField,
) -> Result<String, FieldProblem> {
    match fields.get(field.as_str()) {
        None | Some(Value::Null) => Err(FieldProblem::Missing),
        Some(Value::String(text)) if text.trim().is_empty() => Err(FieldProblem::Empty),
        Some(Value::String(text)) if text.contains('\0') => Err(FieldProblem::ContainsNul),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(FieldProblem::NotAString),
    }
}

/// Checks the `email` field: the text rules plus address syntax.
///
/// # Errors
///
/// Returns the [`FieldProblem`] describing the first failed check.
pub fn validate_email(fields: &Map<String, Value>) -> Result<String, FieldProblem> {
    let email = validate_text(fields, ContactField::Email)?;
    if is_email_shaped(&email) {
        Ok(email)
    } else {
        Err(FieldProblem::InvalidEmail)
    }
}

/// Returns whether `value` is a bare address with a dotted domain.
///
/// Display-name forms (`Ada <ada@example.com>`), surrounding whitespace and
/// domain literals are rejected.
#[must_use]
pub fn is_email_shaped(value: &str) -> bool {
    if value
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '<' | '>'))
    {
        return false;
    }

    EmailAddress::from_str(value).is_ok_and(|address| {
        let domain = address.domain();
        domain.contains('.') && !domain.starts_with('[')
    })
}

fn collect(
    errors: &mut Vec<FieldError>,
    field: ContactField,
    result: Result<String, FieldProblem>,
) -> Option<String> {
    match result {
        Ok(value) => Some(value),
        Err(problem) => {
            errors.push(FieldError::new(field, problem));
            None
        }
    }
}
