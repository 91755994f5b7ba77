//! Validated contact message.

use super::ContactValidationError;
use crate::contact::validation;
use serde::Serialize;
use serde_json::json;

/// A contact form submission that passed validation.
///
/// Values are kept exactly as submitted. The type can only be obtained
/// through validation, so holding one proves every field is present and
/// well formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    name: String,
    email: String,
    message: String,
}

impl ContactMessage {
    /// Validates and builds a contact message from its three fields.
    ///
    /// # Errors
    ///
    /// Returns [`ContactValidationError::Fields`] listing every rejected
    /// field.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, ContactValidationError> {
        validation::validate_contact(&json!({
            "name": name.into(),
            "email": email.into(),
            "message": message.into(),
        }))
    }

    pub(crate) const fn from_validated(name: String, email: String, message: String) -> Self {
        Self {
            name,
            email,
            message,
        }
    }

    /// Returns the sender's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the sender's email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the message body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
