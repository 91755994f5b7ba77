//! Contact form fields and the problems a field can have.

use serde::Serialize;
use std::fmt;

/// A required field of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    /// Sender's name.
    Name,
    /// Sender's email address.
    Email,
    /// Message body.
    Message,
}

impl ContactField {
    /// All required fields, in the order they are checked and reported.
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Returns the JSON key of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldProblem {
    /// The key is absent or `null`.
    Missing,
    /// The value is not a JSON string.
    NotAString,
    /// The string is empty or whitespace only.
    Empty,
    /// The string contains a NUL character, which stored text cannot hold.
    ContainsNul,
    /// The string is not a valid email address.
    InvalidEmail,
}

impl FieldProblem {
    /// Returns the machine-readable problem code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::NotAString => "not_a_string",
            Self::Empty => "empty",
            Self::ContainsNul => "contains_nul",
            Self::InvalidEmail => "invalid_email",
        }
    }

    /// Returns a human-readable description.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Missing => "field required",
            Self::NotAString => "value must be a string",
            Self::Empty => "value must not be empty",
            Self::ContainsNul => "value must not contain NUL characters",
            Self::InvalidEmail => "value is not a valid email address",
        }
    }
}

impl fmt::Display for FieldProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A single rejected field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FieldError {
    field: ContactField,
    problem: FieldProblem,
}

impl FieldError {
    /// Creates a field error.
    #[must_use]
    pub const fn new(field: ContactField, problem: FieldProblem) -> Self {
        Self { field, problem }
    }

    /// Returns the rejected field.
    #[must_use]
    pub const fn field(self) -> ContactField {
        self.field
    }

    /// Returns why the field was rejected.
    #[must_use]
    pub const fn problem(self) -> FieldProblem {
        self.problem
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.problem)
    }
}
