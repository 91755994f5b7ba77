//! Domain model for contact form submissions.

mod error;
mod field;
mod message;

pub use error::ContactValidationError;
pub use field::{ContactField, FieldError, FieldProblem};
pub use message::ContactMessage;
