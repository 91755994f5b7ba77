//! Application services for contact submissions.

mod submission;

pub use submission::{
    CONTACT_COLLECTION, ContactService, ContactServiceError, ContactServiceResult,
};
