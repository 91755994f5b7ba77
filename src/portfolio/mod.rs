//! Featured portfolio projects.
//!
//! The catalogue is static: [`featured_projects`] always returns the same
//! entries in the same order, so the projects route serializes to identical
//! bytes on every call.

mod catalogue;

pub use catalogue::{Project, featured_projects};

#[cfg(test)]
mod tests;
