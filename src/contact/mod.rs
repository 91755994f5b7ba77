//! Contact form submission for Vitrine.
//!
//! A submission is parsed, validated in one pass, and written to the
//! `contactmessage` collection as a single document. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Pure validation rules in [`validation`]
//! - Orchestration services in [`services`]
//!
//! Persistence goes through [`crate::document_store`].

pub mod domain;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
