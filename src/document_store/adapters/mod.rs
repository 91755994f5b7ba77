//! Adapter implementations for the document store ports.

pub mod memory;
pub mod postgres;
