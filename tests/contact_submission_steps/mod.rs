//! Step definitions for contact submission scenarios.

mod given;
mod then;
mod when;
pub mod world;
