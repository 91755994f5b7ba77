//! Unit tests for diagnostics.
