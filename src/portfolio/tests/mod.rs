//! Unit tests for the project catalogue.
