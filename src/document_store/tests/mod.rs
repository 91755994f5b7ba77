//! Unit tests for the document store module.

mod domain_tests;
