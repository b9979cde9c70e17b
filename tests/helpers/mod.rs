// Test helper modules
//
// Shared fixtures for the integration tests: in-memory repository
// implementations standing in for the MySQL store, and a request builder
// with the canonical defaults used throughout the suite.
#![allow(dead_code)]

pub mod in_memory;

pub use in_memory::*;
pub use test_data::*;
