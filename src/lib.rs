//! Credit Application System Library
//!
//! This library provides the core functionality for the credit-management
//! service: creating credits for existing customers and querying them back.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::credits;
pub use modules::customers;
