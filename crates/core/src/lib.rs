//! Shared domain types for the creative workbench services.
//!
//! Holds the `Creative` record and its quadrant classification, the common
//! error type, and process introspection helpers used by the API status
//! endpoint.

pub mod creative;
pub mod error;
pub mod process;
pub mod quadrant;
pub mod roles;
pub mod types;
