//! Request handlers, grouped by resource.

pub mod creative;
pub mod system;
