//! Well-known role name constants.
//!
//! These must match the role stored on seeded user documents.

pub const ROLE_ADMIN: &str = "admin";
