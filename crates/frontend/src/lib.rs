//! Static page server for the creative workbench.
//!
//! A fixed table of page paths resolves to HTML documents under `html/`;
//! every other path is looked up as a static file under the frontend root.

pub mod config;
pub mod pages;
pub mod router;
