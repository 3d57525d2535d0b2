//! Arcanum Service - application-facing facade
//!
//! One entry point over every repository and query extension. Calls are
//! passed straight through; results and errors come back unchanged.

pub mod service;

pub use service::Service;
