//! Arcanum Core - entity model and shared facilities
//!
//! This crate provides the foundational pieces of the Arcanum data-access
//! layer:
//! - House, Teacher, Course, Student, Event and Creature records with
//!   business-attribute equality
//! - Relationship helpers that keep both sides of a link consistent
//! - The structured error facility (`ExError`, `ExErrorKind`)
//! - The structured logging facility and its macros

pub mod errors;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use errors::{ArcanumError, ExError, ExErrorKind, Result};
pub use model::{Course, Creature, EntityId, Event, House, Student, Teacher};
