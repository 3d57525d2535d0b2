//! Entity-specific query extensions
//!
//! Each module adds inherent methods to one `Repository<T>`. They share the
//! repository's connection factory and lifecycle logging.

mod course_queries;
mod event_queries;
mod house_queries;
pub mod statement;
mod student_queries;

pub use statement::{BulkDelete, BulkUpdate};
