//! Entity model: six record types with identity, business attributes and
//! typed relationships.
//!
//! Owning sides of relationships hold foreign identities (`house_id`,
//! `teacher_id`, `student_ids`, ...). Inverse sides are read-only views that
//! the store hydrates on load and ignores on write.

pub mod course;
pub mod creature;
pub mod event;
pub mod house;
pub mod link;
pub mod student;
pub mod teacher;

pub use course::Course;
pub use creature::Creature;
pub use event::Event;
pub use house::House;
pub use student::Student;
pub use teacher::Teacher;

/// Surrogate identity assigned by the backing store
pub type EntityId = i64;
