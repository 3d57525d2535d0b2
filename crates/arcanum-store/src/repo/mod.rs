//! Generic repository layer
//!
//! - [`Entity`]: compile-time table mapping implemented by each record type
//! - [`Repository`]: the CRUD contract ([`CrudRepository`]) for any entity
//! - [`relations`]: per-relationship cascade policies and join tables

pub mod entity;
pub(crate) mod hydration;
mod mapping;
pub mod relations;
pub mod repository;

pub use entity::Entity;
pub use relations::{JoinTable, OnRemove, Relationship};
pub use repository::{CrudRepository, Repository};
