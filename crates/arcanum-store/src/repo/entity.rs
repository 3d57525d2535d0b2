//! Compile-time field mapping between entities and tables

use crate::errors::Result;
use crate::repo::relations::Relationship;
use arcanum_core::model::EntityId;
use rusqlite::types::Value;
use rusqlite::{Connection, Row};

/// A record type the generic repository can persist
///
/// The row layout is always `id` followed by [`Entity::COLUMNS`] in order;
/// [`Entity::to_values`] and [`Entity::from_row`] must agree with it.
pub trait Entity: Clone + Sized {
    /// Backing table
    const TABLE: &'static str;

    /// Scalar and owning foreign-key columns, excluding `id`
    const COLUMNS: &'static [&'static str];

    /// Relationships whose remove policy runs before a row of this table is
    /// deleted
    const DEPENDENTS: &'static [Relationship] = &[];

    fn id(&self) -> Option<EntityId>;

    fn set_id(&mut self, id: EntityId);

    /// Column values in [`Entity::COLUMNS`] order
    fn to_values(&self) -> Vec<Value>;

    /// Build a value from a row laid out as `id, COLUMNS...`
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;

    /// Write owned collections and owning join rows after the row itself has
    /// been written and `self` carries its identity
    fn save_relations(&mut self, _conn: &Connection) -> Result<()> {
        Ok(())
    }

    /// Hydrate relationship fields after the row has been read
    fn load_relations(&mut self, _conn: &Connection) -> Result<()> {
        Ok(())
    }
}

pub(crate) fn text(value: &str) -> Value {
    Value::Text(value.to_string())
}

pub(crate) fn optional_id(id: Option<EntityId>) -> Value {
    id.map_or(Value::Null, Value::Integer)
}
