//! Relationship descriptors and their cascade policies
//!
//! Foreign-key relationships say what happens to children when the parent is
//! saved or removed. Join tables hold the many-to-many associations; the
//! owning side rewrites its rows on save and either side can read them.

use crate::errors::{from_rusqlite, Result};
use crate::repo::entity::Entity;
use crate::repo::hydration::save;
use arcanum_core::errors::ArcanumError;
use arcanum_core::model::EntityId;
use rusqlite::Connection;
use std::collections::BTreeSet;

/// What happens to child rows when their parent row is deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnRemove {
    /// Delete the children with the parent
    Cascade,
    /// Keep the children and clear their foreign key
    Detach,
    /// Refuse the delete while children exist
    Restrict,
}

/// A parent→children relationship carried by a foreign-key column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relationship {
    pub name: &'static str,
    pub parent_table: &'static str,
    pub child_table: &'static str,
    pub foreign_key: &'static str,
    /// Whether saving the parent also saves its owned children
    pub persist: bool,
    pub on_remove: OnRemove,
}

pub const HOUSE_STUDENTS: Relationship = Relationship {
    name: "house_students",
    parent_table: "houses",
    child_table: "students",
    foreign_key: "house_id",
    persist: true,
    on_remove: OnRemove::Detach,
};

pub const HOUSE_HEAD_TEACHER: Relationship = Relationship {
    name: "house_head_teacher",
    parent_table: "houses",
    child_table: "teachers",
    foreign_key: "house_id",
    persist: false,
    on_remove: OnRemove::Detach,
};

pub const TEACHER_COURSES: Relationship = Relationship {
    name: "teacher_courses",
    parent_table: "teachers",
    child_table: "courses",
    foreign_key: "teacher_id",
    persist: true,
    on_remove: OnRemove::Cascade,
};

impl Relationship {
    /// Save owned children, pointing each one at `parent_id`
    ///
    /// Children with an identity are updated, the rest inserted. Children
    /// no longer in the collection are left as stored.
    pub(crate) fn save_children<C: Entity>(
        &self,
        conn: &Connection,
        parent_id: EntityId,
        children: &mut [C],
        attach: impl Fn(&mut C, EntityId),
    ) -> Result<()> {
        if !self.persist || children.is_empty() {
            return Ok(());
        }
        for child in children.iter_mut() {
            attach(child, parent_id);
            save(conn, child)?;
        }
        tracing::debug!(
            relationship = self.name,
            parent_id,
            children = children.len(),
            "owned children saved"
        );
        Ok(())
    }

    /// Apply the remove policy for the parent row `parent_id`
    pub(crate) fn apply_on_remove(&self, conn: &Connection, parent_id: EntityId) -> Result<()> {
        match self.on_remove {
            OnRemove::Cascade => {
                let sql = format!(
                    "DELETE FROM {} WHERE {} = ?1",
                    self.child_table, self.foreign_key
                );
                let removed = conn.execute(&sql, [parent_id]).map_err(from_rusqlite)?;
                tracing::debug!(relationship = self.name, parent_id, removed, "cascade delete");
            }
            OnRemove::Detach => {
                let sql = format!(
                    "UPDATE {} SET {fk} = NULL WHERE {fk} = ?1",
                    self.child_table,
                    fk = self.foreign_key
                );
                let detached = conn.execute(&sql, [parent_id]).map_err(from_rusqlite)?;
                tracing::debug!(relationship = self.name, parent_id, detached, "children detached");
            }
            OnRemove::Restrict => {
                let sql = format!(
                    "SELECT COUNT(*) FROM {} WHERE {} = ?1",
                    self.child_table, self.foreign_key
                );
                let count: i64 = conn
                    .query_row(&sql, [parent_id], |row| row.get(0))
                    .map_err(from_rusqlite)?;
                if count > 0 {
                    return Err(ArcanumError::DeleteRestricted {
                        entity: self.parent_table,
                        id: parent_id,
                        dependent: self.child_table,
                        count,
                    }
                    .into());
                }
            }
        }
        Ok(())
    }
}

/// A many-to-many association table with exactly two foreign keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinTable {
    pub table: &'static str,
    pub owner_column: &'static str,
    pub other_column: &'static str,
}

pub const COURSE_STUDENTS: JoinTable = JoinTable {
    table: "course_students",
    owner_column: "course_id",
    other_column: "student_id",
};

pub const EVENT_STUDENTS: JoinTable = JoinTable {
    table: "event_students",
    owner_column: "event_id",
    other_column: "student_id",
};

pub const EVENT_CREATURES: JoinTable = JoinTable {
    table: "event_creatures",
    owner_column: "event_id",
    other_column: "creature_id",
};

impl JoinTable {
    /// Make the stored associations of `owner_id` exactly `others`
    pub(crate) fn replace(
        &self,
        conn: &Connection,
        owner_id: EntityId,
        others: &BTreeSet<EntityId>,
    ) -> Result<()> {
        conn.execute(
            &format!("DELETE FROM {} WHERE {} = ?1", self.table, self.owner_column),
            [owner_id],
        )
        .map_err(from_rusqlite)?;

        let insert = format!(
            "INSERT INTO {} ({}, {}) VALUES (?1, ?2)",
            self.table, self.owner_column, self.other_column
        );
        let mut stmt = conn.prepare(&insert).map_err(from_rusqlite)?;
        for other in others {
            stmt.execute([owner_id, *other]).map_err(from_rusqlite)?;
        }
        Ok(())
    }

    /// Identities associated with `owner_id` (owning-side view)
    pub(crate) fn others_of(&self, conn: &Connection, owner_id: EntityId) -> Result<BTreeSet<EntityId>> {
        self.column_for(conn, self.other_column, self.owner_column, owner_id)
    }

    /// Owners associated with `other_id` (inverse-side view)
    pub(crate) fn owners_of(&self, conn: &Connection, other_id: EntityId) -> Result<BTreeSet<EntityId>> {
        self.column_for(conn, self.owner_column, self.other_column, other_id)
    }

    fn column_for(
        &self,
        conn: &Connection,
        select: &str,
        filter: &str,
        id: EntityId,
    ) -> Result<BTreeSet<EntityId>> {
        let sql = format!("SELECT {} FROM {} WHERE {} = ?1", select, self.table, filter);
        let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;
        let ids = stmt
            .query_map([id], |row| row.get(0))
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<BTreeSet<EntityId>, _>>()
            .map_err(from_rusqlite)?;
        Ok(ids)
    }
}
