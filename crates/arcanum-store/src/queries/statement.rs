//! Typed bulk statements with a single equality predicate

use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, ToSql};

/// `UPDATE table SET set_column = ? WHERE where_column = ?`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkUpdate {
    pub table: &'static str,
    pub set_column: &'static str,
    pub where_column: &'static str,
}

impl BulkUpdate {
    pub fn sql(&self) -> String {
        format!(
            "UPDATE {} SET {} = ?1 WHERE {} = ?2",
            self.table, self.set_column, self.where_column
        )
    }

    /// Returns the number of rows changed; zero matches is not an error
    pub fn execute(&self, conn: &Connection, value: &dyn ToSql, key: &dyn ToSql) -> Result<usize> {
        let changed = conn
            .execute(&self.sql(), &[value, key][..])
            .map_err(from_rusqlite)?;
        tracing::debug!(table = self.table, column = self.set_column, changed, "bulk update");
        Ok(changed)
    }
}

/// `DELETE FROM table WHERE where_column = ?`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkDelete {
    pub table: &'static str,
    pub where_column: &'static str,
}

impl BulkDelete {
    pub fn sql(&self) -> String {
        format!("DELETE FROM {} WHERE {} = ?1", self.table, self.where_column)
    }

    /// Returns the number of rows removed; zero matches is not an error
    pub fn execute(&self, conn: &Connection, key: &dyn ToSql) -> Result<usize> {
        let removed = conn.execute(&self.sql(), &[key][..]).map_err(from_rusqlite)?;
        tracing::debug!(table = self.table, removed, "bulk delete");
        Ok(removed)
    }
}
