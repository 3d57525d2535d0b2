//! Row-level SQL for any [`Entity`]
//!
//! Statements are built from the entity's table and column list. Reads
//! hydrate relationships before returning; results are ordered by id.

use crate::errors::{from_rusqlite, Result};
use crate::repo::entity::Entity;
use arcanum_core::errors::ArcanumError;
use arcanum_core::model::EntityId;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, OptionalExtension, ToSql};

fn select_clause<T: Entity>() -> String {
    format!("SELECT id, {} FROM {}", T::COLUMNS.join(", "), T::TABLE)
}

/// Hydrated rows of `T` matching an optional SQL tail (`WHERE ...`)
pub(crate) fn select<T: Entity>(
    conn: &Connection,
    tail: &str,
    params: &[&dyn ToSql],
) -> Result<Vec<T>> {
    let sql = format!("{} {}", select_clause::<T>(), tail);
    let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;
    let mut rows: Vec<T> = stmt
        .query_map(params, T::from_row)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    for row in rows.iter_mut() {
        row.load_relations(conn)?;
    }
    Ok(rows)
}

pub(crate) fn select_by_id<T: Entity>(conn: &Connection, id: EntityId) -> Result<Option<T>> {
    let sql = format!("{} WHERE id = ?1", select_clause::<T>());
    let found = conn
        .query_row(&sql, [id], T::from_row)
        .optional()
        .map_err(from_rusqlite)?;

    match found {
        Some(mut entity) => {
            entity.load_relations(conn)?;
            Ok(Some(entity))
        }
        None => Ok(None),
    }
}

/// Hydrated rows of `T` whose `column` equals `value`, ordered by id
pub(crate) fn select_where<T: Entity>(
    conn: &Connection,
    column: &str,
    value: &dyn ToSql,
) -> Result<Vec<T>> {
    select(conn, &format!("WHERE {} = ?1 ORDER BY id ASC", column), &[value])
}

/// Insert `entity` and assign it the generated identity
pub(crate) fn insert<T: Entity>(conn: &Connection, entity: &mut T) -> Result<EntityId> {
    let placeholders: Vec<String> = (1..=T::COLUMNS.len()).map(|i| format!("?{}", i)).collect();
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        T::TABLE,
        T::COLUMNS.join(", "),
        placeholders.join(", ")
    );
    conn.execute(&sql, params_from_iter(entity.to_values()))
        .map_err(from_rusqlite)?;

    let id = conn.last_insert_rowid();
    entity.set_id(id);
    tracing::debug!(table = T::TABLE, entity_id = id, "row inserted");
    Ok(id)
}

/// Overwrite every column of the stored row `id`
pub(crate) fn update_row<T: Entity>(conn: &Connection, entity: &T, id: EntityId) -> Result<()> {
    let assignments: Vec<String> = T::COLUMNS
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{} = ?{}", column, i + 1))
        .collect();
    let sql = format!(
        "UPDATE {} SET {} WHERE id = ?{}",
        T::TABLE,
        assignments.join(", "),
        T::COLUMNS.len() + 1
    );

    let mut values = entity.to_values();
    values.push(Value::Integer(id));
    let changed = conn
        .execute(&sql, params_from_iter(values))
        .map_err(from_rusqlite)?;

    if changed == 0 {
        return Err(ArcanumError::EntityNotFound {
            entity: T::TABLE,
            id,
        }
        .into());
    }
    tracing::debug!(table = T::TABLE, entity_id = id, "row updated");
    Ok(())
}

/// Insert or update `entity`, then write its relationships
pub(crate) fn save<T: Entity>(conn: &Connection, entity: &mut T) -> Result<EntityId> {
    let id = match entity.id() {
        Some(id) => {
            update_row(conn, entity, id)?;
            id
        }
        None => insert(conn, entity)?,
    };
    entity.save_relations(conn)?;
    Ok(id)
}

/// Apply `T`'s remove policies, then delete the row
pub(crate) fn delete_row<T: Entity>(conn: &Connection, id: EntityId) -> Result<()> {
    for relationship in T::DEPENDENTS {
        relationship.apply_on_remove(conn, id)?;
    }

    let sql = format!("DELETE FROM {} WHERE id = ?1", T::TABLE);
    let removed = conn.execute(&sql, [id]).map_err(from_rusqlite)?;
    if removed == 0 {
        return Err(ArcanumError::EntityNotFound {
            entity: T::TABLE,
            id,
        }
        .into());
    }
    tracing::debug!(table = T::TABLE, entity_id = id, "row deleted");
    Ok(())
}

pub(crate) fn count<T: Entity>(conn: &Connection) -> Result<i64> {
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", T::TABLE), [], |row| {
        row.get(0)
    })
    .map_err(from_rusqlite)
}
