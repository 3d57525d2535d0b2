//! Generic repository
//!
//! [`Repository<T>`] implements the CRUD contract once for every [`Entity`].
//! Every operation runs in its own unit of work and emits start/end
//! lifecycle events tagged with the operation name and table.

use crate::db::ConnectionFactory;
use crate::errors::Result;
use crate::repo::entity::Entity;
use crate::repo::hydration::{count, delete_row, insert, select, select_by_id, update_row};
use arcanum_core::errors::ArcanumError;
use arcanum_core::model::EntityId;
use arcanum_core::{log_op_end, log_op_error, log_op_start};
use std::marker::PhantomData;
use std::time::Instant;

/// The reusable persistence contract
pub trait CrudRepository<T> {
    /// Store a transient value and assign its identity
    ///
    /// Owned collections are saved and owning associations written in the
    /// same transaction. On error nothing is stored and `entity` is left
    /// unchanged.
    fn create(&self, entity: &mut T) -> Result<()>;

    /// Look up one record; absence is `Ok(None)`
    fn get(&self, id: EntityId) -> Result<Option<T>>;

    /// Every stored record, ascending by id
    fn get_all(&self) -> Result<Vec<T>>;

    /// Overwrite the stored record with `entity`'s current state
    ///
    /// Fails with a not-found error if no record carries its identity.
    fn update(&self, entity: &mut T) -> Result<()>;

    /// Remove the stored record, applying each relationship's remove policy
    fn delete(&self, entity: &T) -> Result<()>;
}

/// SQLite-backed repository for one entity type
pub struct Repository<T> {
    factory: ConnectionFactory,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self::new(self.factory.clone())
    }
}

impl<T> std::fmt::Debug for Repository<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("entity", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T> Repository<T> {
    pub fn new(factory: ConnectionFactory) -> Self {
        Self {
            factory,
            _entity: PhantomData,
        }
    }

    pub(crate) fn factory(&self) -> &ConnectionFactory {
        &self.factory
    }
}

/// Run `work` between lifecycle start and end events
pub(crate) fn logged<R>(
    op: &'static str,
    table: &'static str,
    work: impl FnOnce() -> Result<R>,
) -> Result<R> {
    log_op_start!(op, table = table);
    let start = Instant::now();

    let result = work().map_err(|e| e.or_op(op));
    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => {
            log_op_end!(op, duration_ms = duration_ms, table = table);
        }
        Err(e) => {
            log_op_error!(op, e.clone(), duration_ms = duration_ms, table = table);
        }
    }
    result
}

impl<T: Entity> CrudRepository<T> for Repository<T> {
    fn create(&self, entity: &mut T) -> Result<()> {
        logged("repo_create", T::TABLE, || {
            if let Some(id) = entity.id() {
                return Err(ArcanumError::AlreadyPersisted {
                    entity: T::TABLE,
                    id,
                }
                .into());
            }

            // Identities land in the caller's value only after commit
            let mut staged = entity.clone();
            self.factory.in_transaction("repo_create", |conn| {
                insert(conn, &mut staged)?;
                staged.save_relations(conn)
            })?;
            *entity = staged;
            Ok(())
        })
    }

    fn get(&self, id: EntityId) -> Result<Option<T>> {
        logged("repo_get", T::TABLE, || {
            self.factory.read(|conn| select_by_id(conn, id))
        })
    }

    fn get_all(&self) -> Result<Vec<T>> {
        logged("repo_get_all", T::TABLE, || {
            self.factory.read(|conn| select(conn, "ORDER BY id ASC", &[]))
        })
    }

    fn update(&self, entity: &mut T) -> Result<()> {
        logged("repo_update", T::TABLE, || {
            let id = entity
                .id()
                .ok_or(ArcanumError::Transient { entity: T::TABLE })?;

            let mut staged = entity.clone();
            self.factory.in_transaction("repo_update", |conn| {
                update_row(conn, &staged, id)?;
                staged.save_relations(conn)
            })?;
            *entity = staged;
            Ok(())
        })
    }

    fn delete(&self, entity: &T) -> Result<()> {
        logged("repo_delete", T::TABLE, || {
            let id = entity
                .id()
                .ok_or(ArcanumError::Transient { entity: T::TABLE })?;
            self.factory
                .in_transaction("repo_delete", |conn| delete_row::<T>(conn, id))
        })
    }
}

impl<T: Entity> Repository<T> {
    /// The record with the lowest identity
    ///
    /// An empty table is a not-found error.
    pub fn first(&self) -> Result<T> {
        logged("repo_first", T::TABLE, || {
            let mut rows: Vec<T> = self
                .factory
                .read(|conn| select(conn, "ORDER BY id ASC LIMIT 1", &[]))?;
            rows.pop()
                .ok_or_else(|| ArcanumError::NoSuchRecord { entity: T::TABLE }.into())
        })
    }

    /// Number of stored records
    pub fn count(&self) -> Result<i64> {
        logged("repo_count", T::TABLE, || self.factory.read(count::<T>))
    }
}
