//! Connection factory and unit-of-work helpers
//!
//! A [`ConnectionFactory`] is created once with [`ConnectionFactory::connect`]
//! and handed to every repository. Each operation opens its own connection,
//! runs one transaction (or one read) and drops the connection on every exit
//! path. In-memory backends use a named shared-cache database that the factory
//! keeps alive until [`ConnectionFactory::shutdown`].
//!
//! Shared-cache connections take table-level locks and report contention as
//! `SQLITE_LOCKED`, which `busy_timeout` never retries. Units of work on an
//! in-memory backend are therefore run one at a time through a factory-wide
//! gate; file backends rely on SQLite's own locking and the busy timeout.

use crate::config::BackendConfig;
use crate::errors::{from_rusqlite, open_error, Result};
use crate::migrations::apply_migrations;
use arcanum_core::errors::ArcanumError;
use arcanum_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::{Connection, OpenFlags};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
enum Target {
    File(PathBuf),
    SharedMemory(String),
}

struct Inner {
    config: BackendConfig,
    target: Target,
    // Holds the shared in-memory database open between operations
    keeper: Mutex<Option<Connection>>,
    // Serializes units of work on the shared in-memory database
    gate: Mutex<()>,
    closed: AtomicBool,
}

/// Opens configured SQLite connections for one backend
///
/// Cheap to clone; all clones share the same backend and shutdown state.
#[derive(Clone)]
pub struct ConnectionFactory {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for ConnectionFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionFactory")
            .field("target", &self.inner.target)
            .field("closed", &self.is_shut_down())
            .finish()
    }
}

impl ConnectionFactory {
    /// Open the backend described by `config` and bring its schema up to date
    pub fn connect(config: &BackendConfig) -> Result<Self> {
        log_op_start!("factory_connect", in_memory = config.is_in_memory());
        let start = Instant::now();

        let result = Self::connect_impl(config);
        let duration_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => {
                log_op_end!("factory_connect", duration_ms = duration_ms);
            }
            Err(e) => {
                log_op_error!("factory_connect", e.clone(), duration_ms = duration_ms);
            }
        }
        result
    }

    fn connect_impl(config: &BackendConfig) -> Result<Self> {
        let target = match &config.path {
            Some(path) => Target::File(path.clone()),
            None => Target::SharedMemory(format!(
                "file:arcanum-{}?mode=memory&cache=shared",
                uuid::Uuid::new_v4()
            )),
        };

        let mut conn = open_target(&target)?;
        configure(&conn, config)?;
        apply_migrations(&mut conn)?;

        let keeper = match target {
            Target::SharedMemory(_) => Some(conn),
            Target::File(_) => None,
        };

        Ok(Self {
            inner: Arc::new(Inner {
                config: config.clone(),
                target,
                keeper: Mutex::new(keeper),
                gate: Mutex::new(()),
                closed: AtomicBool::new(false),
            }),
        })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.inner.config
    }

    pub fn is_shut_down(&self) -> bool {
        self.inner.closed.load(Ordering::SeqCst)
    }

    /// Release the backend
    ///
    /// In-memory data is discarded. Every later operation fails with a
    /// persistence error. Calling this more than once is harmless.
    pub fn shutdown(&self) {
        if self.inner.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        let keeper = self
            .inner
            .keeper
            .lock()
            .map(|mut guard| guard.take())
            .unwrap_or_else(|poisoned| poisoned.into_inner().take());
        if let Some(conn) = keeper {
            if let Err((_, e)) = conn.close() {
                tracing::debug!(error = %e, "closing keeper connection failed");
            }
        }
        tracing::info!(target_kind = ?self.inner.target, "connection factory shut down");
    }

    /// Open a fresh, configured connection
    pub fn open(&self) -> Result<Connection> {
        if self.is_shut_down() {
            return Err(ArcanumError::FactoryShutdown.into());
        }
        let conn = open_target(&self.inner.target)?;
        configure(&conn, &self.inner.config)?;
        Ok(conn)
    }

    /// Run `work` inside one transaction
    ///
    /// Commits on `Ok`, rolls back on `Err`. The connection is dropped
    /// either way.
    pub fn in_transaction<R>(
        &self,
        op: &str,
        work: impl FnOnce(&Connection) -> Result<R>,
    ) -> Result<R> {
        let _turn = self.turn();
        let mut conn = self.open()?;
        let tx = conn.transaction().map_err(from_rusqlite)?;
        match work(&tx) {
            Ok(value) => {
                tx.commit().map_err(from_rusqlite)?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback() {
                    tracing::debug!(op, error = %rollback_err, "rollback failed");
                }
                tracing::debug!(op, code = err.code(), "transaction rolled back");
                Err(err)
            }
        }
    }

    /// Run read-only `work` on a fresh connection
    pub fn read<R>(&self, work: impl FnOnce(&Connection) -> Result<R>) -> Result<R> {
        let _turn = self.turn();
        let conn = self.open()?;
        work(&conn)
    }

    /// Wait for exclusive use of an in-memory backend
    ///
    /// Returns `None` for file backends. A poisoned gate is taken over since
    /// it guards no data of its own.
    fn turn(&self) -> Option<MutexGuard<'_, ()>> {
        match self.inner.target {
            Target::SharedMemory(_) => Some(
                self.inner
                    .gate
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner()),
            ),
            Target::File(_) => None,
        }
    }
}

fn open_target(target: &Target) -> Result<Connection> {
    match target {
        Target::File(path) => Connection::open(path).map_err(open_error),
        Target::SharedMemory(uri) => Connection::open_with_flags(
            uri,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(open_error),
    }
}

/// Configure a connection for this backend
fn configure(conn: &Connection, config: &BackendConfig) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", true)
        .map_err(open_error)?;
    conn.busy_timeout(Duration::from_millis(config.busy_timeout_ms))
        .map_err(open_error)?;

    if config.wal && !config.is_in_memory() {
        let mode: String = conn
            .pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))
            .map_err(open_error)?;
        tracing::debug!(journal_mode = %mode, "journal mode set");
    }

    Ok(())
}
