//! Error handling for arcanum-store
//!
//! Wraps arcanum-core ExError with store-specific helpers

use arcanum_core::errors::{ExError, ExErrorKind};
use rusqlite::ErrorCode;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::ConstraintViolation)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Create a configuration error
pub fn config_error(err: ::config::ConfigError) -> ExError {
    ExError::new(ExErrorKind::Configuration)
        .with_op("config_load")
        .with_message(err.to_string())
}

/// Create an error for a connection that could not be opened or prepared
pub fn open_error(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("connection_open")
        .with_message(err.to_string())
}

/// Create a database error from rusqlite::Error
///
/// Constraint failures keep their own kind; everything else raised inside a
/// unit of work is a transaction failure.
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    let kind = match &err {
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation => {
            ExErrorKind::ConstraintViolation
        }
        _ => ExErrorKind::TransactionFailure,
    };
    ExError::new(kind).with_op("sqlite").with_message(err.to_string())
}
