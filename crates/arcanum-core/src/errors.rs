use crate::model::EntityId;
use thiserror::Error;

/// Result type alias using ArcanumError
pub type Result<T> = std::result::Result<T, ArcanumError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every error leaving the data-access layer carries one of these kinds.
/// Each kind maps to a stable error code usable for programmatic handling
/// and test assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    NotFound,
    ConstraintViolation,

    // Unit of work
    TransactionFailure,

    // Queries
    EmptyAggregate,

    // Integration/IO
    Configuration,
    Persistence,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::TransactionFailure => "ERR_TRANSACTION_FAILURE",
            ExErrorKind::EmptyAggregate => "ERR_EMPTY_AGGREGATE",
            ExErrorKind::Configuration => "ERR_CONFIGURATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind plus optional context (operation, entity
/// table, entity id) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity: Option<String>,
    entity_id: Option<EntityId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity: None,
            entity_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity (table) context
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: EntityId) -> Self {
        self.entity_id = Some(id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    pub fn entity_id(&self) -> Option<EntityId> {
        self.entity_id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }

    /// Return `self` with operation context, unless one is already set
    pub fn or_op(self, op: &str) -> Self {
        if self.op.is_some() {
            self
        } else {
            self.with_op(op)
        }
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity) = &self.entity {
            write!(f, " (entity: {})", entity)?;
        }
        if let Some(id) = self.entity_id {
            write!(f, " (entity_id: {})", id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for in-memory model operations and repository checks
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArcanumError {
    /// Operation needs a stored identity but the value was never persisted
    #[error("{entity} has no identity: it must be created or fetched first")]
    Transient { entity: &'static str },

    /// Value already carries an identity and cannot be created again
    #[error("{entity} {id} already has an identity")]
    AlreadyPersisted { entity: &'static str, id: EntityId },

    /// No stored record with this identity
    #[error("{entity} not found: {id}")]
    EntityNotFound { entity: &'static str, id: EntityId },

    /// Ordered lookup over an empty table
    #[error("No such record in {entity}")]
    NoSuchRecord { entity: &'static str },

    /// Aggregate computed over zero rows
    #[error("Aggregate '{query}' has no rows to aggregate")]
    EmptyAggregate { query: &'static str },

    /// Delete refused because dependents still reference the record
    #[error("Cannot delete {entity} {id}: {count} row(s) in {dependent} still reference it")]
    DeleteRestricted {
        entity: &'static str,
        id: EntityId,
        dependent: &'static str,
        count: i64,
    },

    /// The connection factory was shut down
    #[error("Connection factory has been shut down")]
    FactoryShutdown,

    /// Backend configuration could not be loaded
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Conversion from ArcanumError to ExError
impl From<ArcanumError> for ExError {
    fn from(err: ArcanumError) -> Self {
        let message = err.to_string();
        match err {
            ArcanumError::Transient { entity } => ExError::new(ExErrorKind::InvalidInput)
                .with_entity(entity)
                .with_message(message),

            ArcanumError::AlreadyPersisted { entity, id } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_entity(entity)
                    .with_entity_id(id)
                    .with_message(message)
            }

            ArcanumError::EntityNotFound { entity, id } => ExError::new(ExErrorKind::NotFound)
                .with_entity(entity)
                .with_entity_id(id)
                .with_message(message),

            ArcanumError::NoSuchRecord { entity } => ExError::new(ExErrorKind::NotFound)
                .with_entity(entity)
                .with_message(message),

            ArcanumError::EmptyAggregate { query } => ExError::new(ExErrorKind::EmptyAggregate)
                .with_op(query)
                .with_message(message),

            ArcanumError::DeleteRestricted { entity, id, .. } => {
                ExError::new(ExErrorKind::ConstraintViolation)
                    .with_entity(entity)
                    .with_entity_id(id)
                    .with_message(message)
            }

            ArcanumError::FactoryShutdown => ExError::new(ExErrorKind::Persistence)
                .with_op("connection_open")
                .with_message(message),

            ArcanumError::Configuration { .. } => {
                ExError::new(ExErrorKind::Configuration).with_message(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let kinds = [
            ExErrorKind::InvalidInput,
            ExErrorKind::NotFound,
            ExErrorKind::ConstraintViolation,
            ExErrorKind::TransactionFailure,
            ExErrorKind::EmptyAggregate,
            ExErrorKind::Configuration,
            ExErrorKind::Persistence,
            ExErrorKind::Internal,
        ];
        let mut codes: Vec<_> = kinds.iter().map(|k| k.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_display_includes_context() {
        let err = ExError::new(ExErrorKind::NotFound)
            .with_op("repo_update")
            .with_entity("houses")
            .with_entity_id(7)
            .with_message("gone");

        let text = err.to_string();
        assert!(text.starts_with("[ERR_NOT_FOUND]"));
        assert!(text.contains("repo_update"));
        assert!(text.contains("houses"));
        assert!(text.contains("7"));
    }

    #[test]
    fn test_or_op_keeps_existing() {
        let err = ExError::new(ExErrorKind::Internal).with_op("inner");
        assert_eq!(err.or_op("outer").op(), Some("inner"));

        let err = ExError::new(ExErrorKind::Internal);
        assert_eq!(err.or_op("outer").op(), Some("outer"));
    }
}
