//! Failure shapes a storage client can report.

use crate::message::Raised;

/// Error returned by every storage-client operation.
///
/// The first three variants are failures the storage layer recognized and
/// described; [`StorageError::Other`] carries anything it did not.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StorageError {
    /// A request the store understood but refused: constraint violations,
    /// malformed references, out-of-range data.
    #[error("{message}")]
    KnownRequest {
        code: String,
        message: String,
        trace: String,
    },

    /// The store failed while executing a request it did not classify.
    #[error("{message}")]
    UnknownRequest { message: String, trace: String },

    /// The request did not match the store's schema (bad column, bad type).
    #[error("{message}")]
    Validation { message: String, trace: String },

    /// Anything else.
    #[error("{}", .0.message())]
    Other(Raised),
}

/// SQLSTATE reported for unique-constraint violations.
pub const UNIQUE_VIOLATION: &str = "23505";

impl StorageError {
    /// A unique-constraint violation on `constraint`, worded like Postgres.
    pub fn unique_violation(constraint: &str) -> Self {
        let message = format!("duplicate key value violates unique constraint \"{constraint}\"");
        StorageError::KnownRequest {
            code: UNIQUE_VIOLATION.to_string(),
            trace: format!("KnownRequest {{ code: {UNIQUE_VIOLATION}, constraint: {constraint} }}"),
            message,
        }
    }
}
