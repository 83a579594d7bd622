//! sqlx error -> [`StorageError`] classification.

use backlog_core::message::Raised;
use backlog_core::storage::StorageError;

/// Classify a sqlx error into the storage-boundary taxonomy.
///
/// - Database errors in SQLSTATE class `22` (data exception) or `23`
///   (integrity constraint violation) are known requests the caller caused.
/// - Any other database error is an unknown request.
/// - Column/type mismatches between the query and the schema are validation
///   errors.
/// - Everything else (I/O, TLS, pool exhaustion, protocol) is passed through
///   untouched as [`StorageError::Other`].
pub fn classify_sqlx_error(err: sqlx::Error) -> StorageError {
    let trace = format!("{err:?}");

    match err {
        sqlx::Error::Database(ref db_err) => {
            let message = db_err.message().to_string();
            match db_err.code() {
                Some(code) if is_client_fault_state(&code) => StorageError::KnownRequest {
                    code: code.into_owned(),
                    message,
                    trace,
                },
                _ => StorageError::UnknownRequest { message, trace },
            }
        }
        sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::Encode(_)
        | sqlx::Error::TypeNotFound { .. } => StorageError::Validation {
            message: err.to_string(),
            trace,
        },
        other => {
            tracing::debug!(error = %other, "Unclassified sqlx error");
            StorageError::Other(Raised::error(other))
        }
    }
}

fn is_client_fault_state(code: &str) -> bool {
    code.starts_with("22") || code.starts_with("23")
}
