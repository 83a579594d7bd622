//! Storage failure -> procedure failure.

use crate::outcome::{ErrorCause, ErrorKind, ProcedureError};
use crate::storage::StorageError;

/// Map a storage failure to the structured error returned to callers.
///
/// Classification, first match wins:
///
/// 1. [`StorageError::KnownRequest`] -> `BadRequest`, message verbatim,
///    cause = trace text.
/// 2. [`StorageError::UnknownRequest`] / [`StorageError::Validation`] ->
///    `InternalServerError`, message verbatim, cause = trace text.
/// 3. [`StorageError::Other`] -> `InternalServerError`, best-effort message,
///    cause = the raised value itself.
///
/// Recognized errors keep their trace as text while the fallback keeps the
/// original value. The two cause shapes differ on purpose; callers should not
/// assume one or the other.
pub fn normalize(err: StorageError) -> ProcedureError {
    let normalized = match err {
        StorageError::KnownRequest { message, trace, .. } => {
            ProcedureError::new(ErrorKind::BadRequest, message)
                .with_cause(ErrorCause::Trace(trace))
        }
        StorageError::UnknownRequest { message, trace }
        | StorageError::Validation { message, trace } => {
            ProcedureError::new(ErrorKind::InternalServerError, message)
                .with_cause(ErrorCause::Trace(trace))
        }
        StorageError::Other(raised) => {
            ProcedureError::new(ErrorKind::InternalServerError, raised.message())
                .with_cause(ErrorCause::Raised(raised))
        }
    };

    if normalized.kind.is_client_fault() {
        tracing::warn!(
            kind = %normalized.kind,
            message = %normalized.message,
            "Storage rejected request"
        );
    } else {
        tracing::error!(
            kind = %normalized.kind,
            message = %normalized.message,
            cause = ?normalized.cause,
            "Storage failure"
        );
    }

    normalized
}
