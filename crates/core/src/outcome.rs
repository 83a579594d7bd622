//! The tagged result every procedure returns.
//!
//! Business failures (missing rows, storage errors) travel as the `Err` arm
//! of [`ProcedureResult`]; callers must branch on it before touching the
//! payload. Authorization failures are not represented here, they are raised
//! as [`CoreError`](crate::error::CoreError) instead.

use std::fmt;

use serde::Serialize;

use crate::message::Raised;

pub type ProcedureResult<T> = Result<T, ProcedureError>;

/// Failure classification exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// The requested row does not exist (or is not visible).
    NotFound,
    /// The caller's request caused the failure.
    BadRequest,
    /// The server's state or environment caused the failure.
    InternalServerError,
}

impl ErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::BadRequest => "BAD_REQUEST",
            ErrorKind::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn is_client_fault(self) -> bool {
        matches!(self, ErrorKind::NotFound | ErrorKind::BadRequest)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Diagnostic detail attached to a failure.
///
/// Recognized storage errors carry their trace text; unrecognized ones carry
/// the raised value itself, unmodified.
#[derive(Debug, Clone)]
pub enum ErrorCause {
    Trace(String),
    Raised(Raised),
}

/// Structured failure payload.
#[derive(Debug, Clone, Serialize, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ProcedureError {
    pub kind: ErrorKind,
    pub message: String,
    /// Kept for logs only; never sent to callers.
    #[serde(skip)]
    pub cause: Option<ErrorCause>,
}

impl ProcedureError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_cause(mut self, cause: ErrorCause) -> Self {
        self.cause = Some(cause);
        self
    }

    /// `id` is whatever the caller asked for, parsed or not.
    pub fn not_found(entity: &'static str, id: impl fmt::Display) -> Self {
        Self::new(ErrorKind::NotFound, format!("{entity} with id {id} not found"))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn not_found_names_entity_and_id() {
        let id = Uuid::nil();
        let err = ProcedureError::not_found("Franchise", id);
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(
            err.message,
            "Franchise with id 00000000-0000-0000-0000-000000000000 not found"
        );
        assert!(err.cause.is_none());
    }

    #[test]
    fn serializes_kind_and_message_only() {
        let err = ProcedureError::new(ErrorKind::InternalServerError, "boom")
            .with_cause(ErrorCause::Trace("at db.rs:10".into()));
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(
            value,
            json!({ "kind": "INTERNAL_SERVER_ERROR", "message": "boom" })
        );
    }

    #[test]
    fn client_fault_classification() {
        assert!(ErrorKind::NotFound.is_client_fault());
        assert!(ErrorKind::BadRequest.is_client_fault());
        assert!(!ErrorKind::InternalServerError.is_client_fault());
    }
}
