//! Response envelope for procedure outcomes.
//!
//! Every procedure answers HTTP 200 with a tagged body, so callers branch on
//! `status` before reading the payload:
//!
//! ```text
//! { "status": "success", "data": { ... } }
//! { "status": "failure", "error": { "kind": "NOT_FOUND", "message": "..." } }
//! ```

use axum::response::{IntoResponse, Response};
use axum::Json;
use backlog_core::outcome::{ProcedureError, ProcedureResult};
use serde::Serialize;

/// Tagged `{ "status": ... }` envelope around a [`ProcedureResult`].
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Envelope<T> {
    Success { data: T },
    Failure { error: ProcedureError },
}

impl<T> From<ProcedureResult<T>> for Envelope<T> {
    fn from(result: ProcedureResult<T>) -> Self {
        match result {
            Ok(data) => Envelope::Success { data },
            Err(error) => Envelope::Failure { error },
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
