//! HTTP handlers, one module per router.
//!
//! Handlers take their gate as an extractor (`RequireAdmin`, `RequireAuth`,
//! or none for public reads), validate the body, and hand off to
//! [`procedures`](crate::procedures).

pub mod developer;
pub mod franchise;
pub mod playlist;
pub mod publisher;
pub mod session;

use backlog_core::error::CoreError;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Reject invalid input before any storage access.
pub(crate) fn validate_input<T: Validate>(input: &T) -> AppResult<()> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))
}
