//! Caller sessions and the authorization gate.

use serde::Serialize;

use crate::error::CoreError;
use crate::roles::Role;
use crate::types::DbId;

/// An authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub user_id: DbId,
    pub role: Role,
}

/// Check a possibly absent session against a required role.
///
/// Fails with [`CoreError::Unauthorized`] when there is no session and with
/// [`CoreError::Forbidden`] when the session's role is insufficient. Has no
/// side effects, so it must run before any storage access.
pub fn authorize(session: Option<&Session>, required: Role) -> Result<&Session, CoreError> {
    let session =
        session.ok_or_else(|| CoreError::Unauthorized("Authentication required".into()))?;

    if !session.role.satisfies(required) {
        tracing::debug!(
            user_id = %session.user_id,
            role = %session.role,
            required = %required,
            "Rejected caller with insufficient role"
        );
        return Err(CoreError::Forbidden(format!("{required} role required")));
    }

    Ok(session)
}
