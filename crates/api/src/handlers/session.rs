//! Handler for the `/session` resource.

use axum::Json;
use backlog_core::session::Session;

use crate::middleware::auth::MaybeSession;

/// GET /api/v1/session
///
/// The caller's session, or `null` when the request is anonymous.
pub async fn current(MaybeSession(session): MaybeSession) -> Json<Option<Session>> {
    Json(session)
}
