//! Role-based access control (RBAC) extractors.
//!
//! Each extractor runs [`authorize`] on the request's [`MaybeSession`] and
//! rejects before the handler body runs, so a rejected call never reaches
//! storage. Use these in route handlers to enforce authorization at the type
//! level.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use backlog_core::roles::Role;
use backlog_core::session::{authorize, Session};

use super::auth::MaybeSession;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `admin` role. Rejects with 401 without a session and 403
/// for any other role.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(session): RequireAdmin) -> AppResult<Json<()>> {
///     // session is guaranteed to be an admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub Session);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let MaybeSession(session) = MaybeSession::from_request_parts(parts, state).await?;
        let session = authorize(session.as_ref(), Role::Admin)?;
        Ok(RequireAdmin(session.clone()))
    }
}

/// Requires any authenticated caller (any valid role).
pub struct RequireAuth(pub Session);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let MaybeSession(session) = MaybeSession::from_request_parts(parts, state).await?;
        let session = authorize(session.as_ref(), Role::User)?;
        Ok(RequireAuth(session.clone()))
    }
}
