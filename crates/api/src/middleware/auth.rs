//! JWT-based session extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use backlog_core::error::CoreError;
use backlog_core::roles::Role;
use backlog_core::session::Session;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The caller's session, if the request carries one.
///
/// A missing `Authorization` header yields `MaybeSession(None)`. A header
/// that is present but malformed, expired, or signed with the wrong key is
/// rejected with 401 rather than treated as anonymous.
///
/// ```ignore
/// async fn whoami(MaybeSession(session): MaybeSession) -> Json<Option<Session>> {
///     Json(session)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MaybeSession(pub Option<Session>);

impl FromRequestParts<AppState> for MaybeSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(header) = parts.headers.get(AUTHORIZATION) else {
            return Ok(MaybeSession(None));
        };

        let header = header
            .to_str()
            .map_err(|_| unauthorized("Invalid Authorization header"))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| unauthorized("Invalid Authorization format. Expected: Bearer <token>"))?;

        let claims = validate_token(token, &state.config.jwt)
            .map_err(|_| unauthorized("Invalid or expired token"))?;

        let role: Role = claims
            .role
            .parse()
            .map_err(|_| unauthorized("Token carries an unknown role"))?;

        Ok(MaybeSession(Some(Session {
            user_id: claims.sub,
            role,
        })))
    }
}

fn unauthorized(msg: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(msg.into()))
}
