//! Handlers for the `/developers` resource.
//!
//! Reads require a session; mutations require an admin. Deletes are permanent.

use axum::extract::{Path, State};
use axum::Json;
use backlog_db::models::developer::{Developer, DeveloperInput};

use super::validate_input;
use crate::error::AppResult;
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::procedures;
use crate::response::Envelope;
use crate::state::AppState;

/// POST /api/v1/developers
pub async fn create(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<DeveloperInput>,
) -> AppResult<Envelope<Developer>> {
    validate_input(&input)?;
    tracing::info!(user_id = %session.user_id, name = %input.name, "Creating developer");
    Ok(procedures::create(state.storage.developers.as_ref(), &input)
        .await
        .into())
}

/// GET /api/v1/developers
pub async fn list(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
) -> Envelope<Vec<Developer>> {
    procedures::get_all(state.storage.developers.as_ref())
        .await
        .into()
}

/// GET /api/v1/developers/{id}
pub async fn get_by_id(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Envelope<Developer> {
    procedures::get_by_id(state.storage.developers.as_ref(), &id)
        .await
        .into()
}

/// PUT /api/v1/developers/{id}
pub async fn update(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<DeveloperInput>,
) -> AppResult<Envelope<Developer>> {
    validate_input(&input)?;
    tracing::info!(user_id = %session.user_id, %id, "Updating developer");
    Ok(procedures::update(state.storage.developers.as_ref(), &id, &input)
        .await
        .into())
}

/// DELETE /api/v1/developers/{id}
pub async fn delete(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Envelope<Developer> {
    tracing::info!(user_id = %session.user_id, %id, "Deleting developer");
    procedures::delete(state.storage.developers.as_ref(), &id)
        .await
        .into()
}
