//! Handlers for the `/franchises` resource.
//!
//! Reads are public. Mutations and the trash endpoints require an admin.

use axum::extract::{Path, State};
use axum::Json;
use backlog_db::models::franchise::{Franchise, FranchiseInput};

use super::validate_input;
use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::procedures;
use crate::response::Envelope;
use crate::state::AppState;

/// POST /api/v1/franchises
pub async fn create(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<FranchiseInput>,
) -> AppResult<Envelope<Franchise>> {
    validate_input(&input)?;
    tracing::info!(user_id = %session.user_id, name = %input.name, "Creating franchise");
    Ok(procedures::create(state.storage.franchises.as_ref(), &input)
        .await
        .into())
}

/// GET /api/v1/franchises
pub async fn list(State(state): State<AppState>) -> Envelope<Vec<Franchise>> {
    procedures::get_all(state.storage.franchises.as_ref())
        .await
        .into()
}

/// GET /api/v1/franchises/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Envelope<Franchise> {
    procedures::get_by_id(state.storage.franchises.as_ref(), &id)
        .await
        .into()
}

/// PUT /api/v1/franchises/{id}
pub async fn update(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<FranchiseInput>,
) -> AppResult<Envelope<Franchise>> {
    validate_input(&input)?;
    tracing::info!(user_id = %session.user_id, %id, "Updating franchise");
    Ok(procedures::update(state.storage.franchises.as_ref(), &id, &input)
        .await
        .into())
}

/// DELETE /api/v1/franchises/{id}
///
/// Soft delete. The response carries the franchise as it was before.
pub async fn delete(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Envelope<Franchise> {
    tracing::info!(user_id = %session.user_id, %id, "Deleting franchise");
    procedures::delete(state.storage.franchises.as_ref(), &id)
        .await
        .into()
}

/// GET /api/v1/franchises/trash
pub async fn list_deleted(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
) -> Envelope<Vec<Franchise>> {
    procedures::get_all_deleted(state.storage.franchises.as_ref())
        .await
        .into()
}

/// GET /api/v1/franchises/trash/{id}
pub async fn get_deleted_by_id(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Envelope<Franchise> {
    procedures::get_deleted_by_id(state.storage.franchises.as_ref(), &id)
        .await
        .into()
}

/// POST /api/v1/franchises/{id}/restore
pub async fn restore(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Envelope<Franchise> {
    tracing::info!(user_id = %session.user_id, %id, "Restoring franchise");
    procedures::restore(state.storage.franchises.as_ref(), &id)
        .await
        .into()
}
