//! Handlers for the `/publishers` resource.
//!
//! Reads are public. Mutations and the trash endpoints require an admin.

use axum::extract::{Path, State};
use axum::Json;
use backlog_db::models::publisher::{Publisher, PublisherInput};

use super::validate_input;
use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::procedures;
use crate::response::Envelope;
use crate::state::AppState;

/// POST /api/v1/publishers
pub async fn create(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<PublisherInput>,
) -> AppResult<Envelope<Publisher>> {
    validate_input(&input)?;
    tracing::info!(user_id = %session.user_id, name = %input.name, "Creating publisher");
    Ok(procedures::create(state.storage.publishers.as_ref(), &input)
        .await
        .into())
}

/// GET /api/v1/publishers
pub async fn list(State(state): State<AppState>) -> Envelope<Vec<Publisher>> {
    procedures::get_all(state.storage.publishers.as_ref())
        .await
        .into()
}

/// GET /api/v1/publishers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Envelope<Publisher> {
    procedures::get_by_id(state.storage.publishers.as_ref(), &id)
        .await
        .into()
}

/// PUT /api/v1/publishers/{id}
pub async fn update(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<PublisherInput>,
) -> AppResult<Envelope<Publisher>> {
    validate_input(&input)?;
    tracing::info!(user_id = %session.user_id, %id, "Updating publisher");
    Ok(procedures::update(state.storage.publishers.as_ref(), &id, &input)
        .await
        .into())
}

/// DELETE /api/v1/publishers/{id}
///
/// Soft delete. The response carries the publisher as it was before.
pub async fn delete(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Envelope<Publisher> {
    tracing::info!(user_id = %session.user_id, %id, "Deleting publisher");
    procedures::delete(state.storage.publishers.as_ref(), &id)
        .await
        .into()
}

/// GET /api/v1/publishers/trash
pub async fn list_deleted(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
) -> Envelope<Vec<Publisher>> {
    procedures::get_all_deleted(state.storage.publishers.as_ref())
        .await
        .into()
}

/// GET /api/v1/publishers/trash/{id}
pub async fn get_deleted_by_id(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Envelope<Publisher> {
    procedures::get_deleted_by_id(state.storage.publishers.as_ref(), &id)
        .await
        .into()
}

/// POST /api/v1/publishers/{id}/restore
pub async fn restore(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Envelope<Publisher> {
    tracing::info!(user_id = %session.user_id, %id, "Restoring publisher");
    procedures::restore(state.storage.publishers.as_ref(), &id)
        .await
        .into()
}
