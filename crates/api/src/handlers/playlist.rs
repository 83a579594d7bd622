//! Handlers for the `/playlists` resource.
//!
//! Reads require a session; mutations require an admin. Deletes are permanent.

use axum::extract::{Path, State};
use axum::Json;
use backlog_db::models::playlist::{Playlist, PlaylistInput};

use super::validate_input;
use crate::error::AppResult;
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::procedures;
use crate::response::Envelope;
use crate::state::AppState;

/// POST /api/v1/playlists
pub async fn create(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<PlaylistInput>,
) -> AppResult<Envelope<Playlist>> {
    validate_input(&input)?;
    tracing::info!(user_id = %session.user_id, name = %input.name, "Creating playlist");
    Ok(procedures::create(state.storage.playlists.as_ref(), &input)
        .await
        .into())
}

/// GET /api/v1/playlists
pub async fn list(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
) -> Envelope<Vec<Playlist>> {
    procedures::get_all(state.storage.playlists.as_ref())
        .await
        .into()
}

/// GET /api/v1/playlists/{id}
pub async fn get_by_id(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Envelope<Playlist> {
    procedures::get_by_id(state.storage.playlists.as_ref(), &id)
        .await
        .into()
}

/// PUT /api/v1/playlists/{id}
pub async fn update(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<PlaylistInput>,
) -> AppResult<Envelope<Playlist>> {
    validate_input(&input)?;
    tracing::info!(user_id = %session.user_id, %id, "Updating playlist");
    Ok(procedures::update(state.storage.playlists.as_ref(), &id, &input)
        .await
        .into())
}

/// DELETE /api/v1/playlists/{id}
pub async fn delete(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Envelope<Playlist> {
    tracing::info!(user_id = %session.user_id, %id, "Deleting playlist");
    procedures::delete(state.storage.playlists.as_ref(), &id)
        .await
        .into()
}
