//! Route definitions for the `/franchises` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::franchise;
use crate::state::AppState;

/// Routes mounted at `/franchises`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /trash             -> list_deleted
/// GET    /trash/{id}        -> get_deleted_by_id
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// POST   /{id}/restore      -> restore
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(franchise::list).post(franchise::create))
        .route("/trash", get(franchise::list_deleted))
        .route("/trash/{id}", get(franchise::get_deleted_by_id))
        .route(
            "/{id}",
            get(franchise::get_by_id)
                .put(franchise::update)
                .delete(franchise::delete),
        )
        .route("/{id}/restore", post(franchise::restore))
}
