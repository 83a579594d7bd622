//! Route definitions for the `/publishers` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::publisher;
use crate::state::AppState;

/// Routes mounted at `/publishers`.
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
        .route("/", get(publisher::list).post(publisher::create))
        .route("/trash", get(publisher::list_deleted))
        .route("/trash/{id}", get(publisher::get_deleted_by_id))
        .route(
            "/{id}",
            get(publisher::get_by_id)
                .put(publisher::update)
                .delete(publisher::delete),
        )
        .route("/{id}/restore", post(publisher::restore))
}
