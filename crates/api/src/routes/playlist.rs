//! Route definitions for the `/playlists` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::playlist;
use crate::state::AppState;

/// Routes mounted at `/playlists`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(playlist::list).post(playlist::create))
        .route(
            "/{id}",
            get(playlist::get_by_id)
                .put(playlist::update)
                .delete(playlist::delete),
        )
}
