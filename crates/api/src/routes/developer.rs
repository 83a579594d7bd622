//! Route definitions for the `/developers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::developer;
use crate::state::AppState;

/// Routes mounted at `/developers`.
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
        .route("/", get(developer::list).post(developer::create))
        .route(
            "/{id}",
            get(developer::get_by_id)
                .put(developer::update)
                .delete(developer::delete),
        )
}
