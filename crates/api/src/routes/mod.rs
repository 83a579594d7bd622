pub mod developer;
pub mod franchise;
pub mod health;
pub mod playlist;
pub mod publisher;
pub mod session;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /session                                         current session (public)
///
/// /franchises                                      list (public), create (admin)
/// /franchises/{id}                                 get (public), update, delete (admin)
/// /franchises/trash                                list deleted (admin)
/// /franchises/trash/{id}                           get deleted (admin)
/// /franchises/{id}/restore                         restore (admin)
///
/// /publishers                                      same shape as /franchises
///
/// /developers                                      list (auth), create (admin)
/// /developers/{id}                                 get (auth), update, delete (admin)
///
/// /playlists                                       list (auth), create (admin)
/// /playlists/{id}                                  get (auth), update, delete (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/session", session::router())
        .nest("/franchises", franchise::router())
        .nest("/publishers", publisher::router())
        .nest("/developers", developer::router())
        .nest("/playlists", playlist::router())
}
