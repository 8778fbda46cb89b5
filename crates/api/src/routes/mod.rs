pub mod health;
pub mod playlist;
pub mod track;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /playlists                                       list, create
/// /playlists/{id}                                  get, rename, delete
/// /playlists/{id}/thumbnail                        update thumbnail (PUT)
/// /playlists/{id}/tracks                           submit track (POST)
/// /playlists/{id}/tracks/{track_id}                unapprove (DELETE)
/// /playlists/{id}/tracks/{track_id}/approve        approve (POST)
/// /playlists/{id}/tracks/{track_id}/decline        decline (POST)
///
/// /tracks/{id}                                     get catalog track
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/playlists", playlist::router())
        .nest("/tracks", track::router())
}
