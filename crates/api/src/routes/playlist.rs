//! Route definitions for the `/playlists` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::playlist;
use crate::state::AppState;

/// Routes mounted at `/playlists`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> rename
/// DELETE /{id}                              -> delete
/// PUT    /{id}/thumbnail                    -> update_thumbnail
///
/// POST   /{id}/tracks                       -> submit_track
/// DELETE /{id}/tracks/{track_id}            -> unapprove_track
/// POST   /{id}/tracks/{track_id}/approve    -> approve_track
/// POST   /{id}/tracks/{track_id}/decline    -> decline_track
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(playlist::list).post(playlist::create))
        .route(
            "/{id}",
            get(playlist::get_by_id)
                .put(playlist::rename)
                .delete(playlist::delete),
        )
        .route("/{id}/thumbnail", put(playlist::update_thumbnail))
        .route("/{id}/tracks", post(playlist::submit_track))
        .route(
            "/{id}/tracks/{track_id}",
            axum::routing::delete(playlist::unapprove_track),
        )
        .route("/{id}/tracks/{track_id}/approve", post(playlist::approve_track))
        .route("/{id}/tracks/{track_id}/decline", post(playlist::decline_track))
}
