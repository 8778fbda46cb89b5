//! Route definitions for the `/tracks` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::track;
use crate::state::AppState;

/// Routes mounted at `/tracks`.
///
/// ```text
/// GET /{id} -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", get(track::get_by_id))
}
