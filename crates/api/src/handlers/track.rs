//! Handlers for the `/tracks` resource.

use axum::extract::{Path, State};
use axum::Json;
use lotti_db::models::track::Track;
use lotti_engine::catalog;

use crate::error::AppResult;
use crate::middleware::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/tracks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Track>>> {
    let track = catalog::get_track(&state.pool, &id).await?;
    Ok(Json(DataResponse { data: track }))
}
