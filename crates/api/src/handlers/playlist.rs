//! Handlers for the `/playlists` resource, including track moderation.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use lotti_core::error::CoreError;
use lotti_core::roles::Role;
use lotti_db::models::playlist::{Playlist, PlaylistSummary, KIND_CUSTOM};
use lotti_db::models::track::CreateTrack;
use lotti_engine::playlists::PlaylistDetail;
use lotti_engine::{catalog, moderation, permissions, playlists};
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreatePlaylistRequest {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct RenamePlaylistRequest {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateThumbnailRequest {
    pub thumbnail: String,
}

/// POST /api/v1/playlists
///
/// Creates a custom playlist and grants the creator owner.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreatePlaylistRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Playlist>>)> {
    let playlist = playlists::create(&state.pool, &input.title, KIND_CUSTOM).await?;
    permissions::add(&state.pool, Role::Owner, &playlist.id, user.user_id).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: playlist })))
}

/// GET /api/v1/playlists
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<PlaylistSummary>>>> {
    let summaries = playlists::get_all(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: summaries }))
}

/// GET /api/v1/playlists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<PlaylistDetail>>> {
    let detail = playlists::get_by_id(&state.pool, &id, user.user_id).await?;
    Ok(Json(DataResponse { data: detail }))
}

/// PUT /api/v1/playlists/{id}
pub async fn rename(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(input): Json<RenamePlaylistRequest>,
) -> AppResult<StatusCode> {
    playlists::rename(&state.pool, &id, user.user_id, &input.title).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/playlists/{id}/thumbnail
pub async fn update_thumbnail(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(input): Json<UpdateThumbnailRequest>,
) -> AppResult<StatusCode> {
    playlists::update_thumbnail(&state.pool, &id, user.user_id, &input.thumbnail).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/playlists/{id}
///
/// Owner only, and only for custom playlists; group playlists follow the
/// lifecycle of their chat.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let (playlist, role) = playlists::get_scoped(&state.pool, &id, user.user_id).await?;

    if role != Role::Owner {
        return Err(CoreError::PermissionDenied(
            "only the owner can delete a playlist".into(),
        )
        .into());
    }
    if playlist.kind != KIND_CUSTOM {
        return Err(CoreError::InvalidState(
            "group playlists cannot be deleted through the API".into(),
        )
        .into());
    }

    playlists::delete(&state.pool, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/playlists/{id}/tracks
///
/// Submits a track with its enrichment metadata. The catalog row is created
/// on first reference; the submission outcome depends on the actor's role.
pub async fn submit_track(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(input): Json<CreateTrack>,
) -> AppResult<StatusCode> {
    let track = catalog::ensure_track(&state.pool, &input).await?;
    moderation::submit(&state.pool, &id, &track.id, user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/playlists/{id}/tracks/{track_id}/approve
pub async fn approve_track(
    State(state): State<AppState>,
    user: AuthUser,
    Path((id, track_id)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    moderation::approve(&state.pool, &id, &track_id, user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/playlists/{id}/tracks/{track_id}/decline
pub async fn decline_track(
    State(state): State<AppState>,
    user: AuthUser,
    Path((id, track_id)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    moderation::decline(&state.pool, &id, &track_id, user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/playlists/{id}/tracks/{track_id}
///
/// Unapproves an allowed track, returning it to the moderation queue.
pub async fn unapprove_track(
    State(state): State<AppState>,
    user: AuthUser,
    Path((id, track_id)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    moderation::unapprove(&state.pool, &id, &track_id, user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
