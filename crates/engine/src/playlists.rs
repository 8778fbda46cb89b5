//! Playlist aggregate access.

use lotti_core::error::CoreError;
use lotti_core::roles::Role;
use lotti_core::types::{PlaylistId, TrackId, UserId};
use lotti_db::models::playlist::{CreatePlaylist, Playlist, PlaylistSummary, PlaylistWithRole};
use lotti_db::models::track::Track;
use lotti_db::repositories::{PlaylistRepo, TrackRepo};
use lotti_db::DbPool;
use serde::Serialize;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::moderation::fetch_scoped;

/// A grant-scoped playlist with its candidate tracks expanded into full
/// catalog rows. `allowed_tracks` stays an id set; clients resolve against
/// `tracks`.
#[derive(Debug, Clone, Serialize)]
pub struct PlaylistDetail {
    pub id: PlaylistId,
    pub title: String,
    pub thumbnail: String,
    pub kind: String,
    pub role: Role,
    pub tracks: Vec<Track>,
    pub allowed_tracks: Vec<TrackId>,
}

/// Create a playlist with a fresh time-sortable id and both sets empty.
///
/// Granting access is the caller's move: the API grants its creator owner,
/// the synchronizer seeds a whole roster.
pub async fn create(pool: &DbPool, title: &str, kind: &str) -> EngineResult<Playlist> {
    let input = CreatePlaylist {
        id: Uuid::now_v7().to_string(),
        title: title.to_string(),
        kind: kind.to_string(),
    };

    let mut tx = pool.begin().await?;
    let playlist = PlaylistRepo::create_inner(&mut *tx, &input).await?;
    tx.commit().await?;

    tracing::info!(playlist_id = %playlist.id, kind = kind, "Playlist created");
    Ok(playlist)
}

/// Fetch a playlist through the requester's grant and expand its tracks.
pub async fn get_by_id(
    pool: &DbPool,
    playlist_id: &str,
    user_id: UserId,
) -> EngineResult<PlaylistDetail> {
    let (playlist, role) = fetch_scoped(pool, playlist_id, user_id).await?;
    let tracks = TrackRepo::find_ordered(pool, &playlist.tracks).await?;

    Ok(PlaylistDetail {
        id: playlist.id,
        title: playlist.title,
        thumbnail: playlist.thumbnail,
        kind: playlist.kind,
        role,
        tracks,
        allowed_tracks: playlist.allowed_tracks,
    })
}

/// Fetch a playlist through the requester's grant without track expansion.
pub async fn get_scoped(
    pool: &DbPool,
    playlist_id: &str,
    user_id: UserId,
) -> EngineResult<(PlaylistWithRole, Role)> {
    fetch_scoped(pool, playlist_id, user_id).await
}

/// List every playlist the requester holds a member grant on. Counts only.
pub async fn get_all(pool: &DbPool, user_id: UserId) -> EngineResult<Vec<PlaylistSummary>> {
    Ok(PlaylistRepo::list_for_user(pool, user_id).await?)
}

/// Rename a playlist on behalf of a member.
pub async fn rename(
    pool: &DbPool,
    playlist_id: &str,
    user_id: UserId,
    title: &str,
) -> EngineResult<()> {
    fetch_scoped(pool, playlist_id, user_id).await?;

    let mut tx = pool.begin().await?;
    PlaylistRepo::rename_inner(&mut *tx, playlist_id, title).await?;
    tx.commit().await?;

    tracing::info!(user_id = user_id, playlist_id = playlist_id, "Playlist renamed");
    Ok(())
}

/// Rename a playlist without a requester, e.g. when mirroring a chat title
/// change delivered by the synchronizer.
pub async fn set_title(pool: &DbPool, playlist_id: &str, title: &str) -> EngineResult<()> {
    let mut tx = pool.begin().await?;
    PlaylistRepo::rename_inner(&mut *tx, playlist_id, title).await?;
    tx.commit().await?;
    Ok(())
}

/// Update a playlist's thumbnail URL on behalf of a member.
pub async fn update_thumbnail(
    pool: &DbPool,
    playlist_id: &str,
    user_id: UserId,
    thumbnail: &str,
) -> EngineResult<()> {
    fetch_scoped(pool, playlist_id, user_id).await?;

    let mut tx = pool.begin().await?;
    PlaylistRepo::update_thumbnail_inner(&mut *tx, playlist_id, thumbnail).await?;
    tx.commit().await?;

    tracing::info!(
        user_id = user_id,
        playlist_id = playlist_id,
        "Playlist thumbnail updated"
    );
    Ok(())
}

/// Delete the playlist row. Grants on it are left behind.
pub async fn delete(pool: &DbPool, playlist_id: &str) -> EngineResult<()> {
    let removed = PlaylistRepo::delete(pool, playlist_id).await?;
    if !removed {
        return Err(CoreError::NotFound {
            entity: "playlist",
            id: playlist_id.to_string(),
        }
        .into());
    }

    tracing::info!(playlist_id = playlist_id, "Playlist deleted");
    Ok(())
}
