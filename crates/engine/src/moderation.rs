//! The four moderation operations.
//!
//! Each operation reads the playlist row scoped by the requester's grant
//! (the join doubles as authorization), computes the new set values through
//! the pure state machine in `lotti_core::moderation`, and persists them in
//! a single transactional read-modify-write. No-ops return success.
//!
//! There is no row versioning: two concurrent mutators on the same playlist
//! race last-write-wins.

use lotti_core::error::CoreError;
use lotti_core::moderation as fsm;
use lotti_core::moderation::SetUpdate;
use lotti_core::roles::Role;
use lotti_core::types::UserId;
use lotti_db::models::playlist::PlaylistWithRole;
use lotti_db::repositories::{PlaylistRepo, TrackRepo};
use lotti_db::DbPool;

use crate::error::EngineResult;

/// Submit a track to a playlist.
///
/// Requires any grant on the playlist; the outcome depends on the actor's
/// role (auto-approve for moderators/owners, staged for viewers). The track
/// must already be known to the catalog.
pub async fn submit(
    pool: &DbPool,
    playlist_id: &str,
    track_id: &str,
    user_id: UserId,
) -> EngineResult<()> {
    let (playlist, role) = fetch_scoped(pool, playlist_id, user_id).await?;

    TrackRepo::find_by_id(pool, track_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "track",
            id: track_id.to_string(),
        })?;

    let update = fsm::submit(role, &playlist.tracks, &playlist.allowed_tracks, track_id)?;
    apply(pool, playlist_id, track_id, user_id, "submit", update).await
}

/// Approve a pending track (moderator/owner only).
pub async fn approve(
    pool: &DbPool,
    playlist_id: &str,
    track_id: &str,
    user_id: UserId,
) -> EngineResult<()> {
    let (playlist, role) = fetch_scoped(pool, playlist_id, user_id).await?;
    let update = fsm::approve(role, &playlist.tracks, &playlist.allowed_tracks, track_id)?;
    apply(pool, playlist_id, track_id, user_id, "approve", update).await
}

/// Decline a pending track (moderator/owner only).
pub async fn decline(
    pool: &DbPool,
    playlist_id: &str,
    track_id: &str,
    user_id: UserId,
) -> EngineResult<()> {
    let (playlist, role) = fetch_scoped(pool, playlist_id, user_id).await?;
    let update = fsm::decline(role, &playlist.tracks, &playlist.allowed_tracks, track_id)?;
    apply(pool, playlist_id, track_id, user_id, "decline", update).await
}

/// Unapprove an allowed track, returning it to the moderation queue
/// (moderator/owner only).
pub async fn unapprove(
    pool: &DbPool,
    playlist_id: &str,
    track_id: &str,
    user_id: UserId,
) -> EngineResult<()> {
    let (playlist, role) = fetch_scoped(pool, playlist_id, user_id).await?;
    let update = fsm::unapprove(role, &playlist.tracks, &playlist.allowed_tracks, track_id)?;
    apply(pool, playlist_id, track_id, user_id, "unapprove", update).await
}

/// Read the playlist through the requester's grant.
///
/// Missing playlist, missing grant and a non-member (group-marker) role all
/// collapse into `NotFound` so existence never leaks.
pub(crate) async fn fetch_scoped(
    pool: &DbPool,
    playlist_id: &str,
    user_id: UserId,
) -> EngineResult<(PlaylistWithRole, Role)> {
    let not_found = || CoreError::NotFound {
        entity: "playlist",
        id: playlist_id.to_string(),
    };

    let playlist = PlaylistRepo::find_for_user(pool, playlist_id, user_id)
        .await?
        .ok_or_else(not_found)?;

    let role = Role::parse(&playlist.role).filter(|r| r.is_member());
    match role {
        Some(role) => Ok((playlist, role)),
        None => Err(not_found().into()),
    }
}

/// Persist a computed set update inside one transaction; `None` is a no-op.
async fn apply(
    pool: &DbPool,
    playlist_id: &str,
    track_id: &str,
    user_id: UserId,
    op: &'static str,
    update: Option<SetUpdate>,
) -> EngineResult<()> {
    let Some(update) = update else {
        return Ok(());
    };

    let mut tx = pool.begin().await?;
    PlaylistRepo::update_sets_inner(
        &mut *tx,
        playlist_id,
        &update.tracks,
        &update.allowed_tracks,
    )
    .await?;
    tx.commit().await?;

    tracing::info!(
        user_id = user_id,
        playlist_id = playlist_id,
        track_id = track_id,
        op = op,
        "Track moderation applied"
    );

    Ok(())
}
