//! The permission store: direct grant operations.
//!
//! User rows are created lazily; "already exists" on user creation is benign
//! and swallowed. A duplicate grant surfaces as `AlreadyExists`.

use lotti_core::error::CoreError;
use lotti_core::roles::Role;
use lotti_core::roster::GroupMember;
use lotti_core::types::{PlaylistId, UserId};
use lotti_db::repositories::{GrantRepo, UserRepo};
use lotti_db::DbPool;

use crate::error::{is_unique_violation, EngineError, EngineResult};

/// Grant `role` on a playlist to a subject, creating the user row if absent.
/// The whole step is one transaction.
pub async fn add(
    pool: &DbPool,
    role: Role,
    playlist_id: &str,
    subject: UserId,
) -> EngineResult<()> {
    let mut tx = pool.begin().await?;

    UserRepo::ensure_inner(&mut *tx, subject).await?;
    GrantRepo::create_inner(&mut *tx, playlist_id, subject, role.as_str())
        .await
        .map_err(|err| grant_conflict(err, playlist_id, subject))?;

    tx.commit().await?;

    tracing::info!(
        subject = subject,
        playlist_id = playlist_id,
        role = %role,
        "Grant added"
    );

    Ok(())
}

/// Seed grants for an initial roster snapshot.
///
/// Atomic: a failure on any member rolls back the entire seeding.
pub async fn add_group(
    pool: &DbPool,
    playlist_id: &str,
    members: &[GroupMember],
) -> EngineResult<()> {
    let mut tx = pool.begin().await?;

    for member in members {
        UserRepo::ensure_inner(&mut *tx, member.user_id).await?;
        GrantRepo::create_inner(&mut *tx, playlist_id, member.user_id, member.role.as_str())
            .await
            .map_err(|err| grant_conflict(err, playlist_id, member.user_id))?;
    }

    tx.commit().await?;

    tracing::info!(
        playlist_id = playlist_id,
        members = members.len(),
        "Group roster seeded"
    );

    Ok(())
}

/// Remove a subject's grant. An absent grant is not an error.
pub async fn remove(pool: &DbPool, playlist_id: &str, subject: UserId) -> EngineResult<()> {
    let removed = GrantRepo::delete(pool, playlist_id, subject).await?;
    if removed {
        tracing::info!(subject = subject, playlist_id = playlist_id, "Grant removed");
    }
    Ok(())
}

/// Update the role on an existing grant.
pub async fn edit(
    pool: &DbPool,
    role: Role,
    playlist_id: &str,
    subject: UserId,
) -> EngineResult<()> {
    let updated = GrantRepo::update_role(pool, playlist_id, subject, role.as_str()).await?;
    if !updated {
        return Err(CoreError::NotFound {
            entity: "grant",
            id: format!("{playlist_id}/{subject}"),
        }
        .into());
    }

    tracing::info!(
        subject = subject,
        playlist_id = playlist_id,
        role = %role,
        "Grant role updated"
    );

    Ok(())
}

/// Reverse lookup: the playlist a subject holds `role` on.
///
/// With `Role::Group` this resolves an external chat id to its playlist.
pub async fn get(pool: &DbPool, subject: UserId, role: Role) -> EngineResult<PlaylistId> {
    GrantRepo::find_playlist_for_subject(pool, subject, role.as_str())
        .await?
        .ok_or_else(|| {
            CoreError::NotFound {
                entity: "grant",
                id: format!("{subject}/{role}"),
            }
            .into()
        })
}

fn grant_conflict(err: sqlx::Error, playlist_id: &str, subject: UserId) -> EngineError {
    if is_unique_violation(&err) {
        CoreError::AlreadyExists(format!("grant {playlist_id}/{subject}")).into()
    } else {
        err.into()
    }
}
