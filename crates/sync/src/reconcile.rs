//! Per-event roster reconciliation.
//!
//! Translates a single [`ParticipantDelta`] into grant maintenance and
//! playlist lifecycle. The bot's own identity is an explicit parameter so
//! the function stays testable and reentrant.

use lotti_core::error::CoreError;
use lotti_core::roles::Role;
use lotti_core::roster::{GroupMember, ParticipantDelta};
use lotti_core::types::ChatId;
use lotti_core::types::UserId;
use lotti_db::models::playlist::KIND_GROUP;
use lotti_db::DbPool;
use lotti_engine::{permissions, playlists, EngineError};

use crate::error::SyncError;
use crate::snapshot::fetch_member_ids;
use crate::source::{Notifier, RosterSource};

/// Greeting sent when the bot is added to a chat as a plain member.
const GREETING: &str = "Hi, I'm Lotti, a playlist bot! Promote me to admin so I \
                        can see the member list and start a shared playlist.";

/// Acknowledgement sent when the bot is promoted and starts mirroring.
const PROMOTED: &str = "Thanks for the promotion! Setting up the group playlist now.";

/// Apply one membership-change event.
///
/// Events for chats without a tracked playlist are ignored, not failed.
pub async fn reconcile(
    pool: &DbPool,
    source: &dyn RosterSource,
    notifier: &dyn Notifier,
    bot_id: UserId,
    delta: &ParticipantDelta,
) -> Result<(), SyncError> {
    tracing::info!(
        chat_id = delta.chat_id,
        user_id = delta.user_id,
        prev_role = ?delta.prev_role,
        new_role = ?delta.new_role,
        "Handling roster event"
    );

    if delta.user_id == bot_id {
        reconcile_self(pool, source, notifier, bot_id, delta).await
    } else {
        reconcile_member(pool, delta).await
    }
}

/// The event concerns the bot itself: joining, promotion or demotion.
async fn reconcile_self(
    pool: &DbPool,
    source: &dyn RosterSource,
    notifier: &dyn Notifier,
    bot_id: UserId,
    delta: &ParticipantDelta,
) -> Result<(), SyncError> {
    if delta.prev_role.is_none() {
        // Just joined; nothing to mirror yet.
        notify(notifier, delta.chat_id, GREETING).await;
        return Ok(());
    }

    if delta.prev_role == Some(Role::Viewer) && delta.new_role == Some(Role::Moderator) {
        notify(notifier, delta.chat_id, PROMOTED).await;

        let title = source.chat_title(delta.chat_id).await?;
        let member_ids = fetch_member_ids(source, delta.chat_id, bot_id).await?;
        let members = seed_roles(&member_ids, delta.actor_id);

        let playlist = playlists::create(pool, &title, KIND_GROUP).await?;
        permissions::add(pool, Role::Group, &playlist.id, delta.chat_id).await?;
        permissions::add_group(pool, &playlist.id, &members).await?;

        tracing::info!(
            chat_id = delta.chat_id,
            playlist_id = %playlist.id,
            members = members.len(),
            "Chat promoted to tracked playlist"
        );
        return Ok(());
    }

    if delta.new_role.is_none() || delta.new_role == Some(Role::Viewer) {
        // Demoted or removed: the mirrored playlist goes away. A chat the bot
        // never started tracking has nothing to tear down.
        let playlist_id = match permissions::get(pool, delta.chat_id, Role::Group).await {
            Ok(id) => id,
            Err(EngineError::Core(CoreError::NotFound { .. })) => return Ok(()),
            Err(err) => return Err(err.into()),
        };
        playlists::delete(pool, &playlist_id).await?;

        tracing::info!(
            chat_id = delta.chat_id,
            playlist_id = %playlist_id,
            "Chat untracked, playlist deleted"
        );
        return Ok(());
    }

    Ok(())
}

/// The event concerns an ordinary member of a (possibly) tracked chat.
async fn reconcile_member(pool: &DbPool, delta: &ParticipantDelta) -> Result<(), SyncError> {
    let playlist_id = match permissions::get(pool, delta.chat_id, Role::Group).await {
        Ok(id) => id,
        // Chat not tracked: nothing to mirror.
        Err(EngineError::Core(CoreError::NotFound { .. })) => return Ok(()),
        Err(err) => return Err(err.into()),
    };

    match (delta.prev_role, delta.new_role) {
        (_, None) => permissions::remove(pool, &playlist_id, delta.user_id).await?,
        (None, Some(role)) => permissions::add(pool, role, &playlist_id, delta.user_id).await?,
        (Some(_), Some(role)) => permissions::edit(pool, role, &playlist_id, delta.user_id).await?,
    }

    Ok(())
}

/// Mirror an external chat title change onto the tracked playlist, if any.
pub async fn reconcile_title(
    pool: &DbPool,
    chat_id: ChatId,
    title: &str,
) -> Result<(), SyncError> {
    let playlist_id = match permissions::get(pool, chat_id, Role::Group).await {
        Ok(id) => id,
        Err(EngineError::Core(CoreError::NotFound { .. })) => return Ok(()),
        Err(err) => return Err(err.into()),
    };

    playlists::set_title(pool, &playlist_id, title).await?;
    tracing::info!(chat_id = chat_id, playlist_id = %playlist_id, "Playlist title mirrored");
    Ok(())
}

/// Seed roles for an initial snapshot: every member a viewer except the
/// promoting actor, who becomes owner.
fn seed_roles(member_ids: &[UserId], actor_id: UserId) -> Vec<GroupMember> {
    let mut members: Vec<GroupMember> = member_ids
        .iter()
        .map(|&user_id| GroupMember {
            user_id,
            role: if user_id == actor_id {
                Role::Owner
            } else {
                Role::Viewer
            },
        })
        .collect();

    // The promoting actor may be missing from the snapshot (e.g. hidden by
    // the source); they still own the playlist.
    if !member_ids.contains(&actor_id) {
        members.push(GroupMember {
            user_id: actor_id,
            role: Role::Owner,
        });
    }

    members
}

/// Best-effort delivery; failures are logged and never propagate.
async fn notify(notifier: &dyn Notifier, chat_id: ChatId, text: &str) {
    if let Err(err) = notifier.send(chat_id, text).await {
        tracing::warn!(chat_id = chat_id, error = %err, "Notification delivery failed");
    }
}
