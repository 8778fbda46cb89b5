//! The per-(playlist, track) moderation state machine.
//!
//! A track is `absent`, `pending` (in `tracks` only) or `allowed` (in both
//! sets). The four transitions here are pure: they take the current set
//! values plus the actor's role and return the new values, an error, or
//! `None` when the operation is an idempotent no-op. Callers persist the
//! result in a single transactional read-modify-write.
//!
//! Concurrent mutators on the same playlist are last-write-wins; there is no
//! version column.

use crate::error::CoreError;
use crate::roles::{can_moderate, Role};
use crate::types::TrackId;

/// New values for a playlist's two track-id sets after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetUpdate {
    pub tracks: Vec<TrackId>,
    pub allowed_tracks: Vec<TrackId>,
}

/// Submit a track to a playlist.
///
/// Moderators and owners auto-approve: the track lands in both sets. Viewers
/// only stage it in `tracks` for review. Anything else (track already allowed,
/// viewer re-submitting a pending track) is a no-op.
pub fn submit(
    role: Role,
    tracks: &[TrackId],
    allowed_tracks: &[TrackId],
    track_id: &str,
) -> Result<Option<SetUpdate>, CoreError> {
    if can_moderate(role) && !contains(allowed_tracks, track_id) {
        Ok(Some(SetUpdate {
            tracks: insert(tracks, track_id),
            allowed_tracks: insert(allowed_tracks, track_id),
        }))
    } else if role == Role::Viewer && !contains(tracks, track_id) {
        Ok(Some(SetUpdate {
            tracks: insert(tracks, track_id),
            allowed_tracks: allowed_tracks.to_vec(),
        }))
    } else {
        Ok(None)
    }
}

/// Approve a pending track, publishing it into `allowed_tracks`.
pub fn approve(
    role: Role,
    tracks: &[TrackId],
    allowed_tracks: &[TrackId],
    track_id: &str,
) -> Result<Option<SetUpdate>, CoreError> {
    require_moderator(role)?;

    if contains(allowed_tracks, track_id) {
        return Ok(None);
    }
    if !contains(tracks, track_id) {
        return Err(track_not_found(track_id));
    }

    Ok(Some(SetUpdate {
        tracks: tracks.to_vec(),
        allowed_tracks: insert(allowed_tracks, track_id),
    }))
}

/// Decline a pending track, removing it from the playlist entirely.
///
/// An allowed track must be unapproved first; declining it directly is an
/// invalid transition.
pub fn decline(
    role: Role,
    tracks: &[TrackId],
    allowed_tracks: &[TrackId],
    track_id: &str,
) -> Result<Option<SetUpdate>, CoreError> {
    require_moderator(role)?;

    if contains(allowed_tracks, track_id) {
        return Err(CoreError::InvalidState(format!(
            "track {track_id} is allowed; unapprove it first"
        )));
    }
    if !contains(tracks, track_id) {
        return Err(track_not_found(track_id));
    }

    Ok(Some(SetUpdate {
        tracks: remove(tracks, track_id),
        allowed_tracks: allowed_tracks.to_vec(),
    }))
}

/// Unapprove an allowed track, returning it to the moderation queue.
pub fn unapprove(
    role: Role,
    tracks: &[TrackId],
    allowed_tracks: &[TrackId],
    track_id: &str,
) -> Result<Option<SetUpdate>, CoreError> {
    require_moderator(role)?;

    if !contains(allowed_tracks, track_id) {
        return Err(track_not_found(track_id));
    }

    Ok(Some(SetUpdate {
        tracks: tracks.to_vec(),
        allowed_tracks: remove(allowed_tracks, track_id),
    }))
}

fn require_moderator(role: Role) -> Result<(), CoreError> {
    if can_moderate(role) {
        Ok(())
    } else {
        Err(CoreError::PermissionDenied(format!(
            "role {role} may not moderate tracks"
        )))
    }
}

fn track_not_found(track_id: &str) -> CoreError {
    CoreError::NotFound {
        entity: "track",
        id: track_id.to_string(),
    }
}

// The sets are small ordered arrays (dozens to hundreds of ids); linear
// membership and removal keep insertion order visible to clients.

fn contains(set: &[TrackId], id: &str) -> bool {
    set.iter().any(|t| t == id)
}

fn insert(set: &[TrackId], id: &str) -> Vec<TrackId> {
    let mut out = set.to_vec();
    if !contains(set, id) {
        out.push(id.to_string());
    }
    out
}

fn remove(set: &[TrackId], id: &str) -> Vec<TrackId> {
    set.iter().filter(|t| *t != id).cloned().collect()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn ids(ids: &[&str]) -> Vec<TrackId> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn assert_subset(update: &SetUpdate) {
        for id in &update.allowed_tracks {
            assert!(
                update.tracks.contains(id),
                "allowed track {id} missing from tracks"
            );
        }
    }

    #[test]
    fn test_viewer_submit_stages_track_only() {
        let update = submit(Role::Viewer, &[], &[], "abc").unwrap().unwrap();
        assert_eq!(update.tracks, ids(&["abc"]));
        assert!(update.allowed_tracks.is_empty());
        assert_subset(&update);
    }

    #[test]
    fn test_owner_submit_auto_approves() {
        let update = submit(Role::Owner, &ids(&["abc"]), &ids(&["abc"]), "xyz")
            .unwrap()
            .unwrap();
        assert_eq!(update.tracks, ids(&["abc", "xyz"]));
        assert_eq!(update.allowed_tracks, ids(&["abc", "xyz"]));
        assert_subset(&update);
    }

    #[test]
    fn test_moderator_submit_approves_pending_track_in_place() {
        // Track already pending: a moderator submit publishes it without
        // duplicating the entry in `tracks`.
        let update = submit(Role::Moderator, &ids(&["abc"]), &[], "abc")
            .unwrap()
            .unwrap();
        assert_eq!(update.tracks, ids(&["abc"]));
        assert_eq!(update.allowed_tracks, ids(&["abc"]));
    }

    #[test]
    fn test_submit_is_idempotent() {
        let first = submit(Role::Owner, &[], &[], "abc").unwrap().unwrap();
        let second = submit(Role::Owner, &first.tracks, &first.allowed_tracks, "abc").unwrap();
        assert!(second.is_none(), "second submit must be a no-op");

        let staged = submit(Role::Viewer, &[], &[], "abc").unwrap().unwrap();
        let again = submit(Role::Viewer, &staged.tracks, &staged.allowed_tracks, "abc").unwrap();
        assert!(again.is_none());
    }

    #[test]
    fn test_approve_publishes_pending_track() {
        let update = approve(Role::Moderator, &ids(&["abc"]), &[], "abc")
            .unwrap()
            .unwrap();
        assert_eq!(update.allowed_tracks, ids(&["abc"]));
        assert_subset(&update);
    }

    #[test]
    fn test_approve_already_allowed_is_noop() {
        let result = approve(Role::Owner, &ids(&["abc"]), &ids(&["abc"]), "abc").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_approve_unknown_track_is_not_found() {
        let err = approve(Role::Moderator, &ids(&["abc"]), &[], "unknown-track").unwrap_err();
        assert_matches!(err, CoreError::NotFound { entity: "track", .. });
    }

    #[test]
    fn test_viewer_may_not_approve() {
        let err = approve(Role::Viewer, &ids(&["abc"]), &[], "abc").unwrap_err();
        assert_matches!(err, CoreError::PermissionDenied(_));
    }

    #[test]
    fn test_decline_removes_pending_track() {
        let update = decline(Role::Owner, &ids(&["abc", "xyz"]), &ids(&["xyz"]), "abc")
            .unwrap()
            .unwrap();
        assert_eq!(update.tracks, ids(&["xyz"]));
        assert_eq!(update.allowed_tracks, ids(&["xyz"]));
        assert_subset(&update);
    }

    #[test]
    fn test_decline_allowed_track_is_invalid_state() {
        let err = decline(Role::Owner, &ids(&["abc"]), &ids(&["abc"]), "abc").unwrap_err();
        assert_matches!(err, CoreError::InvalidState(_));
    }

    #[test]
    fn test_decline_unknown_track_is_not_found() {
        let err = decline(Role::Moderator, &ids(&["abc"]), &[], "xyz").unwrap_err();
        assert_matches!(err, CoreError::NotFound { .. });
    }

    #[test]
    fn test_unapprove_returns_track_to_queue() {
        let update = unapprove(Role::Moderator, &ids(&["abc"]), &ids(&["abc"]), "abc")
            .unwrap()
            .unwrap();
        assert_eq!(update.tracks, ids(&["abc"]));
        assert!(update.allowed_tracks.is_empty());
        assert_subset(&update);
    }

    #[test]
    fn test_unapprove_pending_track_is_not_found() {
        let err = unapprove(Role::Owner, &ids(&["abc"]), &[], "abc").unwrap_err();
        assert_matches!(err, CoreError::NotFound { .. });
    }

    #[test]
    fn test_viewer_may_not_decline_or_unapprove() {
        assert_matches!(
            decline(Role::Viewer, &ids(&["abc"]), &[], "abc").unwrap_err(),
            CoreError::PermissionDenied(_)
        );
        assert_matches!(
            unapprove(Role::Viewer, &ids(&["abc"]), &ids(&["abc"]), "abc").unwrap_err(),
            CoreError::PermissionDenied(_)
        );
    }
}
