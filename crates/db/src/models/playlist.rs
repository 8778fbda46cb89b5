//! Playlist entity models.

use lotti_core::types::{PlaylistId, Timestamp, TrackId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Playlist created explicitly by a user.
pub const KIND_CUSTOM: &str = "custom";
/// Playlist mirroring an external group chat.
pub const KIND_GROUP: &str = "group";

/// A playlist row from the `playlists` table.
///
/// `allowed_tracks` is the published subset of `tracks`; both keep insertion
/// order.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Playlist {
    pub id: PlaylistId,
    pub title: String,
    pub thumbnail: String,
    pub kind: String,
    pub tracks: Vec<TrackId>,
    pub allowed_tracks: Vec<TrackId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A playlist row joined with the requesting subject's grant.
///
/// The join doubles as the authorization check: no grant, no row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PlaylistWithRole {
    pub id: PlaylistId,
    pub title: String,
    pub thumbnail: String,
    pub kind: String,
    pub tracks: Vec<TrackId>,
    pub allowed_tracks: Vec<TrackId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// The requester's role on this playlist, in stored string form.
    pub role: String,
}

/// Lightweight listing row: counts and total lengths, no track expansion.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PlaylistSummary {
    pub id: PlaylistId,
    pub title: String,
    pub thumbnail: String,
    pub kind: String,
    pub role: String,
    pub track_count: i64,
    pub allowed_count: i64,
    /// Sum of track lengths in seconds.
    pub total_length: i64,
    pub allowed_length: i64,
}

/// DTO for creating a playlist. Both track sets start empty.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlaylist {
    pub id: PlaylistId,
    pub title: String,
    pub kind: String,
}
