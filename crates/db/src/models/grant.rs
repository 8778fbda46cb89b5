//! Permission grant entity model.

use lotti_core::types::{PlaylistId, Timestamp, UserId};
use serde::Serialize;
use sqlx::FromRow;

/// A grant row from the `permissions` table.
///
/// At most one grant exists per (playlist, subject). For group-marker grants
/// the `user_id` slot holds an external chat id.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Grant {
    pub playlist_id: PlaylistId,
    pub user_id: UserId,
    pub role: String,
    pub created_at: Timestamp,
}
