//! Track catalog entity model.

use lotti_core::types::{Timestamp, TrackId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A track row from the `tracks` table, keyed by the external catalog id.
///
/// Immutable after first insert except for overwrites by the catalog
/// enrichment path.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub authors: Vec<String>,
    pub thumbnail: String,
    /// Length in seconds.
    pub length: i32,
    pub explicit: bool,
    pub created_at: Timestamp,
}

/// DTO for inserting track metadata fetched from the enrichment source.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTrack {
    pub id: TrackId,
    pub title: String,
    pub authors: Vec<String>,
    pub thumbnail: String,
    pub length: i32,
    pub explicit: bool,
}
