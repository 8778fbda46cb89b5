//! Repository for the `tracks` table (the deduplicated track catalog).

use lotti_core::types::TrackId;
use sqlx::{PgConnection, PgPool};

use crate::models::track::{CreateTrack, Track};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, authors, thumbnail, length, explicit, created_at";

/// Provides catalog operations for tracks.
pub struct TrackRepo;

impl TrackRepo {
    /// Find a track by its external catalog id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks WHERE id = $1");
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new track, returning the created row.
    pub async fn create_inner(
        conn: &mut PgConnection,
        input: &CreateTrack,
    ) -> Result<Track, sqlx::Error> {
        let query = format!(
            "INSERT INTO tracks (id, title, authors, thumbnail, length, explicit)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(&input.id)
            .bind(&input.title)
            .bind(&input.authors)
            .bind(&input.thumbnail)
            .bind(input.length)
            .bind(input.explicit)
            .fetch_one(conn)
            .await
    }

    /// Expand a playlist's id set into full rows, preserving the set's order.
    ///
    /// Ids with no catalog row are silently absent from the result.
    pub async fn find_ordered(pool: &PgPool, ids: &[TrackId]) -> Result<Vec<Track>, sqlx::Error> {
        let query = "SELECT t.id, t.title, t.authors, t.thumbnail, t.length, t.explicit, \
                            t.created_at
                     FROM unnest($1::TEXT[]) WITH ORDINALITY AS u(id, ord)
                     JOIN tracks t ON t.id = u.id
                     ORDER BY u.ord";
        sqlx::query_as::<_, Track>(query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }
}
