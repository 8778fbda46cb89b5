//! Repository for the `playlists` table.

use lotti_core::types::{TrackId, UserId};
use sqlx::{PgConnection, PgPool};

use crate::models::playlist::{CreatePlaylist, Playlist, PlaylistSummary, PlaylistWithRole};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, thumbnail, kind, tracks, allowed_tracks, created_at, updated_at";

/// Provides CRUD operations for playlists.
pub struct PlaylistRepo;

impl PlaylistRepo {
    /// Insert a new playlist with both track sets empty.
    pub async fn create_inner(
        conn: &mut PgConnection,
        input: &CreatePlaylist,
    ) -> Result<Playlist, sqlx::Error> {
        let query = format!(
            "INSERT INTO playlists (id, title, kind, tracks, allowed_tracks)
             VALUES ($1, $2, $3, '{{}}', '{{}}')
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Playlist>(&query)
            .bind(&input.id)
            .bind(&input.title)
            .bind(&input.kind)
            .fetch_one(conn)
            .await
    }

    /// Find a playlist by id without any grant scoping. Internal use only;
    /// request paths go through [`PlaylistRepo::find_for_user`].
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Playlist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM playlists WHERE id = $1");
        sqlx::query_as::<_, Playlist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a playlist joined with the requesting subject's grant.
    ///
    /// Returns `None` when the playlist does not exist or the subject holds
    /// no grant on it; callers must not distinguish the two cases.
    pub async fn find_for_user(
        pool: &PgPool,
        playlist_id: &str,
        user_id: UserId,
    ) -> Result<Option<PlaylistWithRole>, sqlx::Error> {
        let query = "SELECT p.id, p.title, p.thumbnail, p.kind, p.tracks, p.allowed_tracks, \
                            p.created_at, p.updated_at, g.role
                     FROM playlists p
                     JOIN permissions g ON g.playlist_id = p.id
                     WHERE p.id = $1 AND g.user_id = $2";
        sqlx::query_as::<_, PlaylistWithRole>(query)
            .bind(playlist_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List every playlist the subject holds a member-role grant on, with
    /// counts and total lengths computed in SQL. No track expansion.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: UserId,
    ) -> Result<Vec<PlaylistSummary>, sqlx::Error> {
        let query = "SELECT p.id, p.title, p.thumbnail, p.kind, g.role,
                            cardinality(p.tracks)::BIGINT AS track_count,
                            cardinality(p.allowed_tracks)::BIGINT AS allowed_count,
                            COALESCE((SELECT SUM(t.length) FROM tracks t
                                      WHERE t.id = ANY(p.tracks)), 0)::BIGINT AS total_length,
                            COALESCE((SELECT SUM(t.length) FROM tracks t
                                      WHERE t.id = ANY(p.allowed_tracks)), 0)::BIGINT AS allowed_length
                     FROM playlists p
                     JOIN permissions g ON g.playlist_id = p.id
                     WHERE g.user_id = $1 AND g.role IN ('viewer', 'moderator', 'owner')
                     ORDER BY p.id";
        sqlx::query_as::<_, PlaylistSummary>(query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite both track-id sets in one statement.
    pub async fn update_sets_inner(
        conn: &mut PgConnection,
        id: &str,
        tracks: &[TrackId],
        allowed_tracks: &[TrackId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE playlists SET tracks = $2, allowed_tracks = $3, updated_at = now()
             WHERE id = $1",
        )
        .bind(id)
        .bind(tracks)
        .bind(allowed_tracks)
        .execute(conn)
        .await?;
        Ok(())
    }

    /// Update the playlist title.
    pub async fn rename_inner(
        conn: &mut PgConnection,
        id: &str,
        title: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE playlists SET title = $2, updated_at = now() WHERE id = $1")
            .bind(id)
            .bind(title)
            .execute(conn)
            .await?;
        Ok(())
    }

    /// Update the playlist thumbnail URL.
    pub async fn update_thumbnail_inner(
        conn: &mut PgConnection,
        id: &str,
        thumbnail: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE playlists SET thumbnail = $2, updated_at = now() WHERE id = $1")
            .bind(id)
            .bind(thumbnail)
            .execute(conn)
            .await?;
        Ok(())
    }

    /// Delete the playlist row only. Grants are not cascaded.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM playlists WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
