//! Repository for the `permissions` table.

use lotti_core::types::{PlaylistId, UserId};
use sqlx::{PgConnection, PgPool};

use crate::models::grant::Grant;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "playlist_id, user_id, role, created_at";

/// Provides grant maintenance for playlist permissions.
pub struct GrantRepo;

impl GrantRepo {
    /// Insert a grant. A duplicate (playlist, subject) pair surfaces as a
    /// unique-constraint violation.
    pub async fn create_inner(
        conn: &mut PgConnection,
        playlist_id: &str,
        user_id: UserId,
        role: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO permissions (playlist_id, user_id, role) VALUES ($1, $2, $3)")
            .bind(playlist_id)
            .bind(user_id)
            .bind(role)
            .execute(conn)
            .await?;
        Ok(())
    }

    /// Find the grant for a (playlist, subject) pair.
    pub async fn find(
        pool: &PgPool,
        playlist_id: &str,
        user_id: UserId,
    ) -> Result<Option<Grant>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM permissions WHERE playlist_id = $1 AND user_id = $2"
        );
        sqlx::query_as::<_, Grant>(&query)
            .bind(playlist_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a grant. Returns `true` if a row was removed; an absent grant
    /// is not an error.
    pub async fn delete(
        pool: &PgPool,
        playlist_id: &str,
        user_id: UserId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM permissions WHERE playlist_id = $1 AND user_id = $2")
            .bind(playlist_id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Update the role on an existing grant. Returns `true` if a row matched.
    pub async fn update_role(
        pool: &PgPool,
        playlist_id: &str,
        user_id: UserId,
        role: &str,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE permissions SET role = $3 WHERE playlist_id = $1 AND user_id = $2")
                .bind(playlist_id)
                .bind(user_id)
                .bind(role)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Reverse lookup: the playlist a subject holds the given role on.
    ///
    /// Used with the `group` role to resolve an external chat id to its
    /// mirrored playlist.
    pub async fn find_playlist_for_subject(
        pool: &PgPool,
        user_id: UserId,
        role: &str,
    ) -> Result<Option<PlaylistId>, sqlx::Error> {
        let row: Option<(PlaylistId,)> =
            sqlx::query_as("SELECT playlist_id FROM permissions WHERE user_id = $1 AND role = $2")
                .bind(user_id)
                .bind(role)
                .fetch_optional(pool)
                .await?;
        Ok(row.map(|(id,)| id))
    }
}
