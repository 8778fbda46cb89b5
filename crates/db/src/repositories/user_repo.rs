//! Repository for the `users` table.

use lotti_core::types::UserId;
use sqlx::{PgConnection, PgPool};

use crate::models::user::User;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at";

/// Provides lazy-creation and lookup for users.
pub struct UserRepo;

impl UserRepo {
    /// Find a user by external subject id.
    pub async fn find_by_id(pool: &PgPool, id: UserId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a user row if none exists yet. "Already exists" is not an
    /// error; the placeholder name is derived from the subject id.
    pub async fn ensure_inner(conn: &mut PgConnection, id: UserId) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO users (id, name) VALUES ($1, $2) ON CONFLICT (id) DO NOTHING")
            .bind(id)
            .bind(format!("user{id}"))
            .execute(conn)
            .await?;
        Ok(())
    }
}
