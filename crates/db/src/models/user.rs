//! User entity model.

use lotti_core::types::{Timestamp, UserId};
use serde::Serialize;
use sqlx::FromRow;

/// A user row from the `users` table.
///
/// Rows are created lazily on first grant; the name is a placeholder derived
/// from the external subject id.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub created_at: Timestamp,
}
