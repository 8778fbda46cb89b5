use lotti_core::error::CoreError;

/// Error type for engine operations.
///
/// Storage errors bubble unmodified and are never retried here.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A domain-level error from `lotti-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience alias for engine return values.
pub type EngineResult<T> = Result<T, EngineError>;

/// Whether a sqlx error is a PostgreSQL unique-constraint violation (23505).
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}
