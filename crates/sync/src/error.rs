use lotti_engine::EngineError;

/// Error type for roster synchronization.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The external chat source failed (roster fetch, title lookup).
    #[error("chat source error: {0}")]
    Source(#[from] anyhow::Error),

    /// A grant or playlist operation failed.
    #[error(transparent)]
    Engine(#[from] EngineError),
}
