#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The entity is missing, or the requester holds no grant on it. The two
    /// cases are indistinguishable on purpose so existence never leaks to
    /// non-members.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// A grant exists but the role is insufficient for the operation.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// The record already exists. Benign on user creation; callers swallow it.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// An illegal track-state transition, e.g. declining an allowed track.
    #[error("Invalid state: {0}")]
    InvalidState(String),
}
