use roster_core::error::CoreError;

/// Failure of a repository call that can fail for domain reasons as well as
/// storage reasons.
///
/// Plain lookups keep returning `sqlx::Error`; this type is only used where a
/// call also validates its input or enforces existence.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Invalid window, missing row, duplicate key.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The store could not be reached or rejected the statement.
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}
